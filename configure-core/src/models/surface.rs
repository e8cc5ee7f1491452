//! The window side of the negotiation.
use super::{Rect, ResolvedGeometry, Size};
use crate::Serial;
use serde::{Deserialize, Serialize};

/// What building a configuration needs to know about a window.
pub trait ConfigureTarget {
    /// The rect the window currently has on screen.
    fn current_rect(&self) -> Rect;

    /// The size most recently proposed to the window, if the window keeps track of it.
    fn last_requested_size(&self) -> Option<Size>;

    /// Whether `width`x`height` differs from what the window was last asked to be (or is, when
    /// nothing was asked yet).
    fn is_resize(&self, width: i32, height: i32) -> bool {
        let known = self
            .last_requested_size()
            .unwrap_or_else(|| self.current_rect().size());
        known != Size::new(width, height)
    }
}

/// A window taking part in configure/ack negotiation.
pub trait SurfaceWindow: ConfigureTarget {
    /// Origin of the parent surface or output that relative positions are measured from.
    fn anchor(&self) -> (i32, i32);

    /// The logical size of the buffer the client most recently committed.
    fn committed_buffer_size(&self) -> Size;

    fn apply_geometry(&mut self, geometry: &ResolvedGeometry);

    /// Called once for every configuration dropped because the window is going away.
    fn configuration_orphaned(&mut self, _serial: Serial) {}
}

/// A plain in-memory window.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    pub rect: Rect,
    pub requested: Option<Size>,
    pub anchor: (i32, i32),
    pub buffer: Size,
    pub scale: i32,
    /// Device pixel size the buffer is expected to have after the last applied geometry.
    pub device_size: Size,
    #[serde(skip)]
    pub orphaned: Vec<Serial>,
}

impl Surface {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            buffer: rect.size(),
            scale: 1,
            device_size: rect.size(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, x: i32, y: i32) -> Self {
        self.anchor = (x, y);
        self
    }

    /// Records a buffer commit from the client.
    pub fn commit_buffer(&mut self, size: Size) {
        self.buffer = size;
    }
}

impl ConfigureTarget for Surface {
    fn current_rect(&self) -> Rect {
        self.rect
    }

    fn last_requested_size(&self) -> Option<Size> {
        self.requested
    }
}

impl SurfaceWindow for Surface {
    fn anchor(&self) -> (i32, i32) {
        self.anchor
    }

    fn committed_buffer_size(&self) -> Size {
        self.buffer
    }

    fn apply_geometry(&mut self, geometry: &ResolvedGeometry) {
        self.rect = geometry.rect();
        self.scale = geometry.scale;
        self.device_size = geometry.device_size();
    }

    fn configuration_orphaned(&mut self, serial: Serial) {
        self.orphaned.push(serial);
    }
}
