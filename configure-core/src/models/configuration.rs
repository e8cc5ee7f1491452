//! Geometry proposals sent from the compositor to a client.
use super::{ConfigureTarget, Gravity, MoveResizeFlags, Size};
use crate::serial::{self, Serial};
use serde::Serialize;

/// Where a configuration wants the window to be.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationPosition {
    /// Leave the window where it is.
    #[default]
    Unchanged,
    /// Absolute coordinates in the window's coordinate space.
    Absolute { x: i32, y: i32 },
    /// Offset from the window's anchor (parent surface or output origin). The anchor is looked
    /// up when the configuration is applied, not when it is created.
    Relative { x: i32, y: i32 },
}

/// An immutable geometry proposal.
///
/// Once built, a configuration is only ever moved: into its window's queue, then out of it when
/// it wins, gets superseded, or is orphaned. The factories below are the only way to make one,
/// so it is serializable for the wire but deliberately not deserializable.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Configuration {
    serial: Serial,
    position: ConfigurationPosition,
    size: Option<Size>,
    is_resize: bool,
    scale: i32,
    gravity: Gravity,
    flags: MoveResizeFlags,
}

impl Configuration {
    /// Builds a proposal to move and/or resize `window`.
    ///
    /// The position is included when a move was requested or when it differs from the window's
    /// current position. A `0` width or height means the client picks its own size.
    ///
    /// Negative dimensions or a non-positive scale mean the caller's policy is broken; this is
    /// asserted in debug builds.
    #[allow(clippy::too_many_arguments)]
    pub fn for_move_resize(
        window: &impl ConfigureTarget,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        scale: i32,
        flags: MoveResizeFlags,
        gravity: Gravity,
    ) -> Self {
        debug_assert!(
            width >= 0 && height >= 0,
            "negative size {width}x{height} requested"
        );
        debug_assert!(scale > 0, "non-positive scale {scale} requested");

        let position = if flags.move_requested() || window.current_rect().origin() != (x, y) {
            ConfigurationPosition::Absolute { x, y }
        } else {
            ConfigurationPosition::Unchanged
        };
        let size = (width != 0 && height != 0).then_some(Size::new(width, height));

        Self {
            serial: serial::next_serial(),
            position,
            size,
            is_resize: window.is_resize(width, height),
            scale,
            gravity,
            flags,
        }
    }

    /// Builds a proposal positioned relative to the window's anchor. Always carries a size and
    /// always counts as a resize.
    pub fn for_relative(rel_x: i32, rel_y: i32, width: i32, height: i32, scale: i32) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "relative configuration needs a size, got {width}x{height}"
        );
        debug_assert!(scale > 0, "non-positive scale {scale} requested");

        Self {
            serial: serial::next_serial(),
            position: ConfigurationPosition::Relative { x: rel_x, y: rel_y },
            size: Some(Size::new(width, height)),
            is_resize: true,
            scale,
            gravity: Gravity::default(),
            flags: MoveResizeFlags::empty(),
        }
    }

    /// Builds a proposal with no geometry at all, for state-only configures.
    pub fn for_empty() -> Self {
        Self {
            serial: serial::next_serial(),
            position: ConfigurationPosition::Unchanged,
            size: None,
            is_resize: false,
            scale: 1,
            gravity: Gravity::default(),
            flags: MoveResizeFlags::empty(),
        }
    }

    #[must_use]
    pub const fn serial(&self) -> Serial {
        self.serial
    }

    #[must_use]
    pub const fn position(&self) -> ConfigurationPosition {
        self.position
    }

    #[must_use]
    pub const fn has_position(&self) -> bool {
        matches!(self.position, ConfigurationPosition::Absolute { .. })
    }

    #[must_use]
    pub const fn has_relative_position(&self) -> bool {
        matches!(self.position, ConfigurationPosition::Relative { .. })
    }

    #[must_use]
    pub const fn size(&self) -> Option<Size> {
        self.size
    }

    #[must_use]
    pub const fn has_size(&self) -> bool {
        self.size.is_some()
    }

    #[must_use]
    pub const fn is_resize(&self) -> bool {
        self.is_resize
    }

    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    #[must_use]
    pub const fn gravity(&self) -> Gravity {
        self.gravity
    }

    #[must_use]
    pub const fn flags(&self) -> MoveResizeFlags {
        self.flags
    }
}
