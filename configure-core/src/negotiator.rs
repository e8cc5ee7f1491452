use crate::config::Config;
use crate::models::{Handle, WindowHandle};
use crate::queue::ConfigurationQueue;
use crate::transmit::ConfigureSink;
use std::collections::HashMap;

/// Owns the configuration queue of every negotiating window.
///
/// All calls happen on the compositor's event thread: proposals are queued and handed to the
/// sink as they are made, acks are matched in the order they arrive.
#[derive(Debug)]
pub struct Negotiator<H: Handle, C, SINK> {
    pub config: C,
    pub sink: SINK,
    pub(crate) queues: HashMap<WindowHandle<H>, ConfigurationQueue>,
}

impl<H, C, SINK> Negotiator<H, C, SINK>
where
    H: Handle,
    C: Config,
    SINK: ConfigureSink<H>,
{
    pub fn new(config: C, sink: SINK) -> Self {
        Self {
            config,
            sink,
            queues: HashMap::new(),
        }
    }

    /// Whether `handle` has nothing waiting for an ack. Unknown windows have nothing pending.
    pub fn is_empty(&self, handle: &WindowHandle<H>) -> bool {
        self.queues.get(handle).map_or(true, ConfigurationQueue::is_empty)
    }

    pub fn pending_len(&self, handle: &WindowHandle<H>) -> usize {
        self.queues.get(handle).map_or(0, ConfigurationQueue::len)
    }

    pub fn queue(&self, handle: &WindowHandle<H>) -> Option<&ConfigurationQueue> {
        self.queues.get(handle)
    }

    pub fn is_negotiating(&self, handle: &WindowHandle<H>) -> bool {
        self.queues.contains_key(handle)
    }
}

#[cfg(test)]
impl
    Negotiator<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::transmit::MockSink<crate::models::MockHandle>,
    >
{
    pub fn new_test(queue_warn_threshold: usize) -> Self {
        Self::new(
            crate::config::TestConfig {
                queue_warn_threshold,
            },
            crate::transmit::MockSink::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gravity, MoveResizeFlags, Rect, Size, Surface};
    use orientation_watch::{wait_for_orientation, Orientation, OrientationManager};
    use std::time::Duration;

    const WINDOW: WindowHandle<i32> = WindowHandle(11);

    #[tokio::test]
    async fn fullscreen_window_follows_output_rotation() {
        let mut negotiator = Negotiator::new_test(64);
        negotiator.register_window(WINDOW);
        let mut surface = Surface::new(Rect::new(0, 0, 1920, 1080));
        let mut orientation = OrientationManager::new();
        orientation.set_has_accelerometer(true);
        let mut subscription = orientation.subscribe();

        orientation.sensor_update(Orientation::LeftUp);
        wait_for_orientation(
            &mut subscription,
            Orientation::Undefined,
            Orientation::LeftUp,
            Duration::from_secs(1),
        )
        .await
        .unwrap();

        let (w, h) = orientation.orientation().transform_size(1920, 1080);
        let serial = negotiator.propose_move_resize(
            WINDOW,
            &surface,
            0,
            0,
            w,
            h,
            2,
            MoveResizeFlags::STATE_CHANGED,
            Gravity::NorthWest,
        )
        .unwrap();
        assert!(negotiator.queue(&WINDOW).unwrap().iter().all(|c| c.is_resize()));

        surface.commit_buffer(Size::new(w, h));
        let acked = negotiator.acknowledge(&WINDOW, serial, &mut surface).unwrap();
        assert_eq!(acked.geometry.rect(), Rect::new(0, 0, 1080, 1920));
        assert_eq!(surface.device_size, Size::new(2160, 3840));
        assert!(negotiator.is_empty(&WINDOW));
    }

    #[test]
    fn unknown_windows_have_nothing_pending() {
        let negotiator = Negotiator::new_test(64);
        assert!(negotiator.is_empty(&WINDOW));
        assert_eq!(negotiator.pending_len(&WINDOW), 0);
        assert!(!negotiator.is_negotiating(&WINDOW));
    }
}
