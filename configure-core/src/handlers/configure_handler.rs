use crate::config::Config;
use crate::models::{
    Configuration, ConfigureTarget, Gravity, Handle, MoveResizeFlags, Rect, Size, WindowHandle,
};
use crate::queue::ConfigurationQueue;
use crate::transmit::ConfigureSink;
use crate::{Negotiator, Serial};

/// A window seen together with what is still queued for it, so size lookups see proposals the
/// client has not acked yet.
struct PendingTarget<'a, T> {
    window: &'a T,
    queue: Option<&'a ConfigurationQueue>,
}

impl<T: ConfigureTarget> ConfigureTarget for PendingTarget<'_, T> {
    fn current_rect(&self) -> Rect {
        self.window.current_rect()
    }

    fn last_requested_size(&self) -> Option<Size> {
        self.queue
            .and_then(ConfigurationQueue::last_requested_size)
            .or_else(|| self.window.last_requested_size())
    }
}

impl<H, C, SINK> Negotiator<H, C, SINK>
where
    H: Handle,
    C: Config,
    SINK: ConfigureSink<H>,
{
    /// Starts tracking `handle`. Returns false if it already was.
    pub fn register_window(&mut self, handle: WindowHandle<H>) -> bool {
        if self.queues.contains_key(&handle) {
            return false;
        }
        let threshold = self.config.queue_warn_threshold();
        self.queues.insert(handle, ConfigurationQueue::new(threshold));
        true
    }

    /// Proposes a move and/or resize of `window` and sends it.
    ///
    /// Returns `None` without drawing a serial when `handle` is not registered.
    #[allow(clippy::too_many_arguments)]
    pub fn propose_move_resize(
        &mut self,
        handle: WindowHandle<H>,
        window: &impl ConfigureTarget,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        scale: i32,
        flags: MoveResizeFlags,
        gravity: Gravity,
    ) -> Option<Serial> {
        let target = PendingTarget {
            window,
            queue: Some(self.registered_queue(&handle)?),
        };
        let config =
            Configuration::for_move_resize(&target, x, y, width, height, scale, flags, gravity);
        self.submit(handle, config)
    }

    /// Proposes a size and a position relative to the window's anchor and sends it.
    pub fn propose_relative(
        &mut self,
        handle: WindowHandle<H>,
        rel_x: i32,
        rel_y: i32,
        width: i32,
        height: i32,
        scale: i32,
    ) -> Option<Serial> {
        self.registered_queue(&handle)?;
        let config = Configuration::for_relative(rel_x, rel_y, width, height, scale);
        self.submit(handle, config)
    }

    /// Sends a configure without geometry, e.g. after a state-only change.
    pub fn propose_empty(&mut self, handle: WindowHandle<H>) -> Option<Serial> {
        self.registered_queue(&handle)?;
        self.submit(handle, Configuration::for_empty())
    }

    fn registered_queue(&self, handle: &WindowHandle<H>) -> Option<&ConfigurationQueue> {
        let queue = self.queues.get(handle);
        if queue.is_none() {
            tracing::warn!("Not configuring unregistered window {:?}", handle);
        }
        queue
    }

    /// Queues `config` for `handle` and offers it to the sink.
    pub(crate) fn submit(
        &mut self,
        handle: WindowHandle<H>,
        config: Configuration,
    ) -> Option<Serial> {
        let queue = self.queues.get_mut(&handle)?;
        let pending = queue.len() + 1;
        let config = queue.enqueue(config)?;
        tracing::debug!(
            "Configure {} queued for {:?} ({} pending)",
            config.serial(),
            handle,
            pending
        );
        tracing::trace!("Sending configure {:?}", config);
        self.sink.send_configure(&handle, config);
        Some(config.serial())
    }
}
