use crate::config::Config;
use crate::models::{Handle, SurfaceWindow, Transition, WindowHandle};
use crate::transmit::ConfigureSink;
use crate::Negotiator;

impl<H, C, SINK> Negotiator<H, C, SINK>
where
    H: Handle,
    C: Config,
    SINK: ConfigureSink<H>,
{
    /// Stops negotiating with a window that is going away.
    ///
    /// Every pending configuration is orphaned and released, and `window` is told about each of
    /// them, before this returns. The window itself can be released afterwards.
    pub fn destroy_window(
        &mut self,
        handle: &WindowHandle<H>,
        window: &mut impl SurfaceWindow,
    ) -> Vec<Transition> {
        let Some(queue) = self.queues.remove(handle) else {
            return vec![];
        };
        let orphaned = queue.orphan();
        for transition in &orphaned {
            window.configuration_orphaned(transition.serial);
        }
        if !orphaned.is_empty() {
            tracing::debug!(
                "{} configurations orphaned by destruction of {:?}",
                orphaned.len(),
                handle
            );
        }
        orphaned
    }
}
