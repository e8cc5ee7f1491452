//! Hand-off of configurations to whatever encodes them for the wire.
use crate::models::{Configuration, Handle, WindowHandle};
#[cfg(test)]
mod mock_sink;

#[cfg(test)]
pub use self::mock_sink::MockSink;

/// Receives every configuration exactly once, right after it was queued, so in serial order.
pub trait ConfigureSink<H: Handle> {
    fn send_configure(&mut self, handle: &WindowHandle<H>, config: &Configuration);
}

/// Plain closures can be used as sinks.
impl<H, F> ConfigureSink<H> for F
where
    H: Handle,
    F: FnMut(&WindowHandle<H>, &Configuration),
{
    fn send_configure(&mut self, handle: &WindowHandle<H>, config: &Configuration) {
        self(handle, config);
    }
}
