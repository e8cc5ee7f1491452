use super::ConfigureSink;
use crate::models::{Configuration, Handle, WindowHandle};
use crate::Serial;

/// Records what would have gone out on the wire.
#[derive(Debug, Default)]
pub struct MockSink<H: Handle> {
    pub sent: Vec<(WindowHandle<H>, Serial)>,
}

impl<H: Handle> ConfigureSink<H> for MockSink<H> {
    fn send_configure(&mut self, handle: &WindowHandle<H>, config: &Configuration) {
        self.sent.push((*handle, config.serial()));
    }
}

impl<H: Handle> MockSink<H> {
    pub fn serials_for(&self, handle: &WindowHandle<H>) -> Vec<Serial> {
        self.sent
            .iter()
            .filter(|(h, _)| h == handle)
            .map(|(_, serial)| *serial)
            .collect()
    }
}
