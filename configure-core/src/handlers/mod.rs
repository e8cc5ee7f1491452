mod ack_handler;
mod configure_handler;
mod destroy_handler;

pub use ack_handler::Acknowledged;
