//! Configure/ack negotiation of window geometry.
//!
//! The compositor proposes geometry changes as serialized [`Configuration`]s, queues them per
//! window and hands them to a [`ConfigureSink`] for transmission. When the client acknowledges a
//! serial, the [`Negotiator`] matches it against the window's queue and resolves the geometry the
//! window ends up with.
#![warn(clippy::pedantic)]
// These are globally allowed because they otherwise make a lot of noise.
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
pub mod config;
pub mod errors;
mod handlers;
pub mod models;
mod negotiator;
pub mod queue;
pub mod resolver;
pub mod serial;
pub mod transmit;
pub mod utils;

pub use config::{Config, NegotiationConfig, ViolationPolicy};
pub use errors::{Escalation, NegotiationError, ProtocolViolation};
pub use handlers::Acknowledged;
pub use models::{Configuration, Gravity, MoveResizeFlags, Rect, ResolvedGeometry, Size};
pub use negotiator::Negotiator;
pub use queue::ConfigurationQueue;
pub use serial::Serial;
pub use transmit::ConfigureSink;
