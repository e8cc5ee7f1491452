//! Device orientation notifications for compositor test harnesses.
//!
//! An [`OrientationManager`] tracks what the accelerometer reports and tells its subscribers
//! when the orientation actually changes. Each subscriber owns the receiving end of its own
//! channel; dropping the [`Subscription`] cancels it.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
mod harness;
mod manager;
mod orientation;

pub use harness::{wait_for_orientation, wait_for_possible_orientation_change, WaitError};
pub use manager::{OrientationManager, Subscription};
pub use orientation::Orientation;
