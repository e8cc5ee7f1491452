//! Waiting for orientation changes from async tests.
use crate::{Orientation, Subscription};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{timeout_at, Instant};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaitError {
    #[error("Timed out waiting for orientation {expected} (received {times_signalled} change(s) while waiting, last {last})")]
    Timeout {
        expected: Orientation,
        last: Orientation,
        times_signalled: u32,
    },
    #[error("Orientation manager went away")]
    Closed,
}

/// Waits until `subscription` reports `expected`, starting from `current`.
/// Returns how many changes were received while waiting.
///
/// # Errors
///
/// Fails if `expected` is not reached within `limit`, or if the manager is dropped.
pub async fn wait_for_orientation(
    subscription: &mut Subscription,
    current: Orientation,
    expected: Orientation,
    limit: Duration,
) -> Result<u32, WaitError> {
    tracing::debug!("Waiting for orientation to change from {} to {}", current, expected);
    let deadline = Instant::now() + limit;
    let mut last = current;
    let mut times_signalled = 0;
    while last != expected {
        match timeout_at(deadline, subscription.recv()).await {
            Ok(Some(orientation)) => {
                times_signalled += 1;
                last = orientation;
                tracing::debug!("Orientation changed to {}", orientation);
            }
            Ok(None) => return Err(WaitError::Closed),
            Err(_) => {
                return Err(WaitError::Timeout {
                    expected,
                    last,
                    times_signalled,
                })
            }
        }
    }
    Ok(times_signalled)
}

/// Gives the orientation a chance to change within `limit` without requiring it to.
/// Returns the new orientation, if one was reported.
pub async fn wait_for_possible_orientation_change(
    subscription: &mut Subscription,
    limit: Duration,
) -> Option<Orientation> {
    match timeout_at(Instant::now() + limit, subscription.recv()).await {
        Ok(orientation) => orientation,
        Err(_) => {
            tracing::debug!("Orientation didn't change");
            None
        }
    }
}
