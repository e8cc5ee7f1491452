//! Per-window FIFO of configurations waiting for the client's ack.
use crate::errors::ProtocolViolation;
use crate::models::{Configuration, ConfigurationState, Size, Transition};
use crate::serial::{self, Serial};
use std::collections::VecDeque;

/// The configuration an ack picked, together with the ones it overtook.
#[derive(Debug)]
pub struct Resolution {
    pub won: Configuration,
    /// Serials dropped without being applied, oldest first.
    pub superseded: Vec<Serial>,
}

impl Resolution {
    /// Every configuration that left the queue, in serial order.
    pub fn transitions(&self) -> Vec<Transition> {
        self.superseded
            .iter()
            .map(|serial| Transition::new(*serial, ConfigurationState::Superseded))
            .chain(std::iter::once(Transition::new(
                self.won.serial(),
                ConfigurationState::Won,
            )))
            .collect()
    }
}

/// Pending configurations of one window, oldest first.
///
/// Serials come from a process-wide counter, so appending keeps the queue sorted. Nothing is
/// ever dropped early: a client that stops acking makes the queue grow, which is reported once
/// per crossing of the warn threshold.
#[derive(Debug, Default)]
pub struct ConfigurationQueue {
    pending: VecDeque<Configuration>,
    last_won: Option<Serial>,
    warn_threshold: usize,
    over_threshold: bool,
}

impl ConfigurationQueue {
    #[must_use]
    pub fn new(warn_threshold: usize) -> Self {
        Self {
            warn_threshold,
            ..Self::default()
        }
    }

    /// Appends `config` and returns it for transmission.
    ///
    /// A configuration older than the tail is refused and dropped, keeping the queue sorted.
    pub(crate) fn enqueue(&mut self, config: Configuration) -> Option<&Configuration> {
        if let Some(tail) = self.tail() {
            if config.serial() <= tail {
                tracing::warn!(
                    "Refusing configuration {} queued behind {}",
                    config.serial(),
                    tail
                );
                return None;
            }
        }
        self.pending.push_back(config);

        if self.warn_threshold > 0 && self.pending.len() >= self.warn_threshold {
            if !self.over_threshold {
                self.over_threshold = true;
                tracing::warn!(
                    "{} configurations waiting for an ack; client is not keeping up",
                    self.pending.len()
                );
            }
        } else {
            self.over_threshold = false;
        }

        self.pending.back()
    }

    /// Matches an acked serial against the queue.
    ///
    /// Entries older than `serial` are superseded, the entry with exactly `serial` wins, newer
    /// entries stay. Serials that cannot be matched are reported without touching the queue,
    /// except for a serial inside the pending range that hits a gap: the older entries are
    /// dropped anyway, since the client has demonstrably moved past them.
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolViolation`] when `serial` does not name a pending configuration.
    pub fn acknowledge(&mut self, serial: Serial) -> Result<Resolution, ProtocolViolation> {
        let last_issued = serial::last_issued();
        if serial > last_issued {
            return Err(ProtocolViolation::UnissuedSerial {
                serial,
                last_issued,
            });
        }

        // With nothing pending there is no range to tell a serial of another window from an
        // already resolved one, so both are stale here.
        let (Some(head), Some(tail)) = (self.head(), self.tail()) else {
            return Err(ProtocolViolation::StaleSerial { serial });
        };
        if serial < head {
            return Err(ProtocolViolation::StaleSerial { serial });
        }
        if serial > tail {
            return Err(ProtocolViolation::ForeignSerial { serial });
        }

        let mut superseded = Vec::new();
        while let Some(front) = self.pending.front() {
            if front.serial() >= serial {
                break;
            }
            if let Some(config) = self.pending.pop_front() {
                superseded.push(config.serial());
            }
        }
        if !superseded.is_empty() {
            tracing::debug!("Configurations {:?} superseded by ack of {}", superseded, serial);
        }

        let matched = self
            .pending
            .front()
            .is_some_and(|front| front.serial() == serial);
        let won = match self.pending.pop_front() {
            Some(config) if matched => config,
            Some(config) => {
                self.pending.push_front(config);
                return Err(ProtocolViolation::UnmatchedSerial {
                    serial,
                    discarded: superseded.len(),
                });
            }
            None => {
                return Err(ProtocolViolation::UnmatchedSerial {
                    serial,
                    discarded: superseded.len(),
                })
            }
        };

        debug_assert!(
            self.last_won.map_or(true, |last| last < won.serial()),
            "configuration {} applied after {:?}",
            won.serial(),
            self.last_won
        );
        self.last_won = Some(won.serial());
        if self.pending.len() < self.warn_threshold {
            self.over_threshold = false;
        }

        Ok(Resolution { won, superseded })
    }

    /// Releases every pending configuration because the window is going away.
    pub fn orphan(self) -> Vec<Transition> {
        self.pending
            .into_iter()
            .map(|config| Transition::new(config.serial(), ConfigurationState::Orphaned))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn head(&self) -> Option<Serial> {
        self.pending.front().map(Configuration::serial)
    }

    #[must_use]
    pub fn tail(&self) -> Option<Serial> {
        self.pending.back().map(Configuration::serial)
    }

    /// Serial of the last configuration that won, if any.
    #[must_use]
    pub fn last_won(&self) -> Option<Serial> {
        self.last_won
    }

    /// The newest size still waiting for an ack.
    #[must_use]
    pub fn last_requested_size(&self) -> Option<Size> {
        self.pending.iter().rev().find_map(Configuration::size)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.pending.iter()
    }
}
