use serde::{Deserialize, Serialize};

/// Where a configuration is in its life. Everything but `Pending` is terminal.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationState {
    /// Queued, waiting for the client to catch up.
    #[default]
    Pending,
    /// Matched exactly by an ack and applied.
    Won,
    /// Dropped unapplied because a newer serial was acked first.
    Superseded,
    /// Dropped because its window was destroyed while it was pending.
    Orphaned,
}

impl ConfigurationState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A configuration leaving the queue, and the state it left in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub serial: crate::Serial,
    pub state: ConfigurationState,
}

impl Transition {
    pub(crate) const fn new(serial: crate::Serial, state: ConfigurationState) -> Self {
        Self { serial, state }
    }
}
