use crate::errors::{Escalation, ProtocolViolation};
use serde::{Deserialize, Serialize};

/// How a misbehaving client is dealt with.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViolationPolicy {
    Ignore,
    #[default]
    Warn,
    /// Acks for serials that were never issued get the client disconnected; the rest is logged.
    Disconnect,
}

impl ViolationPolicy {
    #[must_use]
    pub const fn escalate(self, violation: &ProtocolViolation) -> Escalation {
        match (self, violation) {
            (Self::Ignore, _) => Escalation::Ignore,
            (
                Self::Disconnect,
                ProtocolViolation::UnissuedSerial { .. } | ProtocolViolation::ForeignSerial { .. },
            ) => Escalation::Disconnect,
            _ => Escalation::Log,
        }
    }
}
