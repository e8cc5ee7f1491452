use crate::Serial;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NegotiationError>;

#[derive(Debug, Error)]
pub enum NegotiationError {
    #[error("Protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),
    #[error("Config parsing error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
}

/// A client acknowledged something it should not have. The negotiation state is left as it was,
/// apart from the defensive trim described on [`ProtocolViolation::UnmatchedSerial`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolViolation {
    #[error("serial {serial} acknowledged for a window that is not negotiating")]
    UnknownWindow { serial: Serial },
    #[error("serial {serial} acknowledged but the last issued serial is {last_issued}")]
    UnissuedSerial { serial: Serial, last_issued: Serial },
    /// Older than everything pending, which includes repeated acks of resolved serials.
    ///
    /// A window with nothing pending reports every issued serial this way, including serials
    /// that were sent to other windows. Only a non-empty queue can tell those apart.
    #[error("serial {serial} acknowledged but is older than every pending configuration")]
    StaleSerial { serial: Serial },
    /// Newer than everything pending for this window, so it was issued to another one.
    #[error("serial {serial} acknowledged but was never sent to this window")]
    ForeignSerial { serial: Serial },
    /// Falls in a gap of the pending range. The older entries were dropped anyway.
    #[error("serial {serial} acknowledged but matches no pending configuration ({discarded} older ones dropped)")]
    UnmatchedSerial { serial: Serial, discarded: usize },
}

impl ProtocolViolation {
    #[must_use]
    pub const fn serial(&self) -> Serial {
        match self {
            Self::UnknownWindow { serial }
            | Self::UnissuedSerial { serial, .. }
            | Self::StaleSerial { serial }
            | Self::ForeignSerial { serial }
            | Self::UnmatchedSerial { serial, .. } => *serial,
        }
    }
}

/// What the caller should do about a violation. The negotiation core never acts on it itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    Ignore,
    Log,
    Disconnect,
}
