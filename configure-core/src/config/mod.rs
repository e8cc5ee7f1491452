mod violation_policy;

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use xdg::BaseDirectories;

pub use violation_policy::ViolationPolicy;

const CONFIG_PREFIX: &str = "configure";
const CONFIG_FILE: &str = "config.toml";

pub trait Config {
    /// Queue depth past which a window is reported as not keeping up with its configures.
    fn queue_warn_threshold(&self) -> usize;

    fn violation_policy(&self) -> ViolationPolicy;

    /// An `EnvFilter` directive, see [`crate::utils::log::parse_log_level`].
    fn log_level(&self) -> &str;
}

/// Negotiation settings, read from `$XDG_CONFIG_HOME/configure/config.toml`.
///
/// ```toml
/// queue_warn_threshold = 64
/// violation_policy = "Warn"
/// log_level = "info"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NegotiationConfig {
    pub queue_warn_threshold: usize,
    pub violation_policy: ViolationPolicy,
    pub log_level: String,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            queue_warn_threshold: 64,
            violation_policy: ViolationPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl NegotiationConfig {
    /// # Errors
    ///
    /// Returns an error if `content` is not valid toml or has fields of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads the user's config file, falling back to defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the XDG base directories cannot be determined, or if a config file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let dirs = BaseDirectories::with_prefix(CONFIG_PREFIX)?;
        match dirs.find_config_file(CONFIG_FILE) {
            Some(path) => {
                tracing::debug!("Loading negotiation config from {:?}", path);
                Self::load_from_file(path)
            }
            None => {
                tracing::debug!("No negotiation config found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

impl Config for NegotiationConfig {
    fn queue_warn_threshold(&self) -> usize {
        self.queue_warn_threshold
    }

    fn violation_policy(&self) -> ViolationPolicy {
        self.violation_policy
    }

    fn log_level(&self) -> &str {
        &self.log_level
    }
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub queue_warn_threshold: usize,
}

#[cfg(test)]
impl Config for TestConfig {
    fn queue_warn_threshold(&self) -> usize {
        self.queue_warn_threshold
    }

    fn violation_policy(&self) -> ViolationPolicy {
        ViolationPolicy::Warn
    }

    fn log_level(&self) -> &str {
        "trace"
    }
}
