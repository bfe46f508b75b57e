//! Environment-driven configuration for session expiry
//!
//! All configuration is read from `CHAT_PAGER_*` environment variables, with
//! defaults matching the design: sessions live 15 minutes, the reaper sweeps
//! every 10 minutes.

use std::env;
use std::env::VarError;
use std::time::Duration;

use crate::errors::{PagerError, PagerResult};

/// Session expiry settings
#[derive(Debug, Clone)]
pub struct PagerConfig {
    /// Session time-to-live in seconds, measured from creation (not last
    /// access: an endlessly-paged session still expires)
    pub session_ttl_secs: u64,
    /// Reaper sweep period in seconds
    pub sweep_interval_secs: u64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: 900,
            sweep_interval_secs: 600,
        }
    }
}

impl PagerConfig {
    /// Load configuration, reading an optional `.env` file first
    ///
    /// # Errors
    ///
    /// Returns `Config` if a variable is set but malformed or out of range.
    pub fn load() -> PagerResult<Self> {
        dotenvy::dotenv().ok();
        Self::load_from_env()
    }

    /// Load configuration from the process environment only
    ///
    /// # Environment Variables
    ///
    /// ```text
    /// CHAT_PAGER_SESSION_TTL_SECS=900
    /// CHAT_PAGER_SWEEP_INTERVAL_SECS=600
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Config` if a variable is set but malformed or out of range.
    pub fn load_from_env() -> PagerResult<Self> {
        let config = Self {
            session_ttl_secs: parse_u64_env("CHAT_PAGER_SESSION_TTL_SECS", 900)?,
            sweep_interval_secs: parse_u64_env("CHAT_PAGER_SWEEP_INTERVAL_SECS", 600)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Session time-to-live
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Reaper sweep period
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Reject zero durations
    fn validate(&self) -> PagerResult<()> {
        if self.session_ttl_secs == 0 {
            return Err(PagerError::Config(
                "CHAT_PAGER_SESSION_TTL_SECS must be at least 1".to_owned(),
            ));
        }
        if self.sweep_interval_secs == 0 {
            return Err(PagerError::Config(
                "CHAT_PAGER_SWEEP_INTERVAL_SECS must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Parse a `u64` environment variable with default fallback
///
/// Returns `default` if unset.
///
/// # Errors
///
/// Returns `Config` if the variable is set but not a valid `u64`.
fn parse_u64_env(key: &str, default: u64) -> PagerResult<u64> {
    match env::var(key) {
        Ok(v) => v.parse::<u64>().map_err(|_| {
            PagerError::Config(format!("invalid u64 environment variable {key}: '{v}'"))
        }),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(_)) => Err(PagerError::Config(format!(
            "environment variable {key} contains non-unicode data"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::PagerConfig;

    #[test]
    fn default_configuration_passes_validation() {
        let config = PagerConfig::default();
        config.validate().expect("defaults must validate");
        assert_eq!(config.session_ttl(), Duration::from_secs(900));
        assert_eq!(config.sweep_interval(), Duration::from_secs(600));
    }

    #[test]
    fn zero_durations_are_rejected() {
        let config = PagerConfig {
            session_ttl_secs: 0,
            ..PagerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PagerConfig {
            sweep_interval_secs: 0,
            ..PagerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
