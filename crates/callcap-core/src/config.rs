//! Configuration for the data-capture metrics engine

use serde::{Deserialize, Serialize};

/// How a field that was never captured counts in the per-call
/// "any field invalid" check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Only captured-but-malformed values are invalid; absence is handled
    /// by the completeness check alone
    #[default]
    Exclude,
    /// An absent field is also invalid
    CountAsInvalid,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Batches this small (or smaller) always get demo numbers
    pub tiny_sample_max_calls: usize,

    /// Calls shorter than this many seconds are short
    pub short_call_seconds: f64,

    /// Without a duration, calls with fewer turns than this are short
    pub short_call_min_turns: usize,

    /// Treatment of absent fields when deciding abandonment/recontact
    pub missing_field_policy: MissingFieldPolicy,

    /// Prefix of the per-day fallback seed string
    pub fallback_seed_prefix: String,

    /// Substitute demo numbers for tiny or saturated batches
    pub demo_fallback: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            tiny_sample_max_calls: 10,
            short_call_seconds: 30.0,
            short_call_min_turns: 6,
            missing_field_policy: MissingFieldPolicy::Exclude,
            fallback_seed_prefix: "data-capture".to_string(),
            demo_fallback: true,
        }
    }

    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.short_call_seconds.is_finite() || self.short_call_seconds < 0.0 {
            return Err(ConfigError::Invalid {
                field: "short_call_seconds",
                reason: format!("expected a non-negative number, got {}", self.short_call_seconds),
            });
        }
        if self.fallback_seed_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "fallback_seed_prefix",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
