//! Service configuration.
//!
//! Defaults: real-time simulated latency and no
//! cascading deletes. `from_env` reads overrides from `EVENTDESK_*`
//! variables.

use std::sync::Arc;

use thiserror::Error;

use crate::latency::{Latency, LatencyProfile, NoLatency, SimulatedLatency};

pub const ENV_LATENCY: &str = "EVENTDESK_LATENCY";
pub const ENV_LATENCY_SCALE: &str = "EVENTDESK_LATENCY_SCALE";
pub const ENV_EVENT_DELETE: &str = "EVENTDESK_EVENT_DELETE";

/// How the latency simulator behaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatencyMode {
    /// Sleep for the profile duration times `scale`.
    Simulated { scale: f64 },
    /// Return immediately.
    Disabled,
}

impl LatencyMode {
    pub fn build(self) -> Arc<dyn Latency> {
        match self {
            LatencyMode::Simulated { scale } => Arc::new(SimulatedLatency::scaled(scale)),
            LatencyMode::Disabled => Arc::new(NoLatency),
        }
    }
}

/// What happens to an event's RSVPs and guests when the event is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Leave dependent records in place (they become orphans).
    #[default]
    Retain,
    /// Remove dependent RSVPs and guests after the event.
    Cascade,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: expected one of {expected}, got '{value}'")]
    InvalidChoice {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("{var}: expected a non-negative number, got '{value}'")]
    InvalidScale { var: &'static str, value: String },
}

/// Configuration shared by all resource services.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub latency: LatencyMode,
    pub profile: LatencyProfile,
    pub delete_policy: DeletePolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            latency: LatencyMode::Simulated { scale: 1.0 },
            profile: LatencyProfile::default(),
            delete_policy: DeletePolicy::Retain,
        }
    }
}

impl ServiceConfig {
    /// Defaults with latency turned off (tests).
    pub fn instant() -> Self {
        Self::default().with_latency(LatencyMode::Disabled)
    }

    pub fn with_latency(mut self, latency: LatencyMode) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_profile(mut self, profile: LatencyProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; unset variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let scale = match lookup(ENV_LATENCY_SCALE) {
            Some(raw) => parse_scale(&raw)?,
            None => 1.0,
        };

        config.latency = match lookup(ENV_LATENCY).as_deref().map(str::trim) {
            None | Some("simulated") => LatencyMode::Simulated { scale },
            Some("off") => LatencyMode::Disabled,
            Some(other) => {
                return Err(ConfigError::InvalidChoice {
                    var: ENV_LATENCY,
                    expected: "simulated, off",
                    value: other.to_string(),
                });
            }
        };

        config.delete_policy = match lookup(ENV_EVENT_DELETE).as_deref().map(str::trim) {
            None | Some("retain") => DeletePolicy::Retain,
            Some("cascade") => DeletePolicy::Cascade,
            Some(other) => {
                return Err(ConfigError::InvalidChoice {
                    var: ENV_EVENT_DELETE,
                    expected: "retain, cascade",
                    value: other.to_string(),
                });
            }
        };

        Ok(config)
    }
}

fn parse_scale(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidScale {
            var: ENV_LATENCY_SCALE,
            value: raw.to_string(),
        }),
    }
}
