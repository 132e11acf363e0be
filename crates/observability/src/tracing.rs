//! Subscriber construction.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Fallback filter directive.
    pub default_filter: String,
    /// Emit JSON lines; plain text otherwise.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            json: true,
        }
    }
}

impl LogConfig {
    pub fn with_default_filter(mut self, directive: impl Into<String>) -> Self {
        self.default_filter = directive.into();
        self
    }

    pub fn plain(mut self) -> Self {
        self.json = false;
        self
    }

    /// `RUST_LOG` if set and valid, the fallback directive otherwise.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Install a global subscriber. Returns `false` if one was already set.
pub fn init(config: LogConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_at_info() {
        let config = LogConfig::default();
        assert!(config.json);
        assert_eq!(config.default_filter, "info");
    }

    #[test]
    fn builder_overrides() {
        let config = LogConfig::default().with_default_filter("eventdesk_infra=debug").plain();
        assert!(!config.json);
        assert_eq!(config.default_filter, "eventdesk_infra=debug");
    }

    #[test]
    fn second_init_is_a_noop() {
        let _ = init(LogConfig::default());
        assert!(!init(LogConfig::default()));
    }
}
