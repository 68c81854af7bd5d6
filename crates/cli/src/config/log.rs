use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_emit_journald")]
    pub emit_journald: bool,

    #[serde(default = "LogConfig::default_emit_stdout")]
    pub emit_stdout: bool,

    #[serde(default = "LogConfig::default_emit_stderr")]
    pub emit_stderr: bool,

    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "LogConfig::default_log_level")]
    pub level: tracing::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            emit_journald: Self::default_emit_journald(),
            emit_stdout: Self::default_emit_stdout(),
            emit_stderr: Self::default_emit_stderr(),
            level: Self::default_log_level(),
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub const fn default_emit_journald() -> bool { true }

    // stdout is owned by the terminal page
    #[inline]
    #[must_use]
    pub const fn default_emit_stdout() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_emit_stderr() -> bool { false }

    #[inline]
    #[must_use]
    pub const fn default_log_level() -> tracing::Level { tracing::Level::INFO }

    /// Installs the global `tracing` subscriber, returning `false` when one is already set.
    pub fn registry(&self) -> bool {
        let Self { emit_journald, emit_stdout, emit_stderr, level } = *self;

        // reported once a subscriber is in place, journald is absent on many hosts
        let (journald_layer, journald_error) = match journald_layer(emit_journald) {
            Ok(layer) => (layer, None),
            Err(err) => (None, Some(err)),
        };

        let stdout_layer =
            emit_stdout.then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stdout));
        let stderr_layer =
            emit_stderr.then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

        let installed = tracing_subscriber::registry()
            .with(LevelFilter::from_level(level))
            .with(journald_layer)
            .with(stdout_layer)
            .with(stderr_layer)
            .try_init()
            .is_ok();

        if let Some(err) = journald_error {
            tracing::debug!("Could not connect to journald, error: {err}");
        }

        installed
    }
}

fn journald_layer(enabled: bool) -> std::io::Result<Option<tracing_journald::Layer>> {
    if enabled {
        tracing_journald::layer().map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LogConfig;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert!(config.emit_journald);
        assert!(!config.emit_stdout);
        assert!(!config.emit_stderr);
        assert_eq!(config.level, tracing::Level::INFO);
    }

    #[test]
    fn test_parse_level() {
        let config: LogConfig = toml::from_str("level = \"DEBUG\"\nemit_stderr = true").unwrap();
        assert_eq!(config.level, tracing::Level::DEBUG);
        assert!(config.emit_stderr);
        assert!(config.emit_journald);
    }

    #[test]
    fn test_registry_with_default_sinks() {
        // journald may be missing here, installing still succeeds
        let config = LogConfig::default();
        assert!(config.registry());
        assert!(tracing::dispatcher::has_been_set());
        assert!(!config.registry());
    }

    #[test]
    fn test_disabled_journald_is_not_touched() {
        assert!(matches!(super::journald_layer(false), Ok(None)));
    }
}
