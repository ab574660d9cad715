use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "framekit_engine=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter string.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

/// Environment variable consulted before `RUST_LOG`.
pub const FRAMEKIT_LOG_ENV: &str = "FRAMEKIT_LOG";

/// Used when no filter is configured anywhere.
pub const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Picks the filter string: explicit config, then `FRAMEKIT_LOG`, then
/// `RUST_LOG`, then [`DEFAULT_FILTER`]. Blank values are skipped.
pub(crate) fn resolve_filter(
    explicit: Option<String>,
    framekit_env: Option<String>,
    rust_env: Option<String>,
) -> String {
    [explicit, framekit_env, rust_env]
        .into_iter()
        .flatten()
        .find(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = resolve_filter(
            config.env_filter,
            std::env::var(FRAMEKIT_LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        );
        builder.parse_filters(&filter);

        builder.write_style(config.write_style);

        // Frames are printed to stdout; logs go to stderr so they never tear a frame.
        builder.target(env_logger::Target::Stderr);

        if builder.try_init().is_err() {
            // Another logger was installed first (e.g. by a test harness).
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let f = resolve_filter(Some("debug".into()), Some("warn".into()), Some("trace".into()));
        assert_eq!(f, "debug");
    }

    #[test]
    fn framekit_env_beats_rust_log() {
        let f = resolve_filter(None, Some("framekit_engine=trace".into()), Some("error".into()));
        assert_eq!(f, "framekit_engine=trace");
    }

    #[test]
    fn blank_values_fall_through() {
        assert_eq!(resolve_filter(Some("  ".into()), None, Some("warn".into())), "warn");
        assert_eq!(resolve_filter(None, Some(String::new()), None), DEFAULT_FILTER);
    }
}
