//! tracing subscriber setup
//!
//! Library code only emits events; binaries and tests embedding buildmatch
//! pick an output here. `RUST_LOG` directives are honored on top of the
//! configured `buildmatch` level.
//!
//! ```no_run
//! buildmatch::util::logging::init_from_env();
//! tracing::info!("Matching images");
//! ```

use crate::config::InitConfig;
use std::str::FromStr;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Output settings for [`init_logging`]
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to `buildmatch` targets
    pub level: Level,
    /// One JSON object per line instead of the console format
    pub use_json: bool,
    /// Show the emitting module, e.g. `buildmatch::diagnostics::logging`
    pub include_target: bool,
    /// Show file and line
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// ```
    /// use buildmatch::util::LoggingConfig;
    /// use tracing::Level;
    ///
    /// assert_eq!(LoggingConfig::with_level(Level::DEBUG).level, Level::DEBUG);
    /// ```
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Level named by `value`, ignoring case; `None` for anything else
///
/// ```
/// use buildmatch::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("Debug"), Some(Level::DEBUG));
/// assert_eq!(parse_level("verbose"), None);
/// ```
pub fn parse_level(value: &str) -> Option<Level> {
    if value.chars().all(|c| c.is_ascii_alphabetic()) {
        Level::from_str(value).ok()
    } else {
        None
    }
}

fn build_filter(level: Level) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("buildmatch={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs the global subscriber; only the first call in a process has effect
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let json = config.use_json.then(|| {
            fmt::layer()
                .json()
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_writer(std::io::stderr)
        });
        let console = (!config.use_json).then(|| {
            fmt::layer()
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(build_filter(config.level))
            .with(json)
            .with(console)
            .init();
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from the `BUILDMATCH_*` settings read by [`InitConfig`]
pub fn init_from_env() {
    init_logging(InitConfig::default().logging());
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        trace = { "trace", Some(Level::TRACE) },
        debug_upper = { "DEBUG", Some(Level::DEBUG) },
        info = { "info", Some(Level::INFO) },
        warn_mixed = { "Warn", Some(Level::WARN) },
        error = { "error", Some(Level::ERROR) },
        unknown = { "verbose", None },
        numeric = { "3", None },
        empty = { "", None },
    )]
    fn test_parse_level(value: &str, expected: Option<Level>) {
        assert_eq!(parse_level(value), expected);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(LoggingConfig::with_level(Level::WARN));
        init_default();
    }
}
