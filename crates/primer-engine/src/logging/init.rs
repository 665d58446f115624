use std::sync::Once;

use env_logger::{Target, TimestampPrecision, WriteStyle};

/// Filter used when neither the config nor `RUST_LOG` names one. The OpenGL
/// version line and shutdown notice are at info.
pub const DEFAULT_FILTER: &str = "info";

/// Logger configuration for the chapter programs.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"primer_engine=debug"`. Takes
    /// precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
    /// FPS samples arrive every 250 ms; millisecond stamps keep them apart.
    pub timestamps: Option<TimestampPrecision>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
            timestamps: Some(TimestampPrecision::Millis),
        }
    }
}

impl LoggingConfig {
    /// Debug output for the engine, info for everything else.
    pub fn verbose() -> Self {
        Self {
            env_filter: Some("info,primer_engine=debug".to_string()),
            ..Self::default()
        }
    }
}

/// Picks the filter: explicit config, then the environment, then [`DEFAULT_FILTER`].
fn resolve_filter(explicit: Option<String>, env: Option<String>) -> String {
    explicit
        .or(env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

static INIT: Once = Once::new();

/// Installs the stderr logger once; later calls are ignored.
///
/// Call it first thing in `main` so window and context failures reach the
/// diagnostic stream.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp(config.timestamps)
            .target(Target::Stderr)
            .init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}
