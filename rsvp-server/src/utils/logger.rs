//! Logging Infrastructure
//!
//! Console output always; daily rotating files when a log directory is set.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Fallback filter when `RUST_LOG` is unset (e.g. "info", "rsvp_server=debug")
/// * `json_format` - JSON lines instead of the human-readable format
/// * `log_dir` - Optional directory for `rsvp.YYYY-MM-DD` files
///
/// # Examples
/// ```no_run
/// use rsvp_server::utils::logger::init_logger_with_file;
///
/// // Development (console only)
/// init_logger_with_file("debug", false, None).unwrap();
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "rsvp");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::sync::Mutex::new(appender))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
