//! This module provides observability and diagnostics for the comparison core.
//!
//! Two tools live here:
//! - `log_metric!`, a structured key-value event emitted through the `log`
//!   facade at `debug` level. The `#[cfg(debug_assertions)]` attribute compiles
//!   it out of release builds entirely.
//! - `init_logging`, which installs an `env_logger` backend exactly once.
//!
//! Comparison kernels never log; only the capability probe, strategy
//! resolution and the self-test do.

use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Once;

use crate::error::GuidOrderError;

/// Logs a structured key-value metric string at `debug` level, only in debug builds.
///
/// # Example
/// ```
/// use guidorder::log_metric;
/// let strategy = "tail_word";
/// log_metric!("event"="strategy_resolved", "strategy"=strategy);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::__log::debug!("GUIDORDER_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs the `env_logger` backend with a compact `[LEVEL] message` format.
///
/// Only the first call has any effect; later calls return `Ok(())` without
/// touching their `log_file`. When `log_file` is given, output is appended to
/// that file instead of stderr.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), GuidOrderError> {
    if INIT_LOGGER.is_completed() {
        return Ok(());
    }

    let target = log_file.map(open_log_target).transpose()?;

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });

    Ok(())
}

fn open_log_target(path: &Path) -> Result<File, GuidOrderError> {
    Ok(OpenOptions::new().append(true).create(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        assert!(init_logging(LevelFilter::Debug, None).is_ok());
        assert!(init_logging(LevelFilter::Info, None).is_ok());
        log_metric!("event" = "test", "value" = 1);
    }

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let result = open_log_target(Path::new("/nonexistent-dir/guidorder/log.txt"));
        assert!(matches!(result, Err(GuidOrderError::Io(_))));
    }

    #[test]
    fn test_later_calls_leave_their_log_file_alone() {
        init_logging(LevelFilter::Info, None).unwrap();

        let path = std::env::temp_dir().join(format!(
            "guidorder-unused-log-{}.txt",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        assert!(init_logging(LevelFilter::Debug, Some(&path)).is_ok());
        assert!(!path.exists());
    }
}
