use chrono::Local;
use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::app_paths::AppPaths;

/// Filter used when `RUST_LOG` is unset, from the number of `-v` flags
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "scriptblox=info,api=info",
        2 => "scriptblox=debug,api=debug",
        _ => "trace",
    }
}

/// Timestamped log file name, e.g. `scriptblox_20240101_120000.log`
pub fn log_file_name() -> String {
    format!("scriptblox_{}.log", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Initialize tracing to stderr, and to a log file when requested.
///
/// Returns the log file path so the caller can tell the user where it is.
pub fn init_tracing(verbosity: u8, log_to_file: bool) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    let (file_layer, log_path) = match log_to_file.then(open_log_file).flatten() {
        Some((file, path)) => {
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_target(true)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(path))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    if let Some(path) = &log_path {
        tracing::info!(target: "system", "Logging to {}", path.display());
    }

    log_path
}

fn open_log_file() -> Option<(File, PathBuf)> {
    // Logging must never stop the CLI, so failures just disable the file
    let dir = AppPaths::log_dir().ok()?;
    let path = dir.join(log_file_name());
    let file = File::create(&path).ok()?;
    Some((file, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert!(default_filter(1).contains("info"));
        assert!(default_filter(2).contains("debug"));
        assert_eq!(default_filter(7), "trace");
    }

    #[test]
    fn test_log_file_name_shape() {
        let name = log_file_name();
        assert!(name.starts_with("scriptblox_"));
        assert!(name.ends_with(".log"));
        // scriptblox_ + YYYYmmdd_HHMMSS + .log
        assert_eq!(name.len(), "scriptblox_".len() + 15 + ".log".len());
    }
}
