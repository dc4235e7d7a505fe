use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming the log file base path. Overrides `[logging] file`.
pub const LOG_ENV: &str = "BREATHWORK_LOG";

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Log file base path, from the environment first, then the config.
pub fn log_file(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}

/// `{path}.{timestamp}.{pid}`, so concurrent instances never share a file.
pub fn unique_log_path(base: &std::path::Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base.display(), timestamp, pid))
}

/// Initialize tracing for the terminal UI.
///
/// The terminal belongs to the UI, so logs only go to a file. Without a
/// configured file, logging stays off.
pub fn init_file_logging(config: &LoggingConfig) {
    let Some(base) = log_file(config) else {
        return;
    };
    let path = unique_log_path(&base);

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(file_layer)
        .init();
}

/// Initialize tracing to stderr for headless runs.
pub fn init_stderr_logging(config: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path(std::path::Path::new("/tmp/breathwork.log"));
        let name = path.to_string_lossy().into_owned();
        assert!(name.starts_with("/tmp/breathwork.log."));
        assert!(name.ends_with(&format!(".{}", std::process::id())));
    }

    #[test]
    fn config_file_used_without_env() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/bw.log")),
        };
        assert_eq!(log_file(&config), Some(PathBuf::from("/tmp/bw.log")));
        assert_eq!(log_file(&LoggingConfig::default()), None);
    }
}
