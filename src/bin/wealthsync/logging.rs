use std::path::{Path, PathBuf};

use flexi_logger::{
    detailed_format, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};

use crate::config::{ConfigPaths, LoggingConfig};

/// Starts file logging. Retry warnings are also echoed to stderr when
/// `echo_warnings` is set, so a slow backend is visible while waiting.
pub fn init_logging(config: &LoggingConfig, paths: &ConfigPaths) -> anyhow::Result<LoggerHandle> {
    let file = log_file_spec(config.path.as_deref().map(Path::new), &paths.logs_dir);
    let echo = if config.echo_warnings {
        Duplicate::Warn
    } else {
        Duplicate::None
    };
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(file)
        .format_for_files(detailed_format)
        .duplicate_to_stderr(echo)
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    Ok(handle)
}

/// A configured path wins; otherwise `wealthsync.log` in the logs directory.
fn log_file_spec(configured: Option<&Path>, logs_dir: &Path) -> FileSpec {
    let (directory, basename) = match configured {
        Some(path) => (
            path.parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map_or_else(|| logs_dir.to_path_buf(), PathBuf::from),
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("wealthsync")
                .to_string(),
        ),
        None => (logs_dir.to_path_buf(), "wealthsync".to_string()),
    };
    FileSpec::default()
        .directory(directory)
        .basename(basename)
        .suppress_timestamp()
}
