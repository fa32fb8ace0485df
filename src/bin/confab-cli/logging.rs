use std::path::{Path, PathBuf};

use flexi_logger::{
    detailed_format, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};

use crate::config::{ConfigPaths, LoggingConfig};

const LOG_BASENAME: &str = "confab";

/// Logs go to a rotating file; stdout belongs to the conversation. Errors
/// are also copied to stderr so a failing session is not silent.
pub fn init_logging(config: &LoggingConfig, paths: &ConfigPaths) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(log_file_spec(config.path.as_deref(), &paths.logs_dir))
        .format_for_files(detailed_format)
        .duplicate_to_stderr(Duplicate::Error)
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    Ok(handle)
}

/// `[logging] path` names the file; its directory and stem are split out
/// for flexi_logger, which appends its own suffix.
fn log_file_spec(configured: Option<&str>, logs_dir: &Path) -> FileSpec {
    let (directory, basename) = split_log_path(configured, logs_dir);
    FileSpec::default().directory(directory).basename(basename)
}

fn split_log_path(configured: Option<&str>, logs_dir: &Path) -> (PathBuf, String) {
    let Some(path) = configured.map(Path::new) else {
        return (logs_dir.to_path_buf(), LOG_BASENAME.to_string());
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => logs_dir.to_path_buf(),
    };
    let basename = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(LOG_BASENAME)
        .to_string();
    (directory, basename)
}
