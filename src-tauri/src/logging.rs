use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

pub const LOG_CATEGORY_DESKTOP: &str = "desktop";
pub const LOG_CATEGORY_STARTUP: &str = "startup";
pub const LOG_CATEGORY_SHUTDOWN: &str = "shutdown";

/// Log files live under `<root>/logs`. Without a known root (no home
/// directory) the system temp directory is used instead.
///
/// The log is diagnostic only. Nothing the shell displays, including the
/// target address, is ever read back from it or from the environment.
pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(env::temp_dir)
        .join("logs")
        .join(file_name)
}

pub fn format_log_line(timestamp: &str, category: &str, message: &str) -> String {
    format!("[{timestamp}] [{category}] {message}\n")
}

pub fn append_log_line(log_path: &Path, category: &str, message: &str) -> Result<(), String> {
    if let Some(parent_dir) = log_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log {}: {}", log_path.display(), error))?;
    let line = format_log_line(&Local::now().to_rfc3339(), category, message);
    file.write_all(line.as_bytes())
        .map_err(|error| format!("Failed to write log {}: {}", log_path.display(), error))
}
