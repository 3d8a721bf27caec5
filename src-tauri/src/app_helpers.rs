use crate::{logging, runtime_paths, DESKTOP_LOG_FILE};

fn append_log(category: &str, message: &str) {
    let log_path = logging::resolve_desktop_log_path(
        runtime_paths::default_app_data_dir(),
        DESKTOP_LOG_FILE,
    );
    if let Err(error) = logging::append_log_line(&log_path, category, message) {
        eprintln!("failed to write desktop log: {error}");
    }
}

pub fn append_desktop_log(message: &str) {
    append_log(logging::LOG_CATEGORY_DESKTOP, message);
}

pub fn append_startup_log(message: &str) {
    append_log(logging::LOG_CATEGORY_STARTUP, message);
}

pub fn append_shutdown_log(message: &str) {
    append_log(logging::LOG_CATEGORY_SHUTDOWN, message);
}
