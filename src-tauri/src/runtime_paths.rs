use std::path::PathBuf;

use crate::APP_DATA_DIR_NAME;

/// Only used to place the diagnostic log file.
pub fn default_app_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(APP_DATA_DIR_NAME))
}
