pub(crate) const TARGET_URL: &str = "https://bioshsim.pages.dev/";
pub(crate) const WINDOW_TITLE: &str = "BIOSHsim1.0.0";
pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MIN_WINDOW_WIDTH: f64 = 900.0;
pub(crate) const MIN_WINDOW_HEIGHT: f64 = 600.0;

pub(crate) const APP_DATA_DIR_NAME: &str = ".bioshsim";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
