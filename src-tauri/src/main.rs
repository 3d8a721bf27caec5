#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod exit_events;
mod logging;
mod main_window;
mod page_load;
mod runtime_paths;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
