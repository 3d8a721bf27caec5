use tauri::{Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{app_types::MainWindowSpec, MAIN_WINDOW_LABEL};

/// Builds the single shell window. It starts hidden; `show_main_window`
/// reveals it once construction has succeeded.
pub fn build_main_window<R, M>(
    manager: &M,
    spec: &MainWindowSpec,
) -> Result<WebviewWindow<R>, String>
where
    R: Runtime,
    M: Manager<R>,
{
    if manager.get_webview_window(spec.label).is_some() {
        return Err(format!("Window '{}' already exists.", spec.label));
    }

    WebviewWindowBuilder::new(manager, spec.label, WebviewUrl::External(spec.url.clone()))
        .title(spec.title)
        .inner_size(spec.min_width, spec.min_height)
        .min_inner_size(spec.min_width, spec.min_height)
        .visible(false)
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))
}

pub fn show_main_window<R, M, F>(manager: &M, log: F)
where
    R: Runtime,
    M: Manager<R>,
    F: Fn(&str),
{
    let Some(window) = manager.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("show_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
