use std::process;

use tauri::{RunEvent, Runtime, WindowEvent};

use crate::{
    app_types::MainWindowSpec, append_desktop_log, append_shutdown_log, append_startup_log,
    exit_events, logging, main_window, page_load, runtime_paths, DESKTOP_LOG_FILE,
    MAIN_WINDOW_LABEL,
};

pub(crate) fn configure_builder<R, F>(builder: tauri::Builder<R>, log: F) -> tauri::Builder<R>
where
    R: Runtime,
    F: Fn(&str) + Clone + Send + Sync + 'static,
{
    let window_log = log.clone();
    let page_log = log.clone();
    let setup_log = log;

    builder
        .on_window_event(move |window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            match event {
                WindowEvent::CloseRequested { .. } => {
                    window_log("main window close requested");
                }
                WindowEvent::Destroyed => {
                    window_log("main window destroyed");
                }
                _ => {}
            }
        })
        .on_page_load(move |_webview, payload| {
            page_log(&page_load::describe_page_load(payload.event(), payload.url()));
        })
        .setup(move |app| {
            let app_handle = app.handle();
            let spec = MainWindowSpec::from_constants()?;
            main_window::build_main_window(app_handle, &spec)?;
            main_window::show_main_window(app_handle, &setup_log);
            setup_log(&format!("main window '{}' created for {}", spec.title, spec.url));
            Ok(())
        })
}

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(runtime_paths::default_app_data_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    let app = match configure_builder(tauri::Builder::default(), append_desktop_log)
        .build(tauri::generate_context!())
    {
        Ok(app) => app,
        Err(error) => {
            append_startup_log(&format!("failed to initialize desktop runtime: {error}"));
            eprintln!("BIOSHsim startup failed: {error}");
            process::exit(1);
        }
    };

    app.run(|_app_handle, event| match event {
        RunEvent::ExitRequested { code, .. } => {
            exit_events::handle_exit_requested(code, append_shutdown_log);
        }
        RunEvent::Exit => {
            exit_events::handle_exit_event(append_shutdown_log);
        }
        _ => {}
    });
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tauri::{
        test::{mock_builder, mock_context, noop_assets, MockRuntime},
        App, Manager,
    };

    use super::*;
    use crate::{TARGET_URL, WINDOW_TITLE};

    fn build_mock_app() -> (App<MockRuntime>, Arc<Mutex<Vec<String>>>) {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&messages);
        let app = configure_builder(mock_builder(), move |message: &str| {
            sink.lock()
                .expect("log sink lock")
                .push(message.to_string())
        })
        .build(mock_context(noop_assets()))
        .expect("mock app should build");
        (app, messages)
    }

    #[test]
    fn configured_app_starts_with_exactly_one_main_window() {
        let (app, _messages) = build_mock_app();

        let windows = app.webview_windows();
        assert_eq!(windows.len(), 1);
        assert!(app.get_webview_window(MAIN_WINDOW_LABEL).is_some());
    }

    #[test]
    fn configured_app_points_main_window_at_target_address() {
        let (app, _messages) = build_mock_app();

        let window = app
            .get_webview_window(MAIN_WINDOW_LABEL)
            .expect("main window exists");
        let url = window.url().expect("main window url");
        assert_eq!(url.as_str(), TARGET_URL);
    }

    #[test]
    fn setup_reports_created_window_through_injected_log() {
        let (_app, messages) = build_mock_app();

        let messages = messages.lock().expect("log sink lock");
        assert_eq!(
            *messages,
            vec![format!("main window '{WINDOW_TITLE}' created for {TARGET_URL}")]
        );
    }

    #[test]
    fn launching_twice_builds_independent_windows() {
        let (first, _) = build_mock_app();
        let (second, _) = build_mock_app();

        assert_eq!(first.webview_windows().len(), 1);
        assert_eq!(second.webview_windows().len(), 1);
    }
}
