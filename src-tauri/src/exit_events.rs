pub fn describe_exit_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (last window closed)".to_string(),
    }
}

/// Exit requests are always honored: once the main window is gone there is
/// nothing left for the shell to keep alive.
pub fn handle_exit_requested<F>(code: Option<i32>, log: F)
where
    F: Fn(&str),
{
    log(&format!("exit requested with {}", describe_exit_code(code)));
}

pub fn handle_exit_event<F>(log: F)
where
    F: Fn(&str),
{
    log("desktop process exiting");
}
