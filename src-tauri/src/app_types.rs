use url::Url;

use crate::{MAIN_WINDOW_LABEL, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TARGET_URL, WINDOW_TITLE};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MainWindowSpec {
    pub(crate) label: &'static str,
    pub(crate) title: &'static str,
    pub(crate) url: Url,
    pub(crate) min_width: f64,
    pub(crate) min_height: f64,
}

impl MainWindowSpec {
    pub(crate) fn from_constants() -> Result<Self, String> {
        Ok(Self {
            label: MAIN_WINDOW_LABEL,
            title: WINDOW_TITLE,
            url: parse_target_url(TARGET_URL)?,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
        })
    }
}

/// The webview must receive the address exactly as written, so any
/// normalization by the parser is treated as an error.
pub(crate) fn parse_target_url(raw_url: &str) -> Result<Url, String> {
    let parsed =
        Url::parse(raw_url).map_err(|error| format!("Invalid target URL '{raw_url}': {error}"))?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "Unsupported target URL scheme '{scheme}', only http/https are allowed."
            ));
        }
    }
    if parsed.as_str() != raw_url {
        return Err(format!(
            "Target URL '{raw_url}' is not canonical (parsed as '{}').",
            parsed.as_str()
        ));
    }
    Ok(parsed)
}
