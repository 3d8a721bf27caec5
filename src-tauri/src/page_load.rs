use tauri::webview::PageLoadEvent;
use url::Url;

pub fn describe_page_load(event: PageLoadEvent, url: &Url) -> String {
    match event {
        PageLoadEvent::Started => format!("page-load started: {url}"),
        PageLoadEvent::Finished => format!("page-load finished: {url}"),
    }
}
