//! Where the backend lives, seen from the browser.

/// Port of `trunk serve`; pages served from it talk to the backend directly.
const DEV_SERVER_PORT: &str = "8080";
const BACKEND_PORT: u16 = 3000;

/// Base URL for backend requests.
///
/// In production the backend serves the bundle itself, so the page origin is
/// the API origin. Under the dev server the backend runs next to it on port
/// 3000. Empty when there is no window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();

    if location.port().unwrap_or_default() != DEV_SERVER_PORT {
        return location.origin().unwrap_or_default();
    }

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full backend URL from a path such as `/api/chat`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `url` and decode the body with `parse`.
///
/// Non-2xx statuses and network failures are errors, as is a body `parse`
/// rejects.
pub async fn get_text_with<T, F>(url: &str, parse: F) -> Result<T, String>
where
    F: FnOnce(&str) -> Option<T>,
{
    use gloo_net::http::Request;

    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response.text().await.map_err(|e| format!("{e}"))?;
    parse(&text).ok_or_else(|| format!("unexpected body from {url}"))
}
