//! API URL construction.

/// Base URL for API requests, derived from the current window location.
/// The backend listens on port 3000 next to wherever the bundle is served
/// from; returns an empty string outside a browser context.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/v1/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
