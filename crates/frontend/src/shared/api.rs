//! Thin JSON helpers over gloo-net.
//!
//! No retries, no backoff, no timeouts: errors come back as `Err(String)`
//! and the caller decides where the text lands (table placeholder, toast).

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_text(status, &body));
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_text(status, &body));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// Human-readable text for a non-2xx response. Prefers the backend's
/// `detail` field, then `message`, then falls back to the status code.
fn error_text(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("HTTP {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_detail_over_message() {
        let body = r#"{"detail": "plan not found", "message": "other"}"#;
        assert_eq!(error_text(404, body), "plan not found");
    }

    #[test]
    fn falls_back_to_message() {
        let body = r#"{"message": "bad request"}"#;
        assert_eq!(error_text(400, body), "bad request");
    }

    #[test]
    fn falls_back_to_status_code() {
        assert_eq!(error_text(502, ""), "HTTP 502");
        assert_eq!(error_text(500, "<html>oops</html>"), "HTTP 500");
        // structured but without the known fields
        assert_eq!(error_text(422, r#"{"errors": ["x"]}"#), "HTTP 422");
    }
}
