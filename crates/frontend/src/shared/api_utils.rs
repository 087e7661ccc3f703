//! API utilities for frontend-backend communication
//!
//! The backend listens on port 3000 of the host that served the page.

use contracts::shared::api_response::ApiResponse;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

pub const BACKEND_PORT: u16 = 3000;

/// Base URL for API requests, e.g. "http://localhost:3000".
/// Empty string if window is not available.
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
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Reads an `ApiResponse<T>` body. A `success: false` envelope becomes
/// `Err(message)`, as does a non-2xx status whose body is not an envelope.
pub async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    match serde_json::from_str::<ApiResponse<T>>(&text) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !(200..300).contains(&status) => Err(format!("Server error: {}", status)),
        Err(e) => Err(format!("Failed to parse: {}", e)),
    }
}
