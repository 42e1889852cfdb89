//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod migrate;
pub mod seed;

use serde_json::Value;

/// Fetch a JSON document from the API, turning non-2xx statuses into errors.
///
/// The API's failure bodies are `{"error": {"code", "message"}}`; the message
/// is surfaced to the user when present.
pub(crate) async fn fetch_json<T: serde::de::DeserializeOwned>(
    url: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response).await);
    }
    Ok(response.json().await?)
}

/// Build a user-facing error from an API failure response.
pub(crate) async fn api_error(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> Box<dyn std::error::Error> {
    let message = match response.json::<Value>().await {
        Ok(body) => body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_owned),
        Err(_) => None,
    };
    match message {
        Some(message) => format!("API error ({status}): {message}").into(),
        None => format!("API error ({status})").into(),
    }
}
