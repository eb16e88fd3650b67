use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

// Shared HTTP client instance.
lazy_static::lazy_static! {
    static ref CLIENT: Arc<reqwest::Client> = Arc::new(reqwest::Client::new());
}

/// Custom error type for HTTP requests.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Could not connect: {0}")]
    Connect(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("HTTP error: {0} returned {1}. Response body: {2}")]
    HttpError(reqwest::Url, u16, String),
    #[error("Error deserializing JSON: {0}")]
    JsonError(String),
    #[error("Other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Other(e.to_string())
        }
    }
}

/// Makes a GET request to `url` and decodes the JSON response body.
pub async fn request<T: DeserializeOwned>(
    url: &str,                 // Absolute request target.
    timeout: Option<Duration>, // Applies to the whole request, body included.
) -> Result<T, RequestError> {
    let url = reqwest::Url::parse(url).map_err(|e| RequestError::Other(e.to_string()))?;

    let mut req = CLIENT.get(url.clone());
    if let Some(timeout) = timeout {
        req = req.timeout(timeout);
    }

    let response = req.send().await?;

    // Get the response status code.
    let status = response.status();
    let body = response.text().await?;

    // The body is decoded whatever the status; callers inspect its shape.
    match serde_json::from_str::<T>(&body) {
        Ok(value) => {
            if !status.is_success() {
                log::warn!("{} returned {}, using its JSON body", url, status.as_u16());
            }
            Ok(value)
        }
        Err(e) if status.is_success() => Err(RequestError::JsonError(e.to_string())),
        Err(_) => Err(RequestError::HttpError(url, status.as_u16(), body)),
    }
}
