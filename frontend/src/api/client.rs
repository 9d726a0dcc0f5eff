use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Thin wrapper around one `reqwest` client. There is no shared default
/// auth header: authenticated endpoints take the bearer token explicitly,
/// so no hidden process-wide state has to be kept in sync with the session.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn bearer_headers(token: &str) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        let value = format!("Bearer {}", token)
            .parse()
            .map_err(|_| ApiError::request_failed("Invalid token format"))?;
        headers.insert(header::AUTHORIZATION, value);
        Ok(headers)
    }

    pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
        ApiError::request_failed(format!("Request failed: {}", err))
    }

    pub(crate) async fn map_json_response<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    pub(crate) async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
        response.json::<ApiError>().await.unwrap_or_else(|_| {
            ApiError::request_failed(format!("Request failed with status {}", status))
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
