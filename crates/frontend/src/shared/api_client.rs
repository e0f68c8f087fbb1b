//! JSON-over-HTTP calls to the remote API.
//!
//! Every request carries the session cookie (`credentials: include`).
//! Non-2xx responses become an [`ApiError`] that keeps the server's
//! `message` when the body has one.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response, or its body could not be built
    #[error("network error: {0}")]
    Network(String),

    #[error("{message} (HTTP {status})")]
    Server { status: u16, message: String },

    /// Error status without a usable message in the body
    #[error("request failed with HTTP {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response from its decoded body, if any
    pub fn from_response(status: u16, body: Option<ApiErrorBody>) -> Self {
        match body.as_ref().and_then(ApiErrorBody::usable_message) {
            Some(message) => ApiError::Server {
                status,
                message: message.to_string(),
            },
            None => ApiError::Status(status),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Status(status) => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Text for a notification: the server message, or `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

async fn send(request: Result<Request, gloo_net::Error>, method: &str, path: &str) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?;
    let response = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        log::debug!("{} {} -> {}", method, path, response.status());
        return Ok(response);
    }

    let status = response.status();
    let body = response.json::<ApiErrorBody>().await.ok();
    let error = ApiError::from_response(status, body);
    log::warn!("{} {} -> {}", method, path, error);
    Err(error)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = with_session(Request::get(&api_url(path))).build();
    let response = send(request, "GET", path).await?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = with_session(Request::post(&api_url(path))).json(body);
    let response = send(request, "POST", path).await?;
    decode(response).await
}

/// POST whose response body is not needed
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_session(Request::post(&api_url(path))).json(body);
    send(request, "POST", path).await.map(|_| ())
}

/// POST without a body, e.g. logout
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    let request = with_session(Request::post(&api_url(path))).build();
    send(request, "POST", path).await.map(|_| ())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = with_session(Request::put(&api_url(path))).json(body);
    let response = send(request, "PUT", path).await?;
    decode(response).await
}

/// PUT whose response body is not needed
pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_session(Request::put(&api_url(path))).json(body);
    send(request, "PUT", path).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = with_session(Request::delete(&api_url(path))).build();
    send(request, "DELETE", path).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_with_message() {
        let body = ApiErrorBody {
            message: Some("Credenciales inválidas".to_string()),
        };
        let error = ApiError::from_response(401, Some(body));
        assert_eq!(error.server_message(), Some("Credenciales inválidas"));
        assert!(error.is_unauthorized());
        assert_eq!(error.user_message("Error desconocido"), "Credenciales inválidas");
    }

    #[test]
    fn test_error_without_usable_message_falls_back() {
        let error = ApiError::from_response(500, Some(ApiErrorBody { message: None }));
        assert_eq!(error, ApiError::Status(500));
        assert_eq!(error.user_message("Error desconocido"), "Error desconocido");

        let no_body = ApiError::from_response(502, None);
        assert_eq!(no_body.status(), Some(502));
    }

    #[test]
    fn test_network_error_has_no_status() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(error.status(), None);
        assert_eq!(error.user_message("Error al cargar métricas"), "Error al cargar métricas");
    }
}
