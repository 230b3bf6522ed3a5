use std::any::Any;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// API error type with HTTP status code
///
/// Clients only ever see the fixed envelope for the status. `detail` carries
/// the internal cause and is written to the log when the response is built.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorEnvelope {
    /// Envelope for one of the five public statuses
    ///
    /// Any other 4xx status is reported as 400 and any other 5xx as 500.
    pub fn for_status(status: StatusCode) -> Self {
        let status = public_status(status);
        Self {
            success: false,
            error: status.as_u16(),
            message: public_message(status).to_string(),
        }
    }
}

fn public_status(status: StatusCode) -> StatusCode {
    match status {
        StatusCode::BAD_REQUEST
        | StatusCode::NOT_FOUND
        | StatusCode::METHOD_NOT_ALLOWED
        | StatusCode::UNPROCESSABLE_ENTITY
        | StatusCode::INTERNAL_SERVER_ERROR => status,
        s if s.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status: public_status(status),
            detail: detail.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// The envelope sent to the client
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::for_status(self.status)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, detail = %self.detail, "request failed");
        } else {
            tracing::warn!(status = %self.status, detail = %self.detail, "request rejected");
        }

        (self.status, Json(self.envelope())).into_response()
    }
}

/// Rewrites framework-generated error responses into the JSON envelope
///
/// Axum answers unmatched methods, extractor rejections and the like with a
/// plain-text body. Responses that already carry JSON pass through untouched.
pub async fn json_error_envelope(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if is_json {
        return response;
    }

    let public = public_status(status);
    tracing::debug!(original = %status, status = %public, "wrapping framework error");

    // Keep headers such as `allow` from the original response
    let (mut parts, _body) = response.into_parts();
    parts.status = public;
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    let body = Json(ErrorEnvelope::for_status(public))
        .into_response()
        .into_body();

    Response::from_parts(parts, body)
}

/// Router fallback for paths that match no route
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("no route matches the request path")
}

/// Converts a handler panic into the 500 envelope
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::internal_server_error(format!("handler panicked: {}", detail)).into_response()
}
