use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

/// Errors raised while loading or persisting the link data file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on link data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed link data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors returned to HTTP clients.
///
/// Every variant renders as a plain-text body with the matching status code.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    MethodNotAllowed,
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message } | AppError::Internal { message } => message,
            AppError::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl From<ValidationErrors> for AppError {
    fn from(_: ValidationErrors) -> Self {
        AppError::bad_request("Shortcut and URL are required")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = format!("{}\n", self.message());

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
