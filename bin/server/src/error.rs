//! API error type and its HTTP mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use registry::RegistryError;
use serde::Serialize;
use tracing::error;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// API error type. Registry errors carry their own taxonomy; everything
/// else that can fail in a handler is an internal error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid or missing bearer token")]
    Unauthorized,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl ApiError {
    /// Get the error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Registry(RegistryError::PackageNotFound(_)) => "package_not_found",
            Self::Registry(RegistryError::FileMissing(_)) => "file_missing",
            Self::Registry(RegistryError::MisconfiguredPackage(_)) => "misconfigured_package",
            Self::Registry(_) => "configuration_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Registry(RegistryError::PackageNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Registry(RegistryError::FileMissing(_)) => StatusCode::NOT_FOUND,
            Self::Registry(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(status).json(ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_expected_statuses() {
        let cases = [
            (
                ApiError::Registry(RegistryError::PackageNotFound("x".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Registry(RegistryError::FileMissing("x.zip".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Registry(RegistryError::MisconfiguredPackage("x".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }
}
