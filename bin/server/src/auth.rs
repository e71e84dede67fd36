//! Bearer-token gate for the package endpoints.

use crate::error::ApiError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;
use registry::ServerSettings;

/// Enforce the configured bearer token on a request.
///
/// Runs before any registry lookup or filesystem access. When no token is
/// configured the gate is disabled and every request passes. The probe
/// endpoints never call this.
pub fn check_bearer(settings: &ServerSettings, req: &HttpRequest) -> Result<(), ApiError> {
    let Some(expected) = settings.token.as_deref() else {
        return Ok(());
    };

    let supplied = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;
    let supplied = supplied.strip_prefix("Bearer ").unwrap_or(supplied);

    if supplied == expected {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}
