use actix_web::{get, HttpResponse, Result as ActixResult};
use common::{TouchResponse, VersionResponse};

/// Liveness probe. Intentionally unauthenticated and reads no
/// configuration, so it answers even when the registry is broken.
#[get("/api/touch")]
pub async fn touch() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(TouchResponse { ok: true }))
}

/// Running server version, for client-side compatibility checks.
#[get("/api/version")]
pub async fn version() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
