use crate::auth::check_bearer;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{get, web, HttpRequest, HttpResponse};
use common::Manifest;
use tracing::info;

/// Return the manifest for a package: declared filename plus the SHA1 of
/// the file's current bytes. The hash is recomputed on every call so the
/// manifest can never go stale, whatever that costs per request.
#[get("/api/get/{name}")]
pub async fn manifest(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();

    // Auth runs before any registry or filesystem access.
    let settings = state.registry.settings()?;
    check_bearer(&settings, &req)?;

    let resolved = state.registry.resolve(&name)?;

    let file_path = resolved.path.clone();
    let sha1 = web::block(move || integrity::sha1_hex_file(&file_path))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Hashing task failed: {}", e)))??;

    info!(
        "GET /api/get/{} - {} sha1={}",
        name, resolved.filename, sha1
    );

    Ok(HttpResponse::Ok().json(Manifest {
        name,
        filename: resolved.filename,
        sha1: Some(sha1),
    }))
}
