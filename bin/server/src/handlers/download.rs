use crate::auth::check_bearer;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{get, web, HttpRequest, HttpResponse};
use anyhow::Context;
use tokio_util::io::ReaderStream;
use tracing::info;

/// Stream a package file to the caller as an attachment.
///
/// No hashing happens here; the expected digest was already exposed via
/// the manifest endpoint and the client verifies after the transfer.
#[get("/api/download/{name}")]
pub async fn download(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();

    let settings = state.registry.settings()?;
    check_bearer(&settings, &req)?;

    let resolved = state.registry.resolve(&name)?;

    let file = tokio::fs::File::open(&resolved.path)
        .await
        .with_context(|| format!("Failed to open package file: {:?}", resolved.path))
        .map_err(ApiError::Internal)?;
    let length = file
        .metadata()
        .await
        .context("Failed to read package file metadata")
        .map_err(ApiError::Internal)?
        .len();

    info!(
        "GET /api/download/{} - streaming {} ({} bytes)",
        name, resolved.filename, length
    );

    let mut response = HttpResponse::Ok();
    response
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(resolved.filename)],
        })
        .content_type(ContentType::octet_stream())
        .no_chunking(length);

    Ok(response.streaming(ReaderStream::new(file)))
}
