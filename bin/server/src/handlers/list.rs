use crate::auth::check_bearer;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{get, web, HttpRequest, HttpResponse};
use tracing::info;

/// List all package names, in configuration-file order.
#[get("/api/list")]
pub async fn list(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let settings = state.registry.settings()?;
    check_bearer(&settings, &req)?;

    let names = state.registry.package_names()?;
    info!("GET /api/list - {} packages", names.len());

    Ok(HttpResponse::Ok().json(names))
}
