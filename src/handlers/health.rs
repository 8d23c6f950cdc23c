use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::Diagnostics;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = MessageResponse)),
    tag = "health"
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Coffee Shop API is running".to_string(),
    })
}

/// GET /test
///
/// Reports liveness plus whatever can be learned about the document store.
/// Store failures show up as status strings in the body, never as an error
/// status.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Diagnostic report", body = Diagnostics)),
    tag = "health"
)]
pub async fn diagnostics(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = state.diagnostics();
    let report = web::block(move || service.report()).await?;

    Ok(HttpResponse::Ok().json(report))
}
