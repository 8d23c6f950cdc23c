use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::menu::Product;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub seeded: bool,
    pub count: usize,
}

/// POST /api/seed
///
/// Inserts the default menu when no products exist yet; otherwise reports the
/// current product count and changes nothing.
#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "Seed outcome", body = SeedResponse),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "menu"
)]
pub async fn seed_products(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = state.menu();
    let outcome = web::block(move || service.seed()).await??;

    Ok(HttpResponse::Ok().json(SeedResponse {
        seeded: outcome.seeded,
        count: outcome.count,
    }))
}

/// GET /api/menu
#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "All menu products", body = Vec<Product>),
        (status = 500, description = "A stored product does not match the product shape"),
    ),
    tag = "menu"
)]
pub async fn get_menu(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = state.menu();
    let products = web::block(move || service.list_menu()).await??;

    Ok(HttpResponse::Ok().json(products))
}
