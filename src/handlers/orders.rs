use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::order::{NewOrder, OrderItem};
use crate::errors::AppError;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub ok: bool,
    pub order_id: String,
    #[serde(with = "crate::domain::price")]
    #[schema(value_type = f64, example = 12.0)]
    pub total: BigDecimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    /// Orders as stored, with `_id` and item `product_id` values as strings.
    #[schema(value_type = Vec<Object>)]
    pub orders: Vec<Value>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// The total is always computed here from the submitted items; clients
/// cannot supply it.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = CreateOrderResponse),
        (status = 422, description = "Malformed order"),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let service = state.orders();

    let created = web::block(move || {
        service.create_order(NewOrder {
            customer_name: body.customer_name,
            items: body.items,
        })
    })
    .await??;

    Ok(HttpResponse::Ok().json(CreateOrderResponse {
        ok: true,
        order_id: created.order_id,
        total: created.total,
    }))
}

/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders", body = ListOrdersResponse),
        (status = 503, description = "Database unavailable"),
    ),
    tag = "orders"
)]
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = state.orders();
    let orders = web::block(move || service.list_orders()).await??;

    Ok(HttpResponse::Ok().json(ListOrdersResponse { orders }))
}
