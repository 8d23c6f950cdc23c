use utoipa::OpenApi;

use crate::domain::menu::Product;
use crate::domain::order::{OrderItem, OrderStatus};
use crate::handlers;
use crate::application::Diagnostics;
use crate::handlers::health::MessageResponse;
use crate::handlers::menu::SeedResponse;
use crate::handlers::orders::{CreateOrderRequest, CreateOrderResponse, ListOrdersResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Coffee Shop API", description = "Menu and order endpoints for a coffee shop"),
    paths(
        handlers::health::root,
        handlers::health::diagnostics,
        handlers::menu::seed_products,
        handlers::menu::get_menu,
        handlers::orders::create_order,
        handlers::orders::list_orders,
    ),
    components(schemas(
        Product,
        OrderItem,
        OrderStatus,
        MessageResponse,
        Diagnostics,
        SeedResponse,
        CreateOrderRequest,
        CreateOrderResponse,
        ListOrdersResponse,
    )),
    tags(
        (name = "health", description = "Liveness and diagnostics"),
        (name = "menu", description = "Menu seeding and listing"),
        (name = "orders", description = "Order placement and listing"),
    )
)]
pub struct ApiDoc;
