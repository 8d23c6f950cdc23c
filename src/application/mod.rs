pub mod diagnostics;
pub mod menu_service;
pub mod order_service;

pub use diagnostics::{Diagnostics, DiagnosticsService};
pub use menu_service::{MenuService, SeedOutcome};
pub use order_service::OrderService;
