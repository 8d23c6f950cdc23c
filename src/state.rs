use std::sync::Arc;

use crate::application::{DiagnosticsService, MenuService, OrderService};
use crate::config::Config;
use crate::domain::ports::DocumentStore;

pub type SharedStore = Arc<dyn DocumentStore>;

/// Per-app state shared by all workers. The store handle is the only
/// long-lived resource.
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
    database_url_set: bool,
    database_name_set: bool,
}

impl AppState {
    pub fn new(store: SharedStore, config: &Config) -> Self {
        Self {
            store,
            database_url_set: config.database_url.is_some(),
            database_name_set: config.database_name.is_some(),
        }
    }

    pub fn menu(&self) -> MenuService<SharedStore> {
        MenuService::new(self.store.clone())
    }

    pub fn orders(&self) -> OrderService<SharedStore> {
        OrderService::new(self.store.clone())
    }

    pub fn diagnostics(&self) -> DiagnosticsService<SharedStore> {
        DiagnosticsService::new(
            self.store.clone(),
            self.database_url_set,
            self.database_name_set,
        )
    }
}
