use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::ids::ID_FIELD;
use crate::domain::menu::{default_menu, Product, PRODUCT_COLLECTION};
use crate::domain::ports::DocumentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub seeded: bool,
    pub count: usize,
}

pub struct MenuService<S> {
    store: S,
}

impl<S: DocumentStore> MenuService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert the default menu, unless any product already exists.
    ///
    /// The products are written as one batch, so a failed seed leaves the
    /// menu empty. The existence check is a separate store call, so two
    /// concurrent first calls may both seed.
    pub fn seed(&self) -> Result<SeedOutcome, DomainError> {
        let existing = self.store.get_documents(PRODUCT_COLLECTION)?;
        if !existing.is_empty() {
            log::info!(
                "Menu already has {} products, skipping seed",
                existing.len()
            );
            return Ok(SeedOutcome {
                seeded: false,
                count: existing.len(),
            });
        }

        let documents = default_menu()
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let inserted = self
            .store
            .create_documents(PRODUCT_COLLECTION, documents)?
            .len();

        log::info!("Seeded menu with {} products", inserted);
        Ok(SeedOutcome {
            seeded: true,
            count: inserted,
        })
    }

    pub fn list_menu(&self) -> Result<Vec<Product>, DomainError> {
        self.store
            .get_documents(PRODUCT_COLLECTION)?
            .into_iter()
            .map(|doc| {
                let mut body = doc.body;
                body.remove(ID_FIELD);

                let invalid = |reason: String| DomainError::InvalidDocument {
                    collection: PRODUCT_COLLECTION.to_string(),
                    reason: format!("document {}: {}", doc.id, reason),
                };
                let product: Product =
                    serde_json::from_value(Value::Object(body)).map_err(|e| invalid(e.to_string()))?;
                product.validate().map_err(|e| invalid(e.to_string()))?;
                Ok(product)
            })
            .collect()
    }
}
