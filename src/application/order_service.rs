use serde_json::{Map, Value};

use crate::domain::errors::DomainError;
use crate::domain::ids::{stringify_id, ID_FIELD};
use crate::domain::order::{CreatedOrder, NewOrder, Order, ORDER_COLLECTION};
use crate::domain::ports::DocumentStore;

pub struct OrderService<S> {
    store: S,
}

impl<S: DocumentStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_order(&self, new_order: NewOrder) -> Result<CreatedOrder, DomainError> {
        new_order.validate()?;

        let order = Order::place(new_order);
        let document =
            serde_json::to_value(&order).map_err(|e| DomainError::Internal(e.to_string()))?;
        let id = self.store.create_document(ORDER_COLLECTION, document)?;

        log::info!(
            "Created order {} for '{}' ({} items, total {})",
            id,
            order.customer_name,
            order.items.len(),
            order.total
        );
        Ok(CreatedOrder {
            order_id: id.to_string(),
            total: order.total,
        })
    }

    /// Stored orders as loose JSON, with every identifier rendered as a string.
    pub fn list_orders(&self) -> Result<Vec<Value>, DomainError> {
        let docs = self.store.get_documents(ORDER_COLLECTION)?;
        Ok(docs
            .into_iter()
            .map(|doc| {
                let mut body = doc.body;
                body.insert(ID_FIELD.to_string(), Value::String(doc.id.to_string()));
                stringify_item_ids(&mut body);
                Value::Object(body)
            })
            .collect())
    }
}

fn stringify_item_ids(body: &mut Map<String, Value>) {
    let Some(Value::Array(items)) = body.get_mut("items") else {
        return;
    };
    for item in items.iter_mut().filter_map(Value::as_object_mut) {
        for key in [ID_FIELD, "product_id"] {
            if let Some(id) = item.get_mut(key) {
                if let Some(s) = stringify_id(id) {
                    *id = Value::String(s);
                }
            }
        }
    }
}
