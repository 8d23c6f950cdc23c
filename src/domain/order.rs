use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;
use super::price;

pub const ORDER_COLLECTION: &str = "order";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i32,
    /// Unit price captured when the order is placed.
    #[serde(with = "super::price")]
    #[schema(value_type = f64, example = 4.5)]
    pub price: BigDecimal,
}

impl OrderItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.price * &BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), DomainError> {
        for (idx, item) in self.items.iter().enumerate() {
            if item.quantity <= 0 {
                return Err(DomainError::InvalidInput(format!(
                    "items[{}].quantity must be greater than zero",
                    idx
                )));
            }
            if item.price < BigDecimal::zero() {
                return Err(DomainError::InvalidInput(format!(
                    "items[{}].price must not be negative",
                    idx
                )));
            }
            if !price::is_representable(&item.price) {
                return Err(DomainError::InvalidInput(format!(
                    "items[{}].price is out of range",
                    idx
                )));
            }
        }
        if !price::is_representable(&order_total(&self.items)) {
            return Err(DomainError::InvalidInput(
                "order total is out of range".to_string(),
            ));
        }
        Ok(())
    }
}

/// The persisted order. `total` is always derived from `items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    #[serde(with = "super::price")]
    pub total: BigDecimal,
    pub status: OrderStatus,
}

impl Order {
    pub fn place(new_order: NewOrder) -> Self {
        let total = order_total(&new_order.items);
        Self {
            customer_name: new_order.customer_name,
            items: new_order.items,
            total,
            status: OrderStatus::Pending,
        }
    }
}

pub fn order_total(items: &[OrderItem]) -> BigDecimal {
    items
        .iter()
        .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
}

#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub order_id: String,
    pub total: BigDecimal,
}
