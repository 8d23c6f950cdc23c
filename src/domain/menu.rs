use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

pub const PRODUCT_COLLECTION: &str = "product";

/// A menu entry as clients see it. Stored documents carry an `_id` as well,
/// which never makes it into this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub title: String,
    pub description: String,
    #[serde(with = "super::price")]
    #[schema(value_type = f64, example = 4.5)]
    pub price: BigDecimal,
    pub category: String,
    pub in_stock: bool,
    pub image: String,
}

impl Product {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(format!(
                "price of '{}' must not be negative",
                self.title
            )));
        }
        if !super::price::is_representable(&self.price) {
            return Err(DomainError::InvalidInput(format!(
                "price of '{}' is out of range",
                self.title
            )));
        }
        Ok(())
    }
}

// Prices are in cents.
const SEED: [(&str, &str, i64, &str, &str); 6] = [
    (
        "Espresso",
        "Rich and bold shot",
        300,
        "coffee",
        "https://images.unsplash.com/photo-1511920170033-f8396924c348",
    ),
    (
        "Americano",
        "Espresso with hot water",
        350,
        "coffee",
        "https://images.unsplash.com/photo-1503481766315-7a586b20f66b",
    ),
    (
        "Cappuccino",
        "Espresso with steamed milk foam",
        400,
        "coffee",
        "https://images.unsplash.com/photo-1527167765609-5ff6f4cfb9cf",
    ),
    (
        "Latte",
        "Espresso with steamed milk",
        450,
        "coffee",
        "https://images.unsplash.com/photo-1453614512568-c4024d13c247",
    ),
    (
        "Mocha",
        "Chocolate + espresso + milk",
        475,
        "coffee",
        "https://images.unsplash.com/photo-1498804103079-a6351b050096",
    ),
    (
        "Croissant",
        "Buttery flaky pastry",
        325,
        "bakery",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff",
    ),
];

/// The products inserted by the seed endpoint when the menu is empty.
pub fn default_menu() -> Vec<Product> {
    SEED.iter()
        .map(|&(title, description, cents, category, image)| Product {
            title: title.to_string(),
            description: description.to_string(),
            price: BigDecimal::new(cents.into(), 2),
            category: category.to_string(),
            in_stock: true,
            image: image.to_string(),
        })
        .collect()
}
