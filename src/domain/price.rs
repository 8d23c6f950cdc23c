//! Serde glue for decimal prices.
//!
//! Prices travel as plain JSON numbers so clients can do arithmetic on them,
//! but a numeric string such as `"4.50"` is accepted on the way in.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Whether `value` survives the trip to a JSON number.
pub fn is_representable(value: &BigDecimal) -> bool {
    value.to_f64().is_some_and(f64::is_finite)
}

pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_f64() {
        Some(f) if f.is_finite() => serializer.serialize_f64(f),
        _ => Err(serde::ser::Error::custom(format!(
            "price {} is not representable as a number",
            value
        ))),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    deserializer.deserialize_any(PriceVisitor)
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = BigDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<BigDecimal, E> {
        if !v.is_finite() {
            return Err(E::custom("price must be finite"));
        }
        // Display gives the shortest round-tripping form, so 4.5 stays 4.5.
        BigDecimal::from_str(&v.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigDecimal, E> {
        BigDecimal::from_str(v.trim())
            .map_err(|e| E::custom(format!("invalid price '{}': {}", v, e)))
    }
}
