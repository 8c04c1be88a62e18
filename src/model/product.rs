//! The [`Product`] record.
//!
//! Construction never fails: text fields are trimmed and the numeric fields
//! go through the lenient parsers in [`crate::model::lenient`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::lenient::{parse_lenient_float, parse_lenient_int};

/// A single inventory line item.
///
/// The `code` is the key the [`InventoryRepository`](crate::repository::InventoryRepository)
/// stores the product under, so it has no setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    code: String,
    category: String,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    /// Creates a new Product from raw text fields.
    ///
    /// # Arguments
    /// * `code` - Unique key, trimmed
    /// * `category` - Free text, trimmed
    /// * `name` - Free text, trimmed
    /// * `quantity_raw` - Integer text; unparsable input becomes `0`
    /// * `price_raw` - Decimal text, `,` or `.` separator; unparsable input becomes `0.0`
    pub fn new(
        code: impl AsRef<str>,
        category: impl AsRef<str>,
        name: impl AsRef<str>,
        quantity_raw: &str,
        price_raw: &str,
    ) -> Self {
        let code = code.as_ref().trim().to_string();
        let quantity = parse_lenient_int(quantity_raw);
        let price = parse_lenient_float(price_raw);
        if quantity.defaulted {
            debug!(%code, raw = quantity_raw, "quantity defaulted to 0");
        }
        if price.defaulted {
            debug!(%code, raw = price_raw, "price defaulted to 0.0");
        }

        Self {
            code,
            category: category.as_ref().trim().to_string(),
            name: name.as_ref().trim().to_string(),
            quantity: quantity.value,
            price: price.value,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Returns the five fields in their canonical order, ready for JSON rendering.
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            code: self.code.clone(),
            category: self.category.clone(),
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }

    /// Case-insensitive match against an already lowercased criterion:
    /// exact on code, substring on name or category.
    pub(crate) fn matches(&self, criterion: &str) -> bool {
        self.code.to_lowercase() == criterion
            || self.name.to_lowercase().contains(criterion)
            || self.category.to_lowercase().contains(criterion)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code: {}", self.code)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Quantity: {} units", self.quantity)?;
        write!(f, "Price: ${:.3}", self.price)
    }
}

/// Serializable view of a [`Product`]. Field order is code, category, name, quantity, price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub category: String,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        product.to_record()
    }
}
