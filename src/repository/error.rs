//! Error types for the inventory repository.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::framework::FrameworkError;

/// Reasons an inventory operation is refused.
///
/// Every variant leaves the repository untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// No product is stored under the given code.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The quantity change parsed to zero.
    #[error("Quantity change must be non-zero")]
    ZeroDelta,

    /// Applying the change would leave the quantity below zero.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: i64 },

    /// Applying the change would take the quantity outside the `i64` range.
    #[error("Quantity out of range: {available} {delta:+}")]
    QuantityOverflow { delta: i64, available: i64 },

    /// The new price parsed to zero or less.
    #[error("Invalid price: {0:.3}")]
    InvalidPrice(f64),

    /// The request never reached the inventory actor, or its reply was lost.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl InventoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, InventoryError::NotFound(_))
    }
}

impl From<FrameworkError> for InventoryError {
    fn from(e: FrameworkError) -> Self {
        InventoryError::ActorCommunication(e.to_string())
    }
}

/// I/O failures at the backing-file boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
