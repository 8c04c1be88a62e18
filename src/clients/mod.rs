//! Typed, traced wrappers around [`InventoryHandle`](crate::framework::InventoryHandle).

pub mod inventory_api;
pub mod inventory_client;

pub use inventory_api::*;
pub use inventory_client::*;
