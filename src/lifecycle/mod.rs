//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`InventorySystem`] - Opens the repository, spawns the actor, shuts it down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod inventory_system;
pub mod tracing;

pub use self::inventory_system::*;
pub use self::tracing::*;
