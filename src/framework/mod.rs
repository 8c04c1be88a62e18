//! Actor plumbing around the inventory repository.
//!
//! # Main Components
//!
//! - [`InventoryActor`] - Task that owns the repository and serialises every request
//! - [`InventoryHandle`] - Cloneable sender with one async method per operation
//! - [`InventoryRequest`] - The message enum
//! - [`FrameworkError`] - Channel failures
//!
//! # Testing
//!
//! See [`mock`] for a scripted stand-in that answers requests without a repository.

pub mod actor;
pub mod mock;

pub use self::actor::*;
