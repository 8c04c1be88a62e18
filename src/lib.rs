//! # Inventory Actor
//!
//! > **A product inventory kept in a flat file, served by a single actor.**
//!
//! Products (code, category, name, quantity, price) live in memory, keyed by
//! code, and are written back to a semicolon-delimited file after every
//! change. One Tokio task owns that state; everything else talks to it
//! through a cloneable client.
//!
//! ## 🏗️ Design
//!
//! ### One writer
//! The [`InventoryRepository`](repository::InventoryRepository) has no locks.
//! It is moved into an [`InventoryActor`](framework::InventoryActor), which
//! handles requests sequentially, so every operation moves the inventory
//! from one consistent state (memory and file agreeing) to the next.
//! Separate processes sharing one file are *not* coordinated.
//!
//! ### Lenient input
//! Quantities and prices arrive as text. Malformed numbers become zero
//! instead of errors (see [`model::lenient`]); a decimal comma is accepted.
//!
//! ### Explicit refusals
//! Operations that can be refused return
//! [`InventoryError`](repository::InventoryError): not found, zero quantity
//! change, insufficient stock, invalid price.
//!
//! ### Log-and-continue persistence
//! A failed save is logged and the in-memory state stays authoritative;
//! [`is_persisted`](repository::InventoryRepository::is_persisted) reports it.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - [`Product`](model::Product) and the lenient parsers.
//! - [`repository`] - The in-memory map plus its [`FlatFileStore`](repository::FlatFileStore).
//! - [`framework`] - The actor, its request enum and a [`mock`](framework::mock).
//! - [`clients`] - [`InventoryClient`](clients::InventoryClient) and the [`InventoryApi`](clients::InventoryApi) trait.
//! - [`adapter`] - Typed forms in, listings / redirects / modify responses out.
//! - [`lifecycle`] - [`InventorySystem`](lifecycle::InventorySystem) and tracing setup.
//! - [`config`], [`cli`] - Configuration and the `inventory` binary's arguments.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! inventory --store stock.csv add A1 Tools Widget 10 2,50
//! inventory --store stock.csv adjust A1 -3
//! RUST_LOG=info inventory --store stock.csv list
//! ```

pub mod adapter;
pub mod cli;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod repository;
