//! # Request adapter
//!
//! The thin layer a front end (web handlers, the CLI) calls into. It turns
//! typed forms into inventory calls and inventory results into payloads:
//! a [`Listing`] to render, a [`Redirect`] back to the index, or a
//! [`ModifyResponse`] for the quantity and price endpoints.
//!
//! The adapter holds no state of its own; it is generic over any
//! [`InventoryApi`] so tests can drive it against a mock.

pub mod forms;

pub use forms::*;

use tracing::{info, warn};

use crate::clients::InventoryApi;
use crate::model::Product;
use crate::repository::InventoryError;

pub const DELETED: &str = "Product deleted.";
pub const NOT_FOUND: &str = "Product not found.";
pub const QUANTITY_UPDATED: &str = "Quantity updated.";
pub const PRICE_UPDATED: &str = "Price updated.";

#[derive(Clone)]
pub struct InventoryAdapter<C> {
    client: C,
}

impl<C: InventoryApi> InventoryAdapter<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// The full listing.
    pub async fn index(&self) -> Result<Listing, InventoryError> {
        let products = self.client.list().await?;
        Ok(Listing { products })
    }

    pub async fn add(&self, form: AddProductForm) -> Result<Redirect, InventoryError> {
        let product = Product::new(form.code, form.category, form.name, &form.quantity, &form.price);
        self.client.add(product).await?;
        Ok(Redirect::to_index(None))
    }

    /// Matching records, rendered in place of the full listing.
    pub async fn search(&self, form: SearchForm) -> Result<Listing, InventoryError> {
        let products = self
            .client
            .search(&form.criterion)
            .await?
            .iter()
            .map(Product::to_record)
            .collect();
        Ok(Listing { products })
    }

    /// Redirects whether or not the product existed; only the message differs.
    pub async fn delete(&self, code: &str) -> Result<Redirect, InventoryError> {
        let message = match self.client.delete(code).await {
            Ok(_) => DELETED,
            Err(InventoryError::NotFound(_)) => NOT_FOUND,
            Err(e) => return Err(e),
        };
        Ok(Redirect::to_index(Some(message.to_string())))
    }

    pub async fn adjust_quantity(&self, form: AdjustQuantityForm) -> ModifyResponse {
        let result = self.client.adjust_quantity(&form.code, &form.delta).await;
        respond(&form.code, result.map(|_| ()), QUANTITY_UPDATED)
    }

    pub async fn set_price(&self, form: SetPriceForm) -> ModifyResponse {
        let result = self.client.set_price(&form.code, &form.price).await;
        respond(&form.code, result.map(|_| ()), PRICE_UPDATED)
    }
}

fn respond(code: &str, result: Result<(), InventoryError>, success: &str) -> ModifyResponse {
    let (status, message) = match result {
        Ok(()) => (Status::Ok, success.to_string()),
        Err(e) => {
            let status = match e {
                InventoryError::NotFound(_) => Status::NotFound,
                InventoryError::ActorCommunication(_) => Status::Unavailable,
                _ => Status::Rejected,
            };
            (status, e.to_string())
        }
    };

    if status == Status::Ok {
        info!(%code, "Modify succeeded");
    } else {
        warn!(%code, ?status, %message, "Modify failed");
    }

    ModifyResponse {
        success: status == Status::Ok,
        message,
        status,
    }
}
