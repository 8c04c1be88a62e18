use crate::framework::InventoryHandle;
use crate::model::{Product, ProductRecord};
use crate::repository::InventoryError;
use async_trait::async_trait;

/// The operations a front end may call on the inventory.
///
/// Every method has a default implementation that forwards to
/// [`InventoryApi::handle`], so an implementor only supplies the handle.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Access the underlying actor handle.
    fn handle(&self) -> &InventoryHandle;

    /// All products, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<ProductRecord>, InventoryError> {
        tracing::debug!("Sending request");
        self.handle().list().await
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, code: &str) -> Result<Option<Product>, InventoryError> {
        tracing::debug!("Sending request");
        self.handle().get(code.to_string()).await
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, criterion: &str) -> Result<Vec<Product>, InventoryError> {
        tracing::debug!("Sending request");
        self.handle().search(criterion.to_string()).await
    }

    /// Inserts or replaces a product. Returns the replaced product, if any.
    #[tracing::instrument(skip(self, product), fields(code = product.code()))]
    async fn add(&self, product: Product) -> Result<Option<Product>, InventoryError> {
        tracing::debug!(?product, "Sending request");
        self.handle().add(product).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, code: &str) -> Result<Product, InventoryError> {
        tracing::debug!("Sending request");
        self.handle().delete(code.to_string()).await
    }

    /// Applies a signed quantity change. Returns the new quantity.
    #[tracing::instrument(skip(self))]
    async fn adjust_quantity(&self, code: &str, delta: &str) -> Result<i64, InventoryError> {
        tracing::debug!("Sending request");
        self.handle()
            .adjust_quantity(code.to_string(), delta.to_string())
            .await
    }

    /// Replaces the price. Returns the new price.
    #[tracing::instrument(skip(self))]
    async fn set_price(&self, code: &str, price: &str) -> Result<f64, InventoryError> {
        tracing::debug!("Sending request");
        self.handle()
            .set_price(code.to_string(), price.to_string())
            .await
    }
}
