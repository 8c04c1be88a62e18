use crate::clients::InventoryApi;
use crate::framework::InventoryHandle;
use crate::model::Product;
use crate::repository::InventoryError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the inventory actor.
///
/// Cheap to clone; every clone talks to the same actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: InventoryHandle,
}

impl InventoryClient {
    pub fn new(inner: InventoryHandle) -> Self {
        Self { inner }
    }

    /// Builds a [`Product`] from raw fields and adds it.
    #[instrument(skip(self, category, name))]
    pub async fn add_product(
        &self,
        code: &str,
        category: &str,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> Result<Option<Product>, InventoryError> {
        debug!("Sending request");
        self.inner
            .add(Product::new(code, category, name, quantity, price))
            .await
    }
}

#[async_trait]
impl InventoryApi for InventoryClient {
    fn handle(&self) -> &InventoryHandle {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockInventory;

    #[tokio::test]
    async fn client_forwards_raw_arguments() {
        let mut mock = MockInventory::new();
        mock.expect_add("A1").return_ok(None);
        mock.expect_set_price("A1", "3,5").return_ok(3.5);
        mock.expect_delete("A1")
            .return_err(InventoryError::NotFound("A1".into()));

        let client = InventoryClient::new(mock.handle());
        assert_eq!(
            client.add_product(" A1 ", "Tools", "Widget", "1", "2").await,
            Ok(None)
        );
        assert_eq!(client.set_price("A1", "3,5").await, Ok(3.5));
        assert!(client.delete("A1").await.unwrap_err().is_not_found());

        mock.verify();
    }
}
