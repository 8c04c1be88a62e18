use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

use crate::adapter::InventoryAdapter;
use crate::clients::InventoryClient;
use crate::config::InventoryConfig;
use crate::framework::InventoryActor;
use crate::repository::InventoryRepository;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// Owns the running inventory actor.
///
/// `InventorySystem` is responsible for:
/// - **Startup**: opening the repository at the configured path and spawning its actor
/// - **Access**: handing out clients and request adapters
/// - **Shutdown**: closing the channel and waiting for the actor to finish
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::start(&InventoryConfig::new("stock.csv"));
/// system.client.add_product("A1", "Tools", "Widget", "5", "2,50").await?;
/// let repository = system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for the inventory actor. Clones share the same actor.
    pub client: InventoryClient,

    handle: JoinHandle<InventoryRepository>,
}

impl InventorySystem {
    /// Loads the repository and spawns its actor. Must be called inside a tokio runtime.
    pub fn start(config: &InventoryConfig) -> Self {
        let repository = InventoryRepository::open(&config.store_path);
        let (actor, handle) = InventoryActor::new(config.channel_capacity, repository);

        Self {
            client: InventoryClient::new(handle),
            handle: tokio::spawn(actor.run()),
        }
    }

    /// A request adapter bound to a clone of the client.
    pub fn adapter(&self) -> InventoryAdapter<InventoryClient> {
        InventoryAdapter::new(self.client.clone())
    }

    /// Drops the system's client and waits for the actor to drain its queue.
    ///
    /// The actor only stops once *every* clone of the client is gone, so drop
    /// any adapters or clients handed out before awaiting this.
    ///
    /// Returns the repository in its final state.
    pub async fn shutdown(self) -> Result<InventoryRepository, SystemError> {
        info!("Shutting down inventory system...");
        drop(self.client);

        match self.handle.await {
            Ok(repository) => {
                info!(persisted = repository.is_persisted(), "Inventory system shutdown complete.");
                Ok(repository)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(e.into())
            }
        }
    }
}
