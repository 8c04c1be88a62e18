//! # Inventory actor
//!
//! The actor owns the [`InventoryRepository`] and is the only code that ever
//! touches it. Requests arrive over an mpsc channel and are handled strictly
//! one at a time, so no lock guards the repository. Every reply travels back
//! on a oneshot channel carried inside the request.
//!
//! ## Key Types
//!
//! - [`InventoryRequest`]: One variant per repository operation.
//! - [`InventoryActor`]: The event loop that owns the repository.
//! - [`InventoryHandle`]: The cloneable sending half.
//! - [`FrameworkError`]: Channel failures (actor gone, reply dropped).

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::model::{Product, ProductRecord};
use crate::repository::{InventoryError, InventoryRepository};

/// Errors raised by the message plumbing rather than by the inventory itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, InventoryError>>;

/// Messages understood by the [`InventoryActor`].
///
/// Read operations (`List`, `Get`, `Search`) cannot fail once they reach the
/// actor; mutating operations report refusals as [`InventoryError`].
#[derive(Debug)]
pub enum InventoryRequest {
    List {
        respond_to: Response<Vec<ProductRecord>>,
    },
    Get {
        code: String,
        respond_to: Response<Option<Product>>,
    },
    Search {
        criterion: String,
        respond_to: Response<Vec<Product>>,
    },
    Add {
        product: Product,
        respond_to: Response<Option<Product>>,
    },
    Delete {
        code: String,
        respond_to: Response<Product>,
    },
    AdjustQuantity {
        code: String,
        delta: String,
        respond_to: Response<i64>,
    },
    SetPrice {
        code: String,
        price: String,
        respond_to: Response<f64>,
    },
}

/// Owns the repository and serves requests until every handle is dropped.
pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    repository: InventoryRepository,
}

impl InventoryActor {
    pub fn new(buffer_size: usize, repository: InventoryRepository) -> (Self, InventoryHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            repository,
        };
        (actor, InventoryHandle::new(sender))
    }

    /// Runs the event loop. Returns the repository once the channel closes.
    pub async fn run(mut self) -> InventoryRepository {
        let path = self.repository.path().display().to_string();
        info!(%path, size = self.repository.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            size = self.repository.len(),
            persisted = self.repository.is_persisted(),
            "Shutdown"
        );
        self.repository
    }

    fn handle(&mut self, msg: InventoryRequest) {
        match msg {
            InventoryRequest::List { respond_to } => {
                let _ = respond_to.send(Ok(self.repository.list()));
            }
            InventoryRequest::Get { code, respond_to } => {
                let item = self.repository.get(&code).cloned();
                debug!(%code, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            InventoryRequest::Search {
                criterion,
                respond_to,
            } => {
                let _ = respond_to.send(Ok(self.repository.search(&criterion)));
            }
            InventoryRequest::Add {
                product,
                respond_to,
            } => {
                debug!(?product, "Add");
                let _ = respond_to.send(Ok(self.repository.add(product)));
            }
            InventoryRequest::Delete { code, respond_to } => {
                let result = self.repository.delete(&code);
                log_refusal(&code, &result);
                let _ = respond_to.send(result);
            }
            InventoryRequest::AdjustQuantity {
                code,
                delta,
                respond_to,
            } => {
                debug!(%code, %delta, "AdjustQuantity");
                let result = self.repository.adjust_quantity(&code, &delta);
                log_refusal(&code, &result);
                let _ = respond_to.send(result);
            }
            InventoryRequest::SetPrice {
                code,
                price,
                respond_to,
            } => {
                debug!(%code, %price, "SetPrice");
                let result = self.repository.set_price(&code, &price);
                log_refusal(&code, &result);
                let _ = respond_to.send(result);
            }
        }
    }
}

fn log_refusal<T>(code: &str, result: &Result<T, InventoryError>) {
    if let Err(e) = result {
        warn!(%code, error = %e, "Request refused");
    }
}

/// Generates one request method per [`InventoryRequest`] variant.
/// The method name is the variant name in snake case.
macro_rules! request_methods {
    ($($name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        paste::paste! {
            $(
                pub async fn $name(&self, $($arg: $ty),*) -> Result<$ret, InventoryError> {
                    self.request(|respond_to| InventoryRequest::[<$name:camel>] { $($arg,)* respond_to })
                        .await
                }
            )*
        }
    };
}

/// The sending half of the inventory actor's channel.
#[derive(Clone)]
pub struct InventoryHandle {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryHandle {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> InventoryRequest,
    ) -> Result<T, InventoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    request_methods! {
        list() -> Vec<ProductRecord>;
        get(code: String) -> Option<Product>;
        search(criterion: String) -> Vec<Product>;
        add(product: Product) -> Option<Product>;
        delete(code: String) -> Product;
        adjust_quantity(code: String, delta: String) -> i64;
        set_price(code: String, price: String) -> f64;
    }
}
