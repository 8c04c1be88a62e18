//! # Mock inventory
//!
//! A scripted stand-in for the [`InventoryActor`](crate::framework::InventoryActor),
//! for testing callers (clients, the request adapter) without a backing file.
//!
//! Queue expectations in the order requests will arrive, hand out the
//! handle, then call [`MockInventory::verify`] at the end of the test.
//!
//! ```ignore
//! let mut mock = MockInventory::new();
//! mock.expect_adjust_quantity("A1", "5").return_ok(15);
//! mock.expect_delete("B2").return_err(InventoryError::NotFound("B2".into()));
//!
//! let client = InventoryClient::new(mock.handle());
//! // ... exercise the code under test ...
//! mock.verify();
//! ```
//!
//! A request that does not match the next expectation panics the mock's task,
//! which the caller observes as a dropped reply.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use crate::framework::{InventoryHandle, InventoryRequest};
use crate::model::{Product, ProductRecord};
use crate::repository::InventoryError;

type Reply<T> = Result<T, InventoryError>;

enum Expectation {
    List(Reply<Vec<ProductRecord>>),
    Get { code: String, response: Reply<Option<Product>> },
    Search { criterion: String, response: Reply<Vec<Product>> },
    Add { code: String, response: Reply<Option<Product>> },
    Delete { code: String, response: Reply<Product> },
    AdjustQuantity { code: String, delta: String, response: Reply<i64> },
    SetPrice { code: String, price: String, response: Reply<f64> },
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

pub struct MockInventory {
    handle: InventoryHandle,
    expectations: Queue,
    _task: tokio::task::JoinHandle<()>,
}

impl Default for MockInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInventory {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<InventoryRequest>(100);
        let expectations: Queue = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                answer(request, next);
            }
        });

        Self {
            handle: InventoryHandle::new(sender),
            expectations,
            _task: task,
        }
    }

    pub fn handle(&self) -> InventoryHandle {
        self.handle.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<Vec<ProductRecord>> {
        self.builder(Box::new(Expectation::List))
    }

    pub fn expect_get(&mut self, code: &str) -> ExpectationBuilder<Option<Product>> {
        let code = code.to_string();
        self.builder(Box::new(move |response| Expectation::Get { code, response }))
    }

    pub fn expect_search(&mut self, criterion: &str) -> ExpectationBuilder<Vec<Product>> {
        let criterion = criterion.to_string();
        self.builder(Box::new(move |response| Expectation::Search { criterion, response }))
    }

    pub fn expect_add(&mut self, code: &str) -> ExpectationBuilder<Option<Product>> {
        let code = code.to_string();
        self.builder(Box::new(move |response| Expectation::Add { code, response }))
    }

    pub fn expect_delete(&mut self, code: &str) -> ExpectationBuilder<Product> {
        let code = code.to_string();
        self.builder(Box::new(move |response| Expectation::Delete { code, response }))
    }

    pub fn expect_adjust_quantity(&mut self, code: &str, delta: &str) -> ExpectationBuilder<i64> {
        let (code, delta) = (code.to_string(), delta.to_string());
        self.builder(Box::new(move |response| Expectation::AdjustQuantity {
            code,
            delta,
            response,
        }))
    }

    pub fn expect_set_price(&mut self, code: &str, price: &str) -> ExpectationBuilder<f64> {
        let (code, price) = (code.to_string(), price.to_string());
        self.builder(Box::new(move |response| Expectation::SetPrice {
            code,
            price,
            response,
        }))
    }

    fn builder<T>(&self, make: Box<dyn FnOnce(Reply<T>) -> Expectation + Send>) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            make,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T> {
    make: Box<dyn FnOnce(Reply<T>) -> Expectation + Send>,
    expectations: Queue,
}

impl<T> ExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: InventoryError) {
        self.push(Err(error));
    }

    fn push(self, response: Reply<T>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn answer(request: InventoryRequest, expectation: Option<Expectation>) {
    match (request, expectation) {
        (InventoryRequest::List { respond_to }, Some(Expectation::List(response))) => {
            let _ = respond_to.send(response);
        }
        (InventoryRequest::Get { code, respond_to }, Some(Expectation::Get { code: want, response })) => {
            assert_eq!(code, want, "get: unexpected code");
            let _ = respond_to.send(response);
        }
        (
            InventoryRequest::Search { criterion, respond_to },
            Some(Expectation::Search { criterion: want, response }),
        ) => {
            assert_eq!(criterion, want, "search: unexpected criterion");
            let _ = respond_to.send(response);
        }
        (InventoryRequest::Add { product, respond_to }, Some(Expectation::Add { code: want, response })) => {
            assert_eq!(product.code(), want, "add: unexpected code");
            let _ = respond_to.send(response);
        }
        (InventoryRequest::Delete { code, respond_to }, Some(Expectation::Delete { code: want, response })) => {
            assert_eq!(code, want, "delete: unexpected code");
            let _ = respond_to.send(response);
        }
        (
            InventoryRequest::AdjustQuantity { code, delta, respond_to },
            Some(Expectation::AdjustQuantity { code: want_code, delta: want_delta, response }),
        ) => {
            assert_eq!((code, delta), (want_code, want_delta), "adjust_quantity: unexpected arguments");
            let _ = respond_to.send(response);
        }
        (
            InventoryRequest::SetPrice { code, price, respond_to },
            Some(Expectation::SetPrice { code: want_code, price: want_price, response }),
        ) => {
            assert_eq!((code, price), (want_code, want_price), "set_price: unexpected arguments");
            let _ = respond_to.send(response);
        }
        (request, _) => panic!("Unexpected request or expectation mismatch: {:?}", request),
    }
}
