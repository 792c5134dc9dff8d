#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::{ready, Future};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use atelier_client::{CatalogSource, ClientError};
use atelier_core::Product;
use atelier_store::{KeyValueStore, MemoryStore, StorageError};

pub fn product(id: &str, art_name: &str, brand: &str) -> Product {
    Product {
        id: id.to_string(),
        art_name: art_name.to_string(),
        brand: brand.to_string(),
        price: 10.0,
        ..Product::default()
    }
}

pub fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

fn service_unavailable() -> ClientError {
    ClientError::UnexpectedStatus {
        status: 503,
        url: "http://catalog.test/tool".to_string(),
    }
}

/// In-process catalog with scriptable latency and failures.
///
/// Scripted collection responses are consumed in order; once the script is
/// empty, `fetch_all` returns the current catalog immediately.
#[derive(Default)]
pub struct FakeCatalog {
    products: Mutex<Vec<Product>>,
    script: Mutex<VecDeque<(Duration, Option<Vec<Product>>)>>,
    fail_one: AtomicBool,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.lock().unwrap() = products;
    }

    /// Queues one `fetch_all` response. `None` fails with a 503.
    pub fn push_response(&self, delay: Duration, response: Option<Vec<Product>>) {
        self.script.lock().unwrap().push_back((delay, response));
    }

    pub fn fail_fetch_one(&self, failing: bool) {
        self.fail_one.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for FakeCatalog {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.script.lock().unwrap().pop_front();
        let (delay, response) = match scripted {
            Some(entry) => entry,
            None => (Duration::ZERO, Some(self.products.lock().unwrap().clone())),
        };
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            response.ok_or_else(service_unavailable)
        }
    }

    fn fetch_one(&self, id: &str) -> impl Future<Output = Result<Product, ClientError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.fail_one.load(Ordering::SeqCst) {
            Err(service_unavailable())
        } else {
            self.products
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound { id: id.to_string() })
        };
        ready(result)
    }
}

/// Memory-backed store whose reads or writes can be switched to fail.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

fn injected(op: &str) -> StorageError {
    StorageError::Backend(format!("injected {op} failure"))
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send {
        let pending = if self.fail_reads.load(Ordering::SeqCst) {
            Err(injected("read"))
        } else {
            Ok(self.inner.get(key))
        };
        async move { pending?.await }
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>> + Send {
        let pending = if self.fail_writes.load(Ordering::SeqCst) {
            Err(injected("write"))
        } else {
            Ok(self.inner.set(key, value))
        };
        async move { pending?.await }
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send {
        let pending = if self.fail_writes.load(Ordering::SeqCst) {
            Err(injected("remove"))
        } else {
            Ok(self.inner.remove(key))
        };
        async move { pending?.await }
    }
}
