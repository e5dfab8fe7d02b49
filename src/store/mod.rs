//! Storage access for the products collection.
//!
//! Handlers depend on the [`ProductStore`] trait; the composition root picks
//! the implementation and injects it, so nothing here is ambient or global.
//! Every operation maps to exactly one atomic storage primitive and returns
//! an explicit `Result` — not-found is data (`Option`/`bool`), not an error.

pub mod memory;
pub mod models;
pub mod mongo;

pub use memory::MemoryProductStore;
pub use models::{NewProduct, Product, ProductPatch};
pub use mongo::MongoProductStore;

use async_trait::async_trait;
use thiserror::Error;

/// Faults from the storage collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid product id: {0}")]
    InvalidId(String),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Collection-scoped operations over products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product; the store assigns the identifier.
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// All products, in storage-native order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Lookup by id (24-hex string).
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Lookup by exact, case-sensitive name. Duplicate names are allowed;
    /// the first match in storage order wins.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError>;

    /// Apply a field-set update to the product with the given id, leaving
    /// unnamed fields untouched. Returns whether a document matched.
    async fn apply_patch(&self, id: &str, patch: &ProductPatch) -> Result<bool, StoreError>;

    /// Delete the product with the given id. Returns whether a document
    /// was deleted.
    async fn remove(&self, id: &str) -> Result<bool, StoreError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
