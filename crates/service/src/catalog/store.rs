use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::file::product_db::{Product, ProductInput};

/// Trait abstraction for product catalog storage (CRUD plus full listing).
/// Implementations can be file-backed, database-backed, or in-memory.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Snapshot copy of the whole catalog, keyed by id.
    async fn all(&self) -> HashMap<String, Product>;
    async fn get(&self, id: &str) -> Result<Product, StoreError>;
    async fn add(&self, input: ProductInput) -> Result<Product, StoreError>;
    async fn edit(&self, id: &str, input: ProductInput) -> Result<Product, StoreError>;
    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}
