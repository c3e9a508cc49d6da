use std::{collections::HashMap, path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::CatalogStore;
use crate::errors::StoreError;
use crate::storage::json_doc_store::JsonDocStore;

/// A catalog entry. The id is issued by the store and immutable afterwards;
/// the name is caller-supplied and may be any string, including empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Input model for create/update: carries no id, the store owns id assignment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
}

/// Persisted document: the product map and the id counter as one JSON object.
/// Wire names (`Products`, `Counter`, `ID`, `Name`) must round-trip exactly,
/// and every map key equals the `ID` of the product stored under it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
struct CatalogState {
    #[serde(rename = "Products")]
    products: HashMap<String, Product>,
    #[serde(rename = "Counter")]
    counter: u64,
}

impl CatalogState {
    fn seeded() -> Self {
        let products = [("1", "Apple"), ("2", "Banana"), ("3", "Cherry")]
            .into_iter()
            .map(|(id, name)| {
                (id.to_string(), Product { id: id.to_string(), name: name.to_string() })
            })
            .collect();
        Self { products, counter: 3 }
    }

    /// Issue a fresh id. The counter only ever counts up, so ids are never
    /// reused, even after removals.
    fn next_id(&mut self) -> String {
        self.counter += 1;
        self.counter.to_string()
    }
}

/// File-backed product store.
///
/// One `RwLock` guards the map and the counter as a unit. Every mutating call
/// holds the exclusive lock across both the in-memory change and the disk
/// write, so a successful return means the state is durable. A failed disk
/// write leaves the in-memory change in place; the file catches up on the
/// next successful mutation.
pub struct ProductDb {
    inner: RwLock<CatalogState>,
    disk: JsonDocStore,
}

impl ProductDb {
    /// Open the store at `path`. A missing file yields the three seed records
    /// and counter 3; the file itself is first written by the first mutation.
    /// An existing file that cannot be read or parsed is a persistence error.
    pub async fn load<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let disk = JsonDocStore::new(path);
        let state = match disk.load::<CatalogState>().await? {
            Some(state) => state,
            None => {
                info!(path = %disk.path().display(), "no catalog file, seeding defaults");
                CatalogState::seeded()
            }
        };
        Ok(Arc::new(Self { inner: RwLock::new(state), disk }))
    }

    /// Snapshot copy of the whole catalog; later mutations never touch it.
    pub async fn all(&self) -> HashMap<String, Product> {
        self.inner.read().await.products.clone()
    }

    /// Get a product by id.
    pub async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let state = self.inner.read().await;
        state.products.get(id).cloned().ok_or_else(|| StoreError::not_found("product"))
    }

    /// Insert under a freshly issued id and persist.
    pub async fn add(&self, input: ProductInput) -> Result<Product, StoreError> {
        let mut state = self.inner.write().await;
        let id = state.next_id();
        let product = Product { id: id.clone(), name: input.name };
        state.products.insert(id, product.clone());
        self.disk.save(&*state).await?;
        Ok(product)
    }

    /// Overwrite the product at `id` and persist. The existence check happens
    /// under the same exclusive lock as the mutation, so a concurrent remove
    /// cannot slip between check and write.
    pub async fn edit(&self, id: &str, input: ProductInput) -> Result<Product, StoreError> {
        let mut state = self.inner.write().await;
        if !state.products.contains_key(id) {
            return Err(StoreError::not_found("product"));
        }
        let product = Product { id: id.to_string(), name: input.name };
        state.products.insert(id.to_string(), product.clone());
        self.disk.save(&*state).await?;
        Ok(product)
    }

    /// Delete the product at `id` and persist. An absent id fails without
    /// touching the file.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.inner.write().await;
        if state.products.remove(id).is_none() {
            return Err(StoreError::not_found("product"));
        }
        self.disk.save(&*state).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for ProductDb {
    async fn all(&self) -> HashMap<String, Product> { self.all().await }
    async fn get(&self, id: &str) -> Result<Product, StoreError> { self.get(id).await }
    async fn add(&self, input: ProductInput) -> Result<Product, StoreError> { self.add(input).await }
    async fn edit(&self, id: &str, input: ProductInput) -> Result<Product, StoreError> { self.edit(id, input).await }
    async fn remove(&self, id: &str) -> Result<(), StoreError> { self.remove(id).await }
}
