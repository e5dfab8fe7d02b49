use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::models::{NewProduct, Product, ProductPatch};
use super::{ProductStore, StoreError};

/// In-memory [`ProductStore`] with the same observable semantics as the
/// MongoDB implementation: ids are 24-hex ObjectId strings assigned at
/// insert, storage-native order is insertion order, name lookup returns the
/// first match. Used by the integration test suite so it runs without a
/// live database.
#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let product = Product {
            id: ObjectId::new().to_hex(),
            name: product.name,
            description: product.description,
            color: product.color,
            weight: product.weight,
            kind: product.kind,
            price: product.price,
            registered_at: product.registered_at,
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn apply_patch(&self, id: &str, patch: &ProductPatch) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        if let Some(name) = &patch.name {
            product.name = name.clone();
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(color) = &patch.color {
            product.color = color.clone();
        }
        if let Some(weight) = &patch.weight {
            product.weight = weight.clone();
        }
        if let Some(kind) = &patch.kind {
            product.kind = kind.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        Ok(true)
    }

    async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
