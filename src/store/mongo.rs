use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection, Database};
use serde::Deserialize;
use tracing::info;

use super::models::{NewProduct, Product, ProductPatch};
use super::{ProductStore, StoreError};

const COLLECTION_NAME: &str = "products";

/// Wire shape of a product document in MongoDB. `_id` is the ObjectId the
/// server assigned at insert.
#[derive(Debug, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    description: String,
    color: String,
    weight: String,
    kind: String,
    price: f64,
    #[serde(rename = "registeredAt")]
    registered_at: bson::DateTime,
}

impl From<ProductDocument> for Product {
    fn from(document: ProductDocument) -> Self {
        Product {
            id: document.id.to_hex(),
            name: document.name,
            description: document.description,
            color: document.color,
            weight: document.weight,
            kind: document.kind,
            price: document.price,
            registered_at: document.registered_at.to_chrono(),
        }
    }
}

/// MongoDB-backed [`ProductStore`]. One client and one collection handle,
/// created at startup and cloned cheaply per request.
pub struct MongoProductStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoProductStore {
    /// Connect and verify the deployment responds before serving requests.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database_name);
        database.run_command(doc! { "ping": 1 }, None).await?;
        info!(database = database_name, "MongoDB connected");

        let collection = database.collection::<Document>(COLLECTION_NAME);
        Ok(Self {
            database,
            collection,
        })
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
    }

    fn decode(document: Document) -> Result<Product, StoreError> {
        bson::from_document::<ProductDocument>(document)
            .map(Product::from)
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }
}

/// Build the `$set` document for a field-set update. Only supplied fields
/// are named; MongoDB leaves the rest untouched.
fn patch_to_set(patch: &ProductPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name);
    }
    if let Some(description) = &patch.description {
        set.insert("description", description);
    }
    if let Some(color) = &patch.color {
        set.insert("color", color);
    }
    if let Some(weight) = &patch.weight {
        set.insert("weight", weight);
    }
    if let Some(kind) = &patch.kind {
        set.insert("kind", kind);
    }
    if let Some(price) = patch.price {
        set.insert("price", price);
    }
    set
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let document = doc! {
            "name": &product.name,
            "description": &product.description,
            "color": &product.color,
            "weight": &product.weight,
            "kind": &product.kind,
            "price": product.price,
            "registeredAt": bson::DateTime::from_chrono(product.registered_at),
        };

        let result = self.collection.insert_one(document, None).await?;
        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => {
                return Err(StoreError::Malformed(format!(
                    "unexpected inserted id: {}",
                    other
                )))
            }
        };

        Ok(Product {
            id,
            name: product.name,
            description: product.description,
            color: product.color,
            weight: product.weight,
            kind: product.kind,
            price: product.price,
            registered_at: product.registered_at,
        })
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let mut cursor = self.collection.find(doc! {}, None).await?;
        let mut products = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            products.push(Self::decode(document)?);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let oid = Self::parse_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }, None).await?;
        document.map(Self::decode).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        let document = self
            .collection
            .find_one(doc! { "name": name }, None)
            .await?;
        document.map(Self::decode).transpose()
    }

    async fn apply_patch(&self, id: &str, patch: &ProductPatch) -> Result<bool, StoreError> {
        let oid = Self::parse_id(id)?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": patch_to_set(patch) }, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let oid = Self::parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
