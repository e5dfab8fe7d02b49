use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Storage-assigned identifier, 24 hex characters. Never mutated.
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    /// Free-form weight text such as "20g".
    pub weight: String,
    /// Category of the product.
    pub kind: String,
    pub price: f64,
    /// Stamped once at creation; never client-supplied, never updated.
    pub registered_at: DateTime<Utc>,
}

/// A product about to be inserted: everything but the identifier, which the
/// store assigns.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub color: String,
    pub weight: String,
    pub kind: String,
    pub price: f64,
    pub registered_at: DateTime<Utc>,
}

/// A field-set update: only `Some` fields are written, everything else is
/// left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub weight: Option<String>,
    pub kind: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.weight.is_none()
            && self.kind.is_none()
            && self.price.is_none()
    }
}
