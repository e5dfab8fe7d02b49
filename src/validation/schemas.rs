//! Static operation contracts for the product resource.

use once_cell::sync::Lazy;

use super::{FieldRule, ObjectSchema};

/// Contract for `POST /products/newproduct` bodies: all six business fields
/// required, no unknown fields.
pub static CREATE_PRODUCT: Lazy<ObjectSchema> = Lazy::new(|| ObjectSchema {
    required: vec!["name", "description", "color", "weight", "kind", "price"],
    properties: vec![
        ("name", FieldRule::text().min_length(1)),
        ("description", FieldRule::text()),
        ("color", FieldRule::text()),
        ("weight", FieldRule::text()),
        ("kind", FieldRule::text()),
        ("price", FieldRule::number().minimum(0.0)),
    ],
    additional_properties: false,
    min_properties: 0,
});

/// Contract for `PUT /products/:id` bodies: every field optional, at least
/// one must be present, no unknown fields. `price` carries no type
/// constraint here; the update handler owns the coerce-or-drop policy for
/// it, though a plainly numeric price must still be non-negative.
pub static UPDATE_PRODUCT: Lazy<ObjectSchema> = Lazy::new(|| ObjectSchema {
    required: vec![],
    properties: vec![
        ("name", FieldRule::text().min_length(1)),
        ("description", FieldRule::text()),
        ("color", FieldRule::text()),
        ("weight", FieldRule::text()),
        ("kind", FieldRule::text()),
        ("price", FieldRule::any().minimum(0.0)),
    ],
    additional_properties: false,
    min_properties: 1,
});
