//! Request validation against declarative operation contracts.
//!
//! Each operation's input shape is held as static data (see [`schemas`]) and
//! checked by a generic validator before any handler logic runs. Validation
//! produces either an accepted, type-coerced payload or a rejection naming
//! the violated constraint; handlers never observe an invalid payload.

pub mod schemas;

use serde_json::{Map, Value};
use thiserror::Error;

/// A constraint violation found while validating a payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("body must be a JSON object")]
    NotAnObject,
    #[error("missing required field '{0}'")]
    MissingField(String),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("field '{field}' must be a {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
    #[error("field '{field}' must be at least {min_length} character(s) long")]
    TooShort { field: String, min_length: usize },
    #[error("field '{field}' must be at least {minimum}")]
    BelowMinimum { field: String, minimum: f64 },
    #[error("at least {0} field(s) must be provided")]
    TooFewFields(usize),
    #[error("id '{0}' is not a 24 character hex identifier")]
    InvalidId(String),
    #[error("identifier must not be empty")]
    EmptyIdentifier,
}

/// Primitive type expected for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A JSON string.
    Text,
    /// A finite number; numeric strings are coerced into numbers in the
    /// accepted payload.
    Number,
    /// No type constraint. Used where the handler owns the coercion policy.
    Any,
}

/// Per-field constraints.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field_type: FieldType,
    pub min_length: Option<usize>,
    pub minimum: Option<f64>,
}

impl FieldRule {
    pub const fn text() -> Self {
        Self {
            field_type: FieldType::Text,
            min_length: None,
            minimum: None,
        }
    }

    pub const fn number() -> Self {
        Self {
            field_type: FieldType::Number,
            min_length: None,
            minimum: None,
        }
    }

    pub const fn any() -> Self {
        Self {
            field_type: FieldType::Any,
            min_length: None,
            minimum: None,
        }
    }

    pub const fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub const fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

/// Declarative shape of one operation's request body.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub required: Vec<&'static str>,
    pub properties: Vec<(&'static str, FieldRule)>,
    pub additional_properties: bool,
    pub min_properties: usize,
}

/// Validate `payload` against `schema`, returning the accepted (and
/// type-coerced) field map on success.
pub fn validate(
    schema: &ObjectSchema,
    payload: &Value,
) -> Result<Map<String, Value>, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    if !schema.additional_properties {
        for key in object.keys() {
            if !schema.properties.iter().any(|(name, _)| *name == key.as_str()) {
                return Err(ValidationError::UnknownField(key.clone()));
            }
        }
    }

    for field in &schema.required {
        if !object.contains_key(*field) {
            return Err(ValidationError::MissingField((*field).to_string()));
        }
    }

    if object.len() < schema.min_properties {
        return Err(ValidationError::TooFewFields(schema.min_properties));
    }

    let mut accepted = Map::new();
    for (name, rule) in &schema.properties {
        let Some(value) = object.get(*name) else {
            continue;
        };
        accepted.insert((*name).to_string(), check_field(name, rule, value)?);
    }

    Ok(accepted)
}

fn check_field(name: &str, rule: &FieldRule, value: &Value) -> Result<Value, ValidationError> {
    match rule.field_type {
        FieldType::Text => {
            let text = value.as_str().ok_or_else(|| ValidationError::WrongType {
                field: name.to_string(),
                expected: "string",
            })?;
            if let Some(min_length) = rule.min_length {
                if text.len() < min_length {
                    return Err(ValidationError::TooShort {
                        field: name.to_string(),
                        min_length,
                    });
                }
            }
            Ok(value.clone())
        }
        FieldType::Number => {
            let number = coerce_number(value).ok_or_else(|| ValidationError::WrongType {
                field: name.to_string(),
                expected: "number",
            })?;
            if let Some(minimum) = rule.minimum {
                if number < minimum {
                    return Err(ValidationError::BelowMinimum {
                        field: name.to_string(),
                        minimum,
                    });
                }
            }
            serde_json::Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| ValidationError::WrongType {
                    field: name.to_string(),
                    expected: "number",
                })
        }
        FieldType::Any => {
            // A minimum still applies when the client did send a number.
            if let (Some(minimum), Some(number)) = (rule.minimum, value.as_f64()) {
                if number < minimum {
                    return Err(ValidationError::BelowMinimum {
                        field: name.to_string(),
                        minimum,
                    });
                }
            }
            Ok(value.clone())
        }
    }
}

/// Coerce a JSON value into a finite number: native numbers pass through,
/// numeric strings are parsed.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Whether `value` matches the storage collaborator's identifier format:
/// exactly 24 hex characters.
pub fn is_object_id(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// The `:id` path parameter must be a well-formed storage identifier.
pub fn validate_id_param(id: &str) -> Result<(), ValidationError> {
    if is_object_id(id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidId(id.to_string()))
    }
}

/// The `:identifier` path parameter may be an id or a name; any non-empty
/// string qualifies.
pub fn validate_identifier_param(identifier: &str) -> Result<(), ValidationError> {
    if identifier.is_empty() {
        Err(ValidationError::EmptyIdentifier)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_accepts_complete_payload() {
        let payload = json!({
            "name": "Mug",
            "description": "Ceramic mug",
            "color": "blue",
            "weight": "300g",
            "kind": "kitchen",
            "price": 12.5,
        });

        let accepted = validate(&schemas::CREATE_PRODUCT, &payload).expect("valid");
        assert_eq!(accepted.len(), 6);
        assert_eq!(accepted["price"], json!(12.5));
    }

    #[test]
    fn create_coerces_numeric_string_price() {
        let payload = json!({
            "name": "Mug",
            "description": "",
            "color": "blue",
            "weight": "300g",
            "kind": "kitchen",
            "price": "12.5",
        });

        let accepted = validate(&schemas::CREATE_PRODUCT, &payload).expect("valid");
        assert_eq!(accepted["price"], json!(12.5));
    }

    #[test]
    fn create_rejects_missing_field() {
        let payload = json!({
            "name": "Mug",
            "description": "",
            "color": "blue",
            "weight": "300g",
            "kind": "kitchen",
        });

        assert_eq!(
            validate(&schemas::CREATE_PRODUCT, &payload),
            Err(ValidationError::MissingField("price".into()))
        );
    }

    #[test]
    fn create_rejects_unknown_field() {
        let payload = json!({
            "name": "Mug",
            "description": "",
            "color": "blue",
            "weight": "300g",
            "kind": "kitchen",
            "price": 1,
            "stock": 5,
        });

        assert_eq!(
            validate(&schemas::CREATE_PRODUCT, &payload),
            Err(ValidationError::UnknownField("stock".into()))
        );
    }

    #[test]
    fn create_rejects_negative_price() {
        let payload = json!({
            "name": "Mug",
            "description": "",
            "color": "blue",
            "weight": "300g",
            "kind": "kitchen",
            "price": -1,
        });

        assert!(matches!(
            validate(&schemas::CREATE_PRODUCT, &payload),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn create_rejects_empty_name() {
        let payload = json!({
            "name": "",
            "description": "",
            "color": "blue",
            "weight": "300g",
            "kind": "kitchen",
            "price": 1,
        });

        assert!(matches!(
            validate(&schemas::CREATE_PRODUCT, &payload),
            Err(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn update_requires_at_least_one_field() {
        assert_eq!(
            validate(&schemas::UPDATE_PRODUCT, &json!({})),
            Err(ValidationError::TooFewFields(1))
        );
    }

    #[test]
    fn update_lets_unparseable_price_through_for_the_handler() {
        let accepted =
            validate(&schemas::UPDATE_PRODUCT, &json!({ "price": "not-a-number" })).expect("valid");
        assert_eq!(accepted["price"], json!("not-a-number"));
    }

    #[test]
    fn update_rejects_negative_numeric_price() {
        assert!(matches!(
            validate(&schemas::UPDATE_PRODUCT, &json!({ "price": -3 })),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn rejects_non_object_body() {
        assert_eq!(
            validate(&schemas::UPDATE_PRODUCT, &json!([1, 2, 3])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn coerces_numbers() {
        assert_eq!(coerce_number(&json!(3)), Some(3.0));
        assert_eq!(coerce_number(&json!("3.25")), Some(3.25));
        assert_eq!(coerce_number(&json!(" 10 ")), Some(10.0));
        assert_eq!(coerce_number(&json!("not-a-number")), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!(null)), None);
    }

    #[test]
    fn recognizes_object_id_format() {
        assert!(is_object_id("507f1f77bcf86cd799439011"));
        assert!(is_object_id("507F1F77BCF86CD799439011"));
        assert!(!is_object_id("507f1f77bcf86cd79943901")); // 23 chars
        assert!(!is_object_id("507f1f77bcf86cd7994390111")); // 25 chars
        assert!(!is_object_id("507f1f77bcf86cd79943901z"));
        assert!(!is_object_id("Widget"));
    }
}
