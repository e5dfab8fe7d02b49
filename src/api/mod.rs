//! Shared wire shapes for the HTTP surface.

pub mod docs;

use serde::Serialize;
use utoipa::ToSchema;

/// Error body shape shared by every failing response: `{ "error": "..." }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Confirmation body returned by successful deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}
