use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    /// HTTP reason phrase, e.g. `Not Found`.
    pub error: String,
    pub message: String,
    /// Per-field validation messages, omitted when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}
