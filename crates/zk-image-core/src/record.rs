// crates/zk-image-core/src/record.rs - Image metadata rows

use serde::{Deserialize, Serialize};

use crate::id::ImageId;

/// One row of the `images` table
///
/// `created_at` is whatever SQLite's `CURRENT_TIMESTAMP` default produced
/// ("YYYY-MM-DD HH:MM:SS", UTC) and is passed through untouched. Every column
/// but `id` is nullable in the schema, so rows written by other tools may
/// carry NULLs; those serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: String,
    pub description: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

/// Metadata for a row about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub id: ImageId,
    pub description: String,
    pub source: Option<String>,
}
