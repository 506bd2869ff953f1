//! Durable source-to-destination identifier mapping

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Association between a source-side and a destination-side folder id
///
/// One record exists per `(job, source_id)` pair, written when the folder is
/// first materialized at the destination and read whenever a later node
/// references that folder as its parent. The job store owns persistence;
/// this is the opaque value it stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FolderMapping {
    /// Folder id in the source system
    pub source_id: String,
    /// Folder id assigned by the destination system
    pub destination_id: String,
}

impl FolderMapping {
    pub fn new(source_id: impl Into<String>, destination_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            destination_id: destination_id.into(),
        }
    }
}
