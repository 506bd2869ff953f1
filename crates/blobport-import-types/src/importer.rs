//! Blob importer trait
//!
//! Defines the orchestration entry point all destination implementations
//! provide. One call imports one tree node: the node's own folder is resolved
//! (or created, for the root), its direct sub-folders are created and mapped,
//! then its documents are uploaded. Deeper levels arrive in later calls for
//! the same job.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    auth::TokensAndUrlAuthData, error::ImportResult, resource::ContainerResource,
};

/// Accounting for one completed `import_item` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportOutcome {
    /// Folders newly created at the destination
    pub folders_created: u64,
    /// Folders resolved through an already-recorded mapping instead of
    /// being recreated (retried calls land here)
    pub folders_reused: u64,
    /// Documents uploaded
    pub files_imported: u64,
}

/// Destination importer for exported content trees
///
/// Implementations must guarantee parent-before-child ordering: every folder
/// listed under the given resource is created and mapped before any document
/// of the same resource is uploaded. No ordering holds across separate calls
/// beyond that invariant.
#[async_trait]
pub trait BlobImporter: Send + Sync {
    /// Import one tree node into the destination under the job's hierarchy.
    ///
    /// Fails on the first error without rolling back siblings already
    /// imported (at-least-once semantics); callers rely on recorded folder
    /// mappings to resume.
    async fn import_item(
        &self,
        job_id: Uuid,
        auth: &TokensAndUrlAuthData,
        data: &ContainerResource,
    ) -> ImportResult<ImportOutcome>;
}
