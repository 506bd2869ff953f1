//! Job store collaborator contract
//!
//! The job store durably records per-job state written during an import and
//! serves the content blobs the export stage cached. Persistence format and
//! consistency are entirely the store's concern; importers treat it as
//! external keyed state.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use uuid::Uuid;

use crate::{error::ImportResult, mapping::FolderMapping};

/// Readable byte stream for one cached content blob
///
/// Length is not known in advance; uploads consume the stream without
/// buffering. Dropping the stream releases the underlying handle.
pub type ContentStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

/// Durable per-job keyed storage consumed by importers
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Look up the folder mapping recorded for `(job_id, source_id)`.
    ///
    /// Returns `Ok(None)` when no mapping has been written yet. Whether that
    /// is fatal depends on the caller: parent resolution requires a mapping,
    /// folder creation uses absence to decide it must create.
    async fn find_folder_mapping(
        &self,
        job_id: Uuid,
        source_id: &str,
    ) -> ImportResult<Option<FolderMapping>>;

    /// Record the folder mapping for `(job_id, source_id)`.
    ///
    /// Mappings are written exactly once per materialized folder and never
    /// mutated afterward.
    async fn update_folder_mapping(
        &self,
        job_id: Uuid,
        source_id: &str,
        mapping: FolderMapping,
    ) -> ImportResult<()>;

    /// Open the cached content blob recorded under `cached_content_id`.
    ///
    /// The returned stream must stay readable for the lifetime of the upload
    /// call that consumes it.
    async fn open_content(
        &self,
        job_id: Uuid,
        cached_content_id: &str,
    ) -> ImportResult<ContentStream>;
}
