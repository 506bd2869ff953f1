//! Drive importer implementation

use std::sync::Arc;

use async_trait::async_trait;
use blobport_import_types::{
    BlobImporter, ContainerResource, CredentialFactory, DocumentWrapper, FileMetadata,
    FolderMapping, ImportError, ImportOutcome, ImportResult, JobStore, StorageClient,
    TokensAndUrlAuthData, ROOT_ID,
};
use chrono::{DateTime, Utc};
use tokio::sync::OnceCell;
use tracing::{debug, info};
use uuid::Uuid;

/// Display name of the single top-level folder every job imports into
pub const MIGRATED_CONTENT_FOLDER: &str = "MigratedContent";

/// Mime namespace of Drive-native document formats
///
/// Only formats under this prefix are carried over explicitly; for anything
/// else the destination infers the type from content.
pub const APP_NATIVE_MIME_PREFIX: &str = "application/vnd.google-apps.";

/// Drive's folder type marker, applied by storage clients on `create_folder`
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Imports exported content trees into Google Drive
///
/// The storage client is built lazily from the credential factory on first
/// use and shared read-only afterward; one instance serves every call of a
/// job. Folder creation is idempotent per `(job, source_id)`: a recorded
/// mapping short-circuits to the existing destination folder, which is what
/// makes re-invocation after a partial failure safe.
pub struct DriveImporter {
    credential_factory: Arc<dyn CredentialFactory>,
    job_store: Arc<dyn JobStore>,
    // Don't touch directly, go through storage_client
    client: OnceCell<Arc<dyn StorageClient>>,
}

impl DriveImporter {
    /// Create a new Drive importer; the storage client is built on first use
    pub fn new(
        credential_factory: Arc<dyn CredentialFactory>,
        job_store: Arc<dyn JobStore>,
    ) -> Self {
        Self {
            credential_factory,
            job_store,
            client: OnceCell::new(),
        }
    }

    /// Create with an already-built storage client, bypassing lazy construction
    pub fn with_client(
        credential_factory: Arc<dyn CredentialFactory>,
        client: Arc<dyn StorageClient>,
        job_store: Arc<dyn JobStore>,
    ) -> Self {
        Self {
            credential_factory,
            job_store,
            client: OnceCell::new_with(Some(client)),
        }
    }

    /// Get the storage client, building it exactly once even under
    /// concurrent first use. A failed build leaves the cell empty so a
    /// later call can retry.
    async fn storage_client(
        &self,
        auth: &TokensAndUrlAuthData,
    ) -> ImportResult<Arc<dyn StorageClient>> {
        let client = self
            .client
            .get_or_try_init(|| self.credential_factory.make_client(auth))
            .await?;
        Ok(Arc::clone(client))
    }

    /// Create one destination folder (or reuse its recorded mapping) and
    /// return its destination id.
    async fn import_single_folder(
        &self,
        job_id: Uuid,
        client: &dyn StorageClient,
        folder_name: &str,
        source_id: &str,
        parent_id: Option<&str>,
        outcome: &mut ImportOutcome,
    ) -> ImportResult<String> {
        if let Some(mapping) = self.job_store.find_folder_mapping(job_id, source_id).await? {
            debug!(
                "Reusing destination folder {} for source id {}",
                mapping.destination_id, source_id
            );
            outcome.folders_reused += 1;
            return Ok(mapping.destination_id);
        }

        let destination_id = client.create_folder(folder_name, parent_id).await?;
        self.job_store
            .update_folder_mapping(
                job_id,
                source_id,
                FolderMapping::new(source_id, destination_id.as_str()),
            )
            .await?;
        outcome.folders_created += 1;

        debug!(
            "Created destination folder {} ({}) for source id {}",
            destination_id, folder_name, source_id
        );
        Ok(destination_id)
    }

    /// Upload one document under the resolved parent, streaming its cached
    /// content. The destination id is not recorded; files are never
    /// referenced by later nodes.
    async fn import_single_file(
        &self,
        job_id: Uuid,
        client: &dyn StorageClient,
        file: &DocumentWrapper,
        parent_id: &str,
    ) -> ImportResult<()> {
        let content = self
            .job_store
            .open_content(job_id, &file.cached_content_id)
            .await?;

        let document = &file.document;
        let mut metadata = FileMetadata::named(&document.name);
        if !parent_id.is_empty() {
            metadata.parents = vec![parent_id.to_string()];
        }
        if let Some(raw) = document.date_modified.as_deref().filter(|s| !s.is_empty()) {
            let parsed =
                DateTime::parse_from_rfc3339(raw).map_err(|e| ImportError::InvalidTimestamp {
                    value: raw.to_string(),
                    reason: e.to_string(),
                })?;
            metadata.modified_time = Some(parsed.with_timezone(&Utc));
        }
        if let Some(format) = document.original_encoding_format.as_deref() {
            if format.starts_with(APP_NATIVE_MIME_PREFIX) {
                metadata.mime_type = Some(format.to_string());
            }
        }

        client.create_file(&metadata, Some(content)).await?;
        Ok(())
    }
}

#[async_trait]
impl BlobImporter for DriveImporter {
    async fn import_item(
        &self,
        job_id: Uuid,
        auth: &TokensAndUrlAuthData,
        data: &ContainerResource,
    ) -> ImportResult<ImportOutcome> {
        let client = self.storage_client(auth).await?;
        let mut outcome = ImportOutcome::default();

        let parent_id = if data.is_root() {
            // First call of the job: everything lands under one top-level folder
            self.import_single_folder(
                job_id,
                client.as_ref(),
                MIGRATED_CONTENT_FOLDER,
                ROOT_ID,
                None,
                &mut outcome,
            )
            .await?
        } else {
            let mapping = self
                .job_store
                .find_folder_mapping(job_id, &data.id)
                .await?
                .ok_or_else(|| ImportError::MissingParentMapping(data.id.clone()))?;
            info!(
                "Resolved parent {} for source id {} named: {}",
                mapping.destination_id, data.id, data.name
            );
            mapping.destination_id
        };

        // Sub-folders first, so later calls for them find their mappings
        for folder in &data.folders {
            self.import_single_folder(
                job_id,
                client.as_ref(),
                &folder.name,
                &folder.id,
                Some(&parent_id),
                &mut outcome,
            )
            .await?;
        }

        for file in &data.files {
            self.import_single_file(job_id, client.as_ref(), file, &parent_id)
                .await?;
            outcome.files_imported += 1;
        }

        info!(
            "Imported node {} for job {}: {} folders created, {} reused, {} files",
            data.name, job_id, outcome.folders_created, outcome.folders_reused,
            outcome.files_imported
        );
        Ok(outcome)
    }
}
