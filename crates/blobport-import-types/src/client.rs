//! Storage client collaborator contract
//!
//! The destination-system API surface importers create folders and files
//! through. Implementations own the wire protocol, transport retries and
//! session handling; importers only see the create primitives. Any failure
//! is surfaced unmodified as `ImportError::Storage`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{auth::TokensAndUrlAuthData, error::ImportResult, store::ContentStream};

/// Metadata attached to a destination file on creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileMetadata {
    /// Display name at the destination
    pub name: String,
    /// Destination ids of the containing folders; empty means destination root
    pub parents: Vec<String>,
    /// Modification time to record, when the source supplied one
    pub modified_time: Option<DateTime<Utc>>,
    /// Explicit mime type; `None` lets the destination infer from content
    pub mime_type: Option<String>,
}

impl FileMetadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Destination-system create primitives
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Create a folder named `name` under `parent_id` (destination root when
    /// `None`), returning the destination id assigned to it.
    ///
    /// Implementations apply the destination's folder type marker.
    async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> ImportResult<String>;

    /// Create a file with the given metadata, streaming `content` as its
    /// body when present, returning the destination id assigned to it.
    async fn create_file(
        &self,
        metadata: &FileMetadata,
        content: Option<ContentStream>,
    ) -> ImportResult<String>;
}

/// Builds authenticated storage clients from auth data
#[async_trait]
pub trait CredentialFactory: Send + Sync {
    /// Produce a storage client authenticated with `auth`.
    async fn make_client(
        &self,
        auth: &TokensAndUrlAuthData,
    ) -> ImportResult<Arc<dyn StorageClient>>;
}
