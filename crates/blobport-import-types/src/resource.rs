//! Exported content tree types
//!
//! Represents one node of the source tree produced by the export stage: a
//! folder, its direct sub-folders, and the documents stored directly in it.
//! Sub-trees below the direct children arrive in later orchestration calls
//! for the same job.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentinel id marking the root of the exported tree
pub const ROOT_ID: &str = "root";

/// A node in the source content tree: one folder and its direct children
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerResource {
    /// Source-side identifier; empty or `root` for the tree root
    #[serde(default)]
    pub id: String,
    /// Display name of the folder
    pub name: String,
    /// Direct sub-folders, in input order
    #[serde(default)]
    pub folders: Vec<ContainerResource>,
    /// Documents stored directly in this folder, in input order
    #[serde(default)]
    pub files: Vec<DocumentWrapper>,
}

impl ContainerResource {
    /// Whether this node is the tree root (empty id or the `root` sentinel).
    ///
    /// The root has no prior mapping; it maps to a single "MigratedContent"
    /// folder created at the destination root, at most once per job.
    pub fn is_root(&self) -> bool {
        self.id.is_empty() || self.id == ROOT_ID
    }
}

/// A file to upload: cached content reference plus document metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentWrapper {
    /// Content-addressable handle resolvable through the job store
    pub cached_content_id: String,
    /// Document metadata payload
    pub document: DigitalDocument,
}

/// Metadata payload of a single exported document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DigitalDocument {
    /// Display name of the file
    pub name: String,
    /// Modification time as RFC 3339 text, if the source recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    /// Mime type the document had in its source system, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_encoding_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_is_root() {
        let resource = ContainerResource {
            id: String::new(),
            name: "My Content".to_string(),
            folders: vec![],
            files: vec![],
        };
        assert!(resource.is_root());
    }

    #[test]
    fn test_root_sentinel_is_root() {
        let resource = ContainerResource {
            id: ROOT_ID.to_string(),
            name: "My Content".to_string(),
            folders: vec![],
            files: vec![],
        };
        assert!(resource.is_root());
    }

    #[test]
    fn test_regular_id_is_not_root() {
        let resource = ContainerResource {
            id: "f1".to_string(),
            name: "Trip".to_string(),
            folders: vec![],
            files: vec![],
        };
        assert!(!resource.is_root());
    }

    #[test]
    fn test_deserializes_exported_tree_with_missing_lists() {
        // The export stage omits empty child lists entirely
        let resource: ContainerResource =
            serde_json::from_str(r#"{"id":"root","name":"My Content"}"#).unwrap();
        assert!(resource.folders.is_empty());
        assert!(resource.files.is_empty());
    }

    #[test]
    fn test_deserializes_camel_case_document_fields() {
        let wrapper: DocumentWrapper = serde_json::from_str(
            r#"{
                "cachedContentId": "blob-1",
                "document": {
                    "name": "a.txt",
                    "dateModified": "2023-01-01T00:00:00Z",
                    "originalEncodingFormat": "text/plain"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(wrapper.cached_content_id, "blob-1");
        assert_eq!(
            wrapper.document.date_modified.as_deref(),
            Some("2023-01-01T00:00:00Z")
        );
        assert_eq!(
            wrapper.document.original_encoding_format.as_deref(),
            Some("text/plain")
        );
    }
}
