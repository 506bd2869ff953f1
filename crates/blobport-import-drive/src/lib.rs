//! Google Drive destination importer
//!
//! Recreates an exported folder hierarchy under a per-job "MigratedContent"
//! folder at the Drive root and streams document content into it, recording
//! folder id mappings in the job store so interrupted jobs can resume.

pub mod importer;

pub use importer::{
    DriveImporter, APP_NATIVE_MIME_PREFIX, FOLDER_MIME_TYPE, MIGRATED_CONTENT_FOLDER,
};
