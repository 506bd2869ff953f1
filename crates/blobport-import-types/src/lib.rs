//! Core types and traits for the Blobport import system
//!
//! This crate provides the foundational abstractions for importing a
//! previously-exported hierarchical content tree (folders and documents) into
//! a destination cloud storage system.
//!
//! # Architecture
//!
//! - **Traits**: `BlobImporter` is the orchestration entry point; `JobStore`,
//!   `StorageClient` and `CredentialFactory` are the external collaborators an
//!   importer consumes
//! - **Types**: The exported tree (`ContainerResource`, `DocumentWrapper`,
//!   `DigitalDocument`) and the durable `FolderMapping` record
//! - **Errors**: Unified error handling across all importers
//!
//! # Usage
//!
//! Importer implementations (e.g., `blobport-import-drive`) depend on this
//! crate and implement the `BlobImporter` trait.

pub mod auth;
pub mod client;
pub mod error;
pub mod importer;
pub mod mapping;
pub mod resource;
pub mod store;

pub use auth::TokensAndUrlAuthData;
pub use client::{CredentialFactory, FileMetadata, StorageClient};
pub use error::{ImportError, ImportResult};
pub use importer::{BlobImporter, ImportOutcome};
pub use mapping::FolderMapping;
pub use resource::{ContainerResource, DigitalDocument, DocumentWrapper, ROOT_ID};
pub use store::{ContentStream, JobStore};
