//! # Persistence Collaborators
//!
//! The analysis pipeline depends on three narrow interfaces owned by the
//! surrounding application: the category catalog it reads to ground the
//! model's category suggestion, and the tag/bookmark stores it writes
//! suggested tags through. They are injected trait objects rather than
//! process-wide singletons so tests can substitute in-memory fakes.

use crate::types::Category;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from the persistence collaborators.
///
/// Implementations map their backend-specific failures into these variants so
/// the pipeline can react uniformly (notably: a `Duplicate` tag link is
/// swallowed by the merge policy).
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("The requested record was not found: {0}")]
    NotFound(String),
    #[error("The record already exists: {0}")]
    Duplicate(String),
    #[error("An unexpected storage error occurred: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Read-only access to the full category catalog.
#[async_trait]
pub trait CategoryCatalog: Send + Sync {
    /// Returns every category in its stored order.
    async fn list_all(&self) -> Result<Vec<Category>, CatalogError>;
}

/// Tag upsert by exact, case-sensitive name match.
#[async_trait]
pub trait TagCatalog: Send + Sync {
    /// Returns the id of the tag with this exact name, creating it if absent.
    /// Idempotent: repeated calls with the same name return the same id.
    async fn find_or_create(&self, name: &str) -> Result<i64, CatalogError>;
}

/// The bookmark side of tag linking.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Links a tag to a bookmark. Fails with [`CatalogError::Duplicate`]
    /// when the link already exists.
    async fn attach_tag(&self, bookmark_id: i64, tag_id: i64) -> Result<(), CatalogError>;
}
