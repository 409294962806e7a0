//! # Core Traits (Ports)
//!
//! Any storage adapter must implement `Gateway` to be used by the binary.
//! Entities never embed SQL or any other storage detail; this trait is the
//! whole persistence boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::id::EntityId;
use crate::models::Entity;

/// Persistence contract for one entity kind.
///
/// Validation always happens before an adapter is called, so an adapter only
/// ever sees valid entities. Isolation between concurrent operations on the
/// same identifier is the adapter's responsibility.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Gateway<E: Entity>: Send + Sync {
    /// Persists a never-saved entity, assigns its identifier, and returns it.
    ///
    /// Fails with a conflict, before any write is attempted, if the entity
    /// already carries an identifier.
    async fn insert(&self, entity: &mut E) -> Result<EntityId>;

    /// Rewrites the stored row for an already-saved entity.
    ///
    /// Fails if the entity has no identifier yet, or if the row is gone.
    async fn update(&self, entity: &E) -> Result<()>;

    /// Removes the row with this identifier; fails if none exists.
    /// The caller discards its in-memory instance afterwards.
    async fn delete(&self, id: EntityId) -> Result<()>;

    /// Looks up one entity. A missing row is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>>;

    /// Boundary helper for identifiers arriving as text: parses first, so a
    /// malformed identifier fails validation before any lookup runs.
    async fn find_by_text(&self, text: &str) -> Result<Option<E>> {
        let id = EntityId::parse(text)?;
        self.find_by_id(id).await
    }
}
