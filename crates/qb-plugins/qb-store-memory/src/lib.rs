//! # qb-store-memory
//!
//! In-memory implementation of `Gateway`, one map per entity kind. The
//! reference adapter for tests, seeding, and anything that does not need
//! durable rows. `DashMap` gives per-entry isolation; cross-entity
//! consistency (e.g., cascading deletes) stays with the caller.

use async_trait::async_trait;
use dashmap::DashMap;
use qb_core::error::{AppError, Result};
use qb_core::id::EntityId;
use qb_core::models::Entity;
use qb_core::traits::Gateway;
use tracing::debug;

/// Keeps every row of one entity kind, keyed by identifier.
pub struct MemoryGateway<E: Entity> {
    rows: DashMap<EntityId, E>,
}

impl<E: Entity> MemoryGateway<E> {
    pub fn new() -> Self {
        MemoryGateway { rows: DashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E: Entity> Default for MemoryGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Gateway<E> for MemoryGateway<E> {
    /// Assigns a fresh identifier and stores the row. An entity that already
    /// carries an identifier is rejected before the map is touched.
    async fn insert(&self, entity: &mut E) -> Result<EntityId> {
        if let Some(id) = entity.id() {
            return Err(AppError::Conflict(format!(
                "{} already persisted with ID {id}",
                E::KIND
            )));
        }
        let id = EntityId::random();
        entity.assign_id(id);
        self.rows.insert(id, entity.clone());
        debug!(kind = E::KIND, %id, "inserted");
        Ok(id)
    }

    async fn update(&self, entity: &E) -> Result<()> {
        let id = entity.id().ok_or_else(|| {
            AppError::Validation(format!("{} has no identifier, nothing to update", E::KIND))
        })?;
        match self.rows.get_mut(&id) {
            Some(mut row) => {
                *row = entity.clone();
                debug!(kind = E::KIND, %id, "updated");
                Ok(())
            }
            None => Err(AppError::NotFound(E::KIND, id.to_string())),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        match self.rows.remove(&id) {
            Some(_) => {
                debug!(kind = E::KIND, %id, "deleted");
                Ok(())
            }
            None => Err(AppError::NotFound(E::KIND, id.to_string())),
        }
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }
}
