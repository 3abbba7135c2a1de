//! Entity persistence: one trait, a PostgreSQL implementation and an in-process one.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, PgStore};

use crate::entity::{Entity, EntityId};
use crate::error::AppError;
use async_trait::async_trait;

/// Create/read/update/delete for one entity type. Errors other than "no such row"
/// come back as [`AppError::StoreUnavailable`].
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Persist a new row and return it as stored.
    async fn insert(&self, entity: &E) -> Result<E, AppError>;

    async fn fetch(&self, id: EntityId) -> Result<Option<E>, AppError>;

    /// Every row, in store scan order.
    async fn fetch_all(&self) -> Result<Vec<E>, AppError>;

    /// Replace the row with the same id. `None` when no row matched.
    async fn replace(&self, entity: &E) -> Result<Option<E>, AppError>;

    /// Delete by id. `false` when no row matched.
    async fn remove(&self, id: EntityId) -> Result<bool, AppError>;
}
