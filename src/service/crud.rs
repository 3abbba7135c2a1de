//! Generic CRUD orchestration: identify, validate, then hand off to the store.

use crate::entity::{new_id, Entity, EntityId};
use crate::error::AppError;
use crate::store::EntityStore;
use std::sync::Arc;

pub struct CrudService<E: Entity> {
    store: Arc<dyn EntityStore<E>>,
}

impl<E: Entity> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        CrudService {
            store: self.store.clone(),
        }
    }
}

impl<E: Entity> CrudService<E> {
    pub fn new(store: Arc<dyn EntityStore<E>>) -> Self {
        CrudService { store }
    }

    /// Assign a new id, validate, insert. Nothing is written when validation fails.
    pub async fn create(&self, input: E::Input) -> Result<E, AppError> {
        let entity = E::from_input(new_id(), input);
        Self::check(&entity)?;
        let row = self.store.insert(&entity).await?;
        tracing::info!(kind = E::KIND, id = %row.id(), "created");
        Ok(row)
    }

    pub async fn read(&self, id: EntityId) -> Result<E, AppError> {
        self.store
            .fetch(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// All rows in store scan order.
    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        self.store.fetch_all().await
    }

    /// Full replace of the record at `id`. The id always comes from the caller, never the input.
    pub async fn update(&self, id: EntityId, input: E::Input) -> Result<E, AppError> {
        let entity = E::from_input(id, input);
        Self::check(&entity)?;
        let row = self
            .store
            .replace(&entity)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        tracing::info!(kind = E::KIND, %id, "updated");
        Ok(row)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), AppError> {
        if !self.store.remove(id).await? {
            return Err(Self::not_found(id));
        }
        tracing::info!(kind = E::KIND, %id, "deleted");
        Ok(())
    }

    fn check(entity: &E) -> Result<(), AppError> {
        entity.validate().map_err(|e| {
            tracing::warn!(kind = E::KIND, field = e.field(), "rejected invalid input");
            AppError::from(e)
        })
    }

    fn not_found(id: EntityId) -> AppError {
        AppError::NotFound(format!("{} {}", E::KIND, id))
    }
}
