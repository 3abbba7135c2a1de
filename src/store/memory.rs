use super::EntityStore;
use crate::entity::{Entity, EntityId};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Ordered in-process list guarded by a lock. Scan order is insertion order.
pub struct MemoryStore<E> {
    rows: RwLock<Vec<E>>,
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        MemoryStore {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn insert(&self, entity: &E) -> Result<E, AppError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id() == entity.id()) {
            return Err(AppError::StoreUnavailable(format!(
                "duplicate {} id {}",
                E::KIND,
                entity.id()
            )));
        }
        rows.push(entity.clone());
        Ok(entity.clone())
    }

    async fn fetch(&self, id: EntityId) -> Result<Option<E>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.rows.read().await.clone())
    }

    async fn replace(&self, entity: &E) -> Result<Option<E>, AppError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(Some(entity.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: EntityId) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok(rows.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{new_id, Course};
    use std::sync::Arc;

    fn course(name: &str) -> Course {
        Course {
            id: new_id(),
            name: name.into(),
            description: "d".into(),
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let store: MemoryStore<Course> = MemoryStore::new();
        let a = store.insert(&course("a")).await.unwrap();
        let b = store.insert(&course("b")).await.unwrap();
        let all = store.fetch_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn duplicate_id_is_a_store_error() {
        let store: MemoryStore<Course> = MemoryStore::new();
        let c = course("a");
        store.insert(&c).await.unwrap();
        let err = store.insert(&c).await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn replace_and_remove_report_misses() {
        let store: MemoryStore<Course> = MemoryStore::new();
        let c = course("a");
        assert_eq!(store.replace(&c).await.unwrap(), None);
        assert!(!store.remove(c.id).await.unwrap());

        store.insert(&c).await.unwrap();
        let renamed = Course { name: "b".into(), ..c.clone() };
        assert_eq!(store.replace(&renamed).await.unwrap(), Some(renamed.clone()));
        assert_eq!(store.fetch(c.id).await.unwrap(), Some(renamed));
        assert!(store.remove(c.id).await.unwrap());
        assert_eq!(store.fetch(c.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store: Arc<MemoryStore<Course>> = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(&course(&i.to_string())).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(store.fetch_all().await.unwrap().len(), 50);
    }
}
