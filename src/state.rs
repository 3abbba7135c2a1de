//! Shared application state for all routes: one CRUD service per resource.

use crate::entity::{Class, Course, Exercise};
use crate::service::CrudService;
use crate::store::{EntityStore, MemoryStore, PgStore};
use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub courses: CrudService<Course>,
    pub classes: CrudService<Class>,
    pub exercises: CrudService<Exercise>,
    /// Set when backed by PostgreSQL; the readiness probe pings it.
    pub pool: Option<PgPool>,
}

impl AppState {
    /// Assemble from one store per resource. `pool` is only used by the readiness probe.
    pub fn new(
        courses: Arc<dyn EntityStore<Course>>,
        classes: Arc<dyn EntityStore<Class>>,
        exercises: Arc<dyn EntityStore<Exercise>>,
        pool: Option<PgPool>,
    ) -> Self {
        AppState {
            courses: CrudService::new(courses),
            classes: CrudService::new(classes),
            exercises: CrudService::new(exercises),
            pool,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        Self::new(store.clone(), store.clone(), store, Some(pool))
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<Course>::new()),
            Arc::new(MemoryStore::<Class>::new()),
            Arc::new(MemoryStore::<Exercise>::new()),
            None,
        )
    }
}

impl FromRef<AppState> for CrudService<Course> {
    fn from_ref(state: &AppState) -> Self {
        state.courses.clone()
    }
}

impl FromRef<AppState> for CrudService<Class> {
    fn from_ref(state: &AppState) -> Self {
        state.classes.clone()
    }
}

impl FromRef<AppState> for CrudService<Exercise> {
    fn from_ref(state: &AppState) -> Self {
        state.exercises.clone()
    }
}
