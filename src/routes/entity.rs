//! Entity CRUD routes: `/{resource}` and `/{resource}/:id` for courses, classes and exercises.

use crate::entity::{Class, Course, Entity, Exercise};
use crate::handlers::entity::{create, delete as delete_handler, list, read, update};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::FromRef, routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<Course>())
        .merge(resource_routes::<Class>())
        .merge(resource_routes::<Exercise>())
        .with_state(state)
}

fn resource_routes<E>() -> Router<AppState>
where
    E: Entity,
    CrudService<E>: FromRef<AppState>,
{
    Router::new()
        .route(&format!("/{}", E::RESOURCE), get(list::<E>).post(create::<E>))
        .route(
            &format!("/{}/:id", E::RESOURCE),
            get(read::<E>).put(update::<E>).delete(delete_handler::<E>),
        )
}
