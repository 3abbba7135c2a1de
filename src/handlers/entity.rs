//! Entity CRUD handlers: create, read, update, delete, list. Generic over the entity; each route instantiates one.

use crate::entity::{Entity, EntityId};
use crate::error::AppError;
use crate::service::CrudService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id<E: Entity>(id_str: &str) -> Result<EntityId, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::MalformedInput(format!("invalid {} id '{}'", E::KIND, id_str)))
}

pub async fn list<E: Entity>(
    State(service): State<CrudService<E>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = service.list().await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn create<E: Entity>(
    State(service): State<CrudService<E>>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let row = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn read<E: Entity>(
    State(service): State<CrudService<E>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id::<E>(&id_str)?;
    let row = service.read(id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn update<E: Entity>(
    State(service): State<CrudService<E>>,
    Path(id_str): Path<String>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id::<E>(&id_str)?;
    let Json(input) = payload?;
    let row = service.update(id, input).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete<E: Entity>(
    State(service): State<CrudService<E>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id::<E>(&id_str)?;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Class, Course};

    #[test]
    fn parse_id_names_the_entity() {
        let err = parse_id::<Class>("42").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("invalid class id"));
        let id = crate::entity::new_id();
        assert_eq!(parse_id::<Course>(&id.to_string()).unwrap(), id);
    }
}
