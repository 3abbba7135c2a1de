//! CrudService: per-entity create/read/update/delete over a pluggable store.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::{FieldValidator, ValidationError};
