//! Evys learning: REST backend for courses, classes and exercises.

pub mod config;
pub mod entity;
pub mod error;
pub mod migration;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::{AppConfig, ServerConfig, StoreBackend};
pub use entity::{new_id, Class, Course, Entity, EntityId, Exercise};
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use state::AppState;
pub use store::{ensure_database_exists, EntityStore, MemoryStore, PgStore};
pub use routes::{common_routes, entity_routes, router};
pub use service::CrudService;
