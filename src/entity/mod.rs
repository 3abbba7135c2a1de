//! Domain records: courses, classes and exercises.

mod class;
mod course;
mod exercise;
mod id;

pub use class::{Class, ClassInput};
pub use course::{Course, CourseInput};
pub use exercise::{Exercise, ExerciseInput};
pub use id::{new_id, EntityId};

use crate::service::ValidationError;
use crate::sql::{BindValue, ColumnDef};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Capabilities shared by every stored record. Each resource route is bound
/// to one implementor at compile time.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Request body for create and update. Never carries the id.
    type Input: DeserializeOwned + Send + 'static;

    /// Singular name used in messages and logs ("course").
    const KIND: &'static str;
    /// Table name and URL path segment ("courses").
    const RESOURCE: &'static str;
    /// Stored columns, key first, in the order of [`Entity::bind_values`].
    const COLUMNS: &'static [ColumnDef];

    fn id(&self) -> EntityId;

    /// Build the full record from an id chosen by the caller and the request fields.
    fn from_input(id: EntityId, input: Self::Input) -> Self;

    /// Check required fields in declared order; the first empty one is reported.
    fn validate(&self) -> Result<(), ValidationError>;

    fn bind_values(&self) -> Vec<BindValue>;
}
