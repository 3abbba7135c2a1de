//! Courses: a named subject with a description.

use super::{Entity, EntityId};
use crate::service::{FieldValidator, ValidationError};
use crate::sql::{BindValue, ColumnDef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

/// Missing fields decode as empty strings so validation can name them.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CourseInput {
    pub name: String,
    pub description: String,
}

impl Entity for Course {
    type Input = CourseInput;

    const KIND: &'static str = "course";
    const RESOURCE: &'static str = "courses";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::key("id"),
        ColumnDef::text("name"),
        ColumnDef::text("description"),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_input(id: EntityId, input: CourseInput) -> Self {
        Course {
            id,
            name: input.name,
            description: input.description,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        FieldValidator::require_non_empty(
            Self::KIND,
            &[("name", self.name.as_str()), ("description", self.description.as_str())],
        )
    }

    fn bind_values(&self) -> Vec<BindValue> {
        vec![
            self.id.into(),
            self.name.as_str().into(),
            self.description.as_str().into(),
        ]
    }
}
