//! Classes: a lesson, optionally tied to a course.

use super::{Entity, EntityId};
use crate::service::{FieldValidator, ValidationError};
use crate::sql::{BindValue, ColumnDef};
use serde::{Deserialize, Serialize};

/// A lesson. `course` is a weak reference: deleting the course leaves the class untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Class {
    pub id: EntityId,
    pub title: String,
    pub resume: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "course_id")]
    pub course: Option<EntityId>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClassInput {
    pub title: String,
    pub resume: String,
    pub text: String,
    pub course: Option<EntityId>,
}

impl Entity for Class {
    type Input = ClassInput;

    const KIND: &'static str = "class";
    const RESOURCE: &'static str = "classes";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::key("id"),
        ColumnDef::text("title"),
        ColumnDef::text("resume"),
        ColumnDef::text("text"),
        ColumnDef::reference("course_id"),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_input(id: EntityId, input: ClassInput) -> Self {
        Class {
            id,
            title: input.title,
            resume: input.resume,
            text: input.text,
            course: input.course,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        FieldValidator::require_non_empty(
            Self::KIND,
            &[
                ("title", self.title.as_str()),
                ("resume", self.resume.as_str()),
                ("text", self.text.as_str()),
            ],
        )
    }

    fn bind_values(&self) -> Vec<BindValue> {
        vec![
            self.id.into(),
            self.title.as_str().into(),
            self.resume.as_str().into(),
            self.text.as_str().into(),
            self.course.into(),
        ]
    }
}
