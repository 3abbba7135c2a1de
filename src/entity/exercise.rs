//! Exercises: a question with its expected answer, optionally tied to a class.

use super::{Entity, EntityId};
use crate::service::{FieldValidator, ValidationError};
use crate::sql::{BindValue, ColumnDef};
use serde::{Deserialize, Serialize};

/// A question with its expected answer. `classes` in JSON is a weak reference to one class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: EntityId,
    pub question: String,
    pub answer: String,
    pub correct_answer: String,
    pub subject: String,
    #[serde(rename = "classes", default, skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "class_id")]
    pub class: Option<EntityId>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExerciseInput {
    pub question: String,
    pub answer: String,
    pub correct_answer: String,
    pub subject: String,
    #[serde(rename = "classes")]
    pub class: Option<EntityId>,
}

impl Entity for Exercise {
    type Input = ExerciseInput;

    const KIND: &'static str = "exercise";
    const RESOURCE: &'static str = "exercises";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::key("id"),
        ColumnDef::text("question"),
        ColumnDef::text("answer"),
        ColumnDef::text("correct_answer"),
        ColumnDef::text("subject"),
        ColumnDef::reference("class_id"),
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_input(id: EntityId, input: ExerciseInput) -> Self {
        Exercise {
            id,
            question: input.question,
            answer: input.answer,
            correct_answer: input.correct_answer,
            subject: input.subject,
            class: input.class,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        FieldValidator::require_non_empty(
            Self::KIND,
            &[
                ("question", self.question.as_str()),
                ("answer", self.answer.as_str()),
                ("correct_answer", self.correct_answer.as_str()),
                ("subject", self.subject.as_str()),
            ],
        )
    }

    fn bind_values(&self) -> Vec<BindValue> {
        vec![
            self.id.into(),
            self.question.as_str().into(),
            self.answer.as_str().into(),
            self.correct_answer.as_str().into(),
            self.subject.as_str().into(),
            self.class.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::new_id;

    fn exercise() -> Exercise {
        Exercise {
            id: new_id(),
            question: "What is the best programming language?".into(),
            answer: "Python".into(),
            correct_answer: "It depends on the context, developers familiarity, software applicability and other factors.".into(),
            subject: "Programming Language".into(),
            class: None,
        }
    }

    #[test]
    fn valid_exercise() {
        assert!(exercise().validate().is_ok());
        assert!(Exercise { class: Some(new_id()), ..exercise() }.validate().is_ok());
    }

    #[test]
    fn empty_fields_fail_in_declared_order() {
        let mut e = exercise();
        e.question.clear();
        assert_eq!(e.validate().unwrap_err().field(), "question");

        let mut e = exercise();
        e.answer.clear();
        assert_eq!(e.validate().unwrap_err().field(), "answer");

        let mut e = exercise();
        e.correct_answer.clear();
        assert_eq!(e.validate().unwrap_err().field(), "correct_answer");

        let mut e = exercise();
        e.subject.clear();
        assert_eq!(e.validate().unwrap_err().field(), "subject");

        let mut e = exercise();
        e.answer.clear();
        e.subject.clear();
        assert_eq!(e.validate().unwrap_err().field(), "answer");
    }

    #[test]
    fn whitespace_only_fields_are_accepted() {
        let e = Exercise { question: "   ".into(), ..exercise() };
        assert!(e.validate().is_ok());
    }

    #[test]
    fn class_reference_uses_classes_key() {
        let class = new_id();
        let input: ExerciseInput = serde_json::from_value(serde_json::json!({
            "question": "q", "answer": "a", "correct_answer": "c", "subject": "s",
            "classes": class.to_string()
        }))
        .unwrap();
        let e = Exercise::from_input(new_id(), input);
        assert_eq!(e.class, Some(class));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["classes"], class.to_string());
    }
}
