//! Values that can be bound to PostgreSQL statements built by this crate.

use crate::entity::EntityId;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A bindable column value. Everything is sent as text; the builder adds
/// `::uuid` casts on key and reference placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Null,
    Text(String),
    Uuid(uuid::Uuid),
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<EntityId> for BindValue {
    fn from(id: EntityId) -> Self {
        BindValue::Uuid(*id.as_uuid())
    }
}

impl From<Option<EntityId>> for BindValue {
    fn from(id: Option<EntityId>) -> Self {
        id.map(BindValue::from).unwrap_or(BindValue::Null)
    }
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::Null => <Option<String> as Encode<Postgres>>::encode_by_ref(&None, buf),
            BindValue::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf),
            BindValue::Uuid(u) => <String as Encode<Postgres>>::encode_by_ref(&u.to_string(), buf),
        }
    }
}

impl sqlx::Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}
