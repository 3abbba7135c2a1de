//! Bootstrap DDL: one table per resource, created if missing. Existing tables are left as they are.

use crate::entity::{Class, Course, Entity, Exercise};
use crate::error::AppError;
use crate::sql::create_table;
use sqlx::PgPool;

pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    create::<Course>(pool).await?;
    create::<Class>(pool).await?;
    create::<Exercise>(pool).await?;
    Ok(())
}

async fn create<E: Entity>(pool: &PgPool) -> Result<(), AppError> {
    let ddl = create_table::<E>();
    tracing::debug!(sql = %ddl, "ensure table");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
