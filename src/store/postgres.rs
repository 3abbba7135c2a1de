//! PostgreSQL-backed store and database bootstrap.

use super::EntityStore;
use crate::entity::{Entity, EntityId};
use crate::error::AppError;
use crate::sql::{self, BindValue, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{ConnectOptions, FromRow, PgPool};

/// Store over a connection pool. One instance serves every entity type.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    async fn execute_returning_one<E>(&self, q: QueryBuf) -> Result<Option<E>, AppError>
    where
        E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, E>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }
}

#[async_trait]
impl<E> EntityStore<E> for PgStore
where
    E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
{
    async fn insert(&self, entity: &E) -> Result<E, AppError> {
        let q = sql::insert(entity);
        self.execute_returning_one(q)
            .await?
            .ok_or_else(|| AppError::StoreUnavailable(format!("insert into {} returned no row", E::RESOURCE)))
    }

    async fn fetch(&self, id: EntityId) -> Result<Option<E>, AppError> {
        let q = QueryBuf {
            sql: sql::select_by_id::<E>(),
            params: vec![BindValue::from(id)],
        };
        self.execute_returning_one(q).await
    }

    async fn fetch_all(&self) -> Result<Vec<E>, AppError> {
        let q = sql::select_all::<E>();
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, E>(&q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn replace(&self, entity: &E) -> Result<Option<E>, AppError> {
        self.execute_returning_one(sql::update(entity)).await
    }

    async fn remove(&self, id: EntityId) -> Result<bool, AppError> {
        let q = sql::delete::<E>();
        tracing::debug!(sql = %q, %id, "query");
        let result = sqlx::query(&q)
            .bind(BindValue::from(id))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Ensure the target database exists; create it if not. Connects to the
/// `postgres` maintenance database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = options.get_database().unwrap_or_default().to_string();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn = options.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
