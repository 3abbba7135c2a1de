//! Builds parameterized INSERT, SELECT, UPDATE, DELETE and table DDL from an entity's column list.

use crate::entity::Entity;
use crate::sql::BindValue;

/// How a column is stored. The first column of every entity is its `Key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Key,
    Text,
    /// Nullable id of another entity. No foreign key, so deletes never cascade.
    Reference,
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub const fn key(name: &'static str) -> Self {
        ColumnDef { name, kind: ColumnKind::Key }
    }

    pub const fn text(name: &'static str) -> Self {
        ColumnDef { name, kind: ColumnKind::Text }
    }

    pub const fn reference(name: &'static str) -> Self {
        ColumnDef { name, kind: ColumnKind::Reference }
    }

    fn ddl(&self) -> String {
        let typ = match self.kind {
            ColumnKind::Key => "UUID PRIMARY KEY",
            ColumnKind::Text => "TEXT NOT NULL",
            ColumnKind::Reference => "UUID",
        };
        format!("{} {}", quoted(self.name), typ)
    }

    fn placeholder(&self, n: usize) -> String {
        match self.kind {
            ColumnKind::Key | ColumnKind::Reference => format!("${}::uuid", n),
            ColumnKind::Text => format!("${}", n),
        }
    }
}

/// Quote identifier for PostgreSQL (safe: only from entity definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

fn select_column_list(columns: &[ColumnDef]) -> String {
    columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn key_predicate(columns: &[ColumnDef]) -> String {
    match columns.first() {
        Some(key) => format!("{} = {}", quoted(key.name), key.placeholder(1)),
        None => "FALSE".to_string(),
    }
}

/// SELECT every row. No ORDER BY: rows come back in store scan order.
pub fn select_all<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {}",
        select_column_list(E::COLUMNS),
        quoted(E::RESOURCE)
    )
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {}",
        select_column_list(E::COLUMNS),
        quoted(E::RESOURCE),
        key_predicate(E::COLUMNS)
    )
}

/// INSERT every column, returning the stored row.
pub fn insert<E: Entity>(entity: &E) -> QueryBuf {
    let cols = select_column_list(E::COLUMNS);
    let placeholders: Vec<String> = E::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| c.placeholder(i + 1))
        .collect();
    QueryBuf {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quoted(E::RESOURCE),
            cols,
            placeholders.join(", "),
            cols
        ),
        params: entity.bind_values(),
    }
}

/// UPDATE by primary key: SET every non-key column (full replace). The key is `$1`.
pub fn update<E: Entity>(entity: &E) -> QueryBuf {
    let sets: Vec<String> = E::COLUMNS
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, c)| format!("{} = {}", quoted(c.name), c.placeholder(i + 1)))
        .collect();
    QueryBuf {
        sql: format!(
            "UPDATE {} SET {} WHERE {} RETURNING {}",
            quoted(E::RESOURCE),
            sets.join(", "),
            key_predicate(E::COLUMNS),
            select_column_list(E::COLUMNS)
        ),
        params: entity.bind_values(),
    }
}

/// DELETE by primary key. Caller binds the id as `$1`.
pub fn delete<E: Entity>() -> String {
    format!(
        "DELETE FROM {} WHERE {}",
        quoted(E::RESOURCE),
        key_predicate(E::COLUMNS)
    )
}

/// CREATE TABLE IF NOT EXISTS with one column per entity field.
pub fn create_table<E: Entity>() -> String {
    let defs: Vec<String> = E::COLUMNS.iter().map(ColumnDef::ddl).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(E::RESOURCE),
        defs.join(", ")
    )
}
