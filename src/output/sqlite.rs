//! SQLite export adapter.
//!
//! All value inserts use parameter binding; only identifiers are spliced
//! into statements, and those are always quoted.

use std::path::Path;

use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};

use crate::errors::Result;
use crate::model::Table;

/// Open (or create) a file-backed database.
pub async fn open(path: &Path) -> Result<SqliteConnection> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    Ok(SqliteConnection::connect_with(&options).await?)
}

pub async fn close(conn: SqliteConnection) -> Result<()> {
    conn.close().await?;
    Ok(())
}

pub async fn drop_table(conn: &mut SqliteConnection, table: &str) -> Result<()> {
    let sql = format!("DROP TABLE IF EXISTS {}", quote_ident(table));
    sqlx::query(&sql).execute(&mut *conn).await?;
    Ok(())
}

/// Create `table` with one TEXT column per field; `primary_key` must be one
/// of `fields`.
pub async fn create_table(
    conn: &mut SqliteConnection,
    table: &str,
    fields: &[&str],
    primary_key: &str,
) -> Result<()> {
    let columns: Vec<String> = fields
        .iter()
        .map(|&field| {
            if field == primary_key {
                format!("{} TEXT PRIMARY KEY NOT NULL", quote_ident(field))
            } else {
                format!("{} TEXT", quote_ident(field))
            }
        })
        .collect();
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_ident(table),
        columns.join(", ")
    );
    sqlx::query(&sql).execute(&mut *conn).await?;
    Ok(())
}

/// Insert every row of `data` inside one transaction; the transaction
/// rolls back if any statement fails.
pub async fn insert_rows(conn: &mut SqliteConnection, table: &str, data: &Table) -> Result<()> {
    let placeholders = vec!["?"; data.num_columns()].join(", ");
    let sql = format!("INSERT INTO {} VALUES ({placeholders})", quote_ident(table));

    let mut tx = conn.begin().await?;
    for index in 0..data.num_rows() {
        let mut statement = sqlx::query(&sql);
        for column in data.columns() {
            statement = statement.bind(column.values[index].render());
        }
        statement.execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
