//! MySQL sink
//!
//! Each write drops the target table, recreates it from the table's column kinds
//! and bulk inserts the rows. Tables already written stay written if a later one
//! fails; there is no cross-table transaction.

use sqlx::mysql::{MySql, MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::QueryBuilder;
use tokio::runtime::Runtime;
use tracing::debug;

use super::{SinkError, TableSink};
use crate::config::DatabaseConfig;
use crate::table::{Cell, ColumnKind, Table};

/// Upper bound on rows per INSERT statement
const INSERT_BATCH_ROWS: usize = 1000;

/// MySQL caps prepared statements at 65535 placeholders
const MAX_PLACEHOLDERS: usize = 65_535;

pub struct MySqlSink {
    runtime: Runtime,
    pool: MySqlPool,
}

impl MySqlSink {
    /// Open a single-connection pool to the configured database
    pub fn connect(config: &DatabaseConfig) -> Result<Self, SinkError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        let pool = runtime.block_on(MySqlPoolOptions::new().max_connections(1).connect_with(options))?;
        Ok(MySqlSink { runtime, pool })
    }
}

impl TableSink for MySqlSink {
    fn write(&mut self, table: &Table, name: &str) -> Result<(), SinkError> {
        self.runtime.block_on(replace_table(&self.pool, table, name))
    }
}

async fn replace_table(pool: &MySqlPool, table: &Table, name: &str) -> Result<(), SinkError> {
    let ident = quote_ident(name);
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", ident))
        .execute(pool)
        .await?;
    sqlx::query(&create_table_sql(table, name)).execute(pool).await?;

    if table.is_empty() {
        return Ok(());
    }

    let column_list = table
        .columns()
        .iter()
        .map(|c| quote_ident(c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let batch = rows_per_insert(table.columns().len());

    for chunk in table.rows().chunks(batch) {
        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new(format!("INSERT INTO {} ({}) ", ident, column_list));
        builder.push_values(chunk, |mut values, row| {
            for cell in row {
                match cell {
                    Cell::Null => {
                        values.push_bind(None::<String>);
                    }
                    Cell::Int(n) => {
                        values.push_bind(*n);
                    }
                    Cell::Float(f) => {
                        values.push_bind(*f);
                    }
                    Cell::Text(s) => {
                        values.push_bind(s.clone());
                    }
                    Cell::Date(d) => {
                        values.push_bind(*d);
                    }
                }
            }
        });
        builder.build().execute(pool).await?;
    }

    debug!(table = name, rows = table.len(), "inserted rows");
    Ok(())
}

fn rows_per_insert(columns: usize) -> usize {
    (MAX_PLACEHOLDERS / columns.max(1)).clamp(1, INSERT_BATCH_ROWS)
}

fn sql_type(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Int => "BIGINT",
        ColumnKind::Float => "DOUBLE",
        ColumnKind::Text => "TEXT",
        ColumnKind::Date => "DATE",
    }
}

fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn create_table_sql(table: &Table, name: &str) -> String {
    let columns = table
        .columns()
        .iter()
        .map(|c| format!("{} {} NULL", quote_ident(c.name), sql_type(c.kind)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE TABLE {} ({}) CHARACTER SET utf8mb4",
        quote_ident(name),
        columns
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Job, MovieFact};

    #[test]
    fn test_create_table_sql() {
        let table = Table::from_rows::<Job>(&[]);
        assert_eq!(
            create_table_sql(&table, "jobs"),
            "CREATE TABLE `jobs` (`job_id` BIGINT NULL, `job` TEXT NULL, `department_id` BIGINT NULL) CHARACTER SET utf8mb4"
        );
    }

    #[test]
    fn test_fact_table_column_types() {
        let sql = create_table_sql(&Table::from_rows::<MovieFact>(&[]), "movies");
        assert!(sql.contains("`release_date` DATE NULL"));
        assert!(sql.contains("`popularity` DOUBLE NULL"));
        assert!(sql.contains("`original_language_short` TEXT NULL"));
    }

    #[test]
    fn test_identifiers_are_quoted() {
        assert_eq!(quote_ident("crew_jobs"), "`crew_jobs`");
        assert_eq!(quote_ident("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_batch_size_respects_placeholder_limit() {
        assert_eq!(rows_per_insert(2), INSERT_BATCH_ROWS);
        assert_eq!(rows_per_insert(100), 655);
        assert_eq!(rows_per_insert(0), INSERT_BATCH_ROWS);
    }
}
