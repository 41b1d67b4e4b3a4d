//! Load sinks
//!
//! A sink persists one finished table at a time with full-replace semantics:
//! whatever existed under the table name before the write is gone afterwards.
//! Sinks never retry; the first failure is returned to the caller.

pub mod jsonl;
pub mod mysql;

use thiserror::Error;

use crate::table::Table;

pub use jsonl::JsonLinesSink;
pub use mysql::MySqlSink;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for normalized tables
pub trait TableSink {
    /// Replace the table stored under `name` with `table`
    fn write(&mut self, table: &Table, name: &str) -> Result<(), SinkError>;
}

impl<S: TableSink + ?Sized> TableSink for &mut S {
    fn write(&mut self, table: &Table, name: &str) -> Result<(), SinkError> {
        (**self).write(table, name)
    }
}

/// Keeps every written table in memory, in write order
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: Vec<(String, Table)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent table written under `name`
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .rev()
            .find(|(written, _)| written == name)
            .map(|(_, table)| table)
    }

    /// Table names in the order they were written
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl TableSink for MemorySink {
    fn write(&mut self, table: &Table, name: &str) -> Result<(), SinkError> {
        self.tables.retain(|(written, _)| written != name);
        self.tables.push((name.to_string(), table.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Genre;

    #[test]
    fn test_memory_sink_replaces_tables() {
        let mut sink = MemorySink::new();
        let first = Table::from_rows(&[Genre { genre_id: 1, genre: "Drama".to_string() }]);
        let second = Table::from_rows::<Genre>(&[]);

        sink.write(&first, "genres").unwrap();
        sink.write(&first, "other").unwrap();
        sink.write(&second, "genres").unwrap();

        assert_eq!(sink.names(), vec!["other", "genres"]);
        assert!(sink.get("genres").unwrap().is_empty());
    }
}
