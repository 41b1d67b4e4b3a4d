//! Column-typed tables handed to sinks
//!
//! Extractors produce typed rows; sinks only ever see a [`Table`], so a new row type
//! needs nothing more than a [`Tabular`] impl to become loadable.

use chrono::NaiveDate;
use serde_json::{Map, Number, Value};

/// Storage class of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Column { name, kind }
    }
}

/// A single value; `Null` stands in for any missing source value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl Cell {
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Int(n) => Value::Number((*n).into()),
            Cell::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Cell::Null
        } else {
            Cell::Float(value)
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

/// Row types that can be rendered as a [`Table`]
pub trait Tabular {
    fn columns() -> Vec<Column>;
    fn cells(&self) -> Vec<Cell>;
}

/// Implement [`Tabular`] for a struct by listing its fields and column kinds in order
#[macro_export]
macro_rules! impl_tabular {
    ($ty:ty { $($field:ident: $kind:ident),* $(,)? }) => {
        impl $crate::table::Tabular for $ty {
            fn columns() -> Vec<$crate::table::Column> {
                vec![$($crate::table::Column::new(
                    stringify!($field),
                    $crate::table::ColumnKind::$kind,
                )),*]
            }

            fn cells(&self) -> Vec<$crate::table::Cell> {
                vec![$($crate::table::Cell::from(self.$field.clone())),*]
            }
        }
    };
}

/// Rows plus their column layout
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn from_rows<T: Tabular>(rows: &[T]) -> Self {
        Table {
            columns: T::columns(),
            rows: rows.iter().map(Tabular::cells).collect(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render one row as a JSON object keyed by column name
    pub fn row_object(&self, row: &[Cell]) -> Map<String, Value> {
        self.columns
            .iter()
            .zip(row)
            .map(|(column, cell)| (column.name.to_string(), cell.to_json()))
            .collect()
    }
}
