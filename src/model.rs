use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::generators::GeneratedValue;

pub const DEFAULT_DB_FILE: &str = "NewFakeDB.db";
pub const DEFAULT_TABLE_NAME: &str = "Table1";
pub const DEFAULT_EXCEL_FILE: &str = "NewExcel.xlsx";

/// One named column of generated values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<GeneratedValue>,
}

/// Equally sized named series, in user-requested column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns
            .first()
            .map(|column| column.values.len())
            .unwrap_or(0)
    }

    pub fn header(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }

    /// Cells of row `index` in column order.
    pub fn row(&self, index: usize) -> Vec<&GeneratedValue> {
        self.columns
            .iter()
            .map(|column| &column.values[index])
            .collect()
    }

    pub(crate) fn push_column(&mut self, name: impl Into<String>, values: Vec<GeneratedValue>) {
        self.columns.push(Column {
            name: name.into(),
            values,
        });
    }

    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }
}

/// Field-substitution switches for the table builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableOptions {
    /// Overwrite a requested `email` column with name-linked addresses when
    /// a name is also requested.
    pub real_email: bool,
    /// Substitute the curated city list for the fictitious city generator.
    pub real_city: bool,
    /// Resolve the `phone` alias to the 10-digit format instead of the
    /// fake-data library's full format.
    pub phone_simple: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            real_email: true,
            real_city: true,
            phone_simple: true,
        }
    }
}

/// Destination settings for the SQLite export adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqliteOptions {
    /// Database file path; `NewFakeDB.db` when unset.
    pub db_file: Option<PathBuf>,
    /// Table name; `Table1` when unset.
    pub table_name: Option<String>,
    /// Primary key column; the first requested field when unset.
    pub primary_key: Option<String>,
}
