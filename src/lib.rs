//! Synthetic tabular dataset generation.
//!
//! A convenience layer over the `fake` crate: a closed registry of field
//! kinds, a handful of locally formatted fields (phone numbers, license
//! plates, name-linked emails, a curated US city list), and export
//! adapters for SQLite database files and Excel workbooks.

pub mod assets;
pub mod engine;
pub mod errors;
pub mod fields;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{Fabricator, FabricatorOptions};
pub use errors::{FabricaError, Result};
pub use fields::FieldKind;
pub use generators::{GeneratedValue, PlateStyle};
pub use model::{Column, SqliteOptions, Table, TableOptions};
