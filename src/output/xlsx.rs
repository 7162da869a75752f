//! Excel export adapter.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::generators::GeneratedValue;
use crate::model::Table;

/// Write `table` to a single-sheet workbook: a header row plus one row per
/// record, with a leading 0-based index column.
pub fn write_table_xlsx(path: &Path, table: &Table) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (offset, column) in table.columns().iter().enumerate() {
        worksheet.write_string(0, offset as u16 + 1, &column.name)?;
    }

    for index in 0..table.num_rows() {
        let row = index as u32 + 1;
        worksheet.write_number(row, 0, index as f64)?;
        for (offset, column) in table.columns().iter().enumerate() {
            let col = offset as u16 + 1;
            match &column.values[index] {
                GeneratedValue::Text(value) => worksheet.write_string(row, col, value)?,
                GeneratedValue::Float(value) => worksheet.write_number(row, col, *value)?,
            };
        }
    }

    workbook.save(path)?;
    Ok(())
}
