//! Sink: the merged table as one worksheet of an `.xlsx` workbook. Saving
//! replaces any previous file at the path, so a rerun never appends to stale
//! output. A write failure is fatal for the run; there is no partial success.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::reconcile::{COLUMNS, MergedRecord};

pub fn write_table(path: &Path, sheet_name: &str, records: &[MergedRecord]) -> Result<()> {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
    rows.push(COLUMNS.iter().map(|c| c.to_string()).collect());
    rows.extend(records.iter().map(MergedRecord::to_row));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name(sheet_name)
        .with_context(|| format!("invalid worksheet name '{sheet_name}'"))?;
    write_rows(sheet, &rows)?;

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
