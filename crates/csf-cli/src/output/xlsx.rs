//! Excel export using rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use csf_core::Record;

use super::header;

/// Build a single-sheet workbook: bold frozen header, one row per record.
pub fn build(records: &[Record], sheet_name: &str) -> anyhow::Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let bold = Format::new().set_bold();
    for (col, name) in header().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in record.values().iter().enumerate() {
            worksheet.write_string(row, col as u16, *value)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();

    Ok(workbook)
}

pub fn write(records: &[Record], path: &Path, sheet_name: &str) -> anyhow::Result<()> {
    let mut workbook = build(records, sheet_name)?;
    workbook.save(path)?;
    Ok(())
}
