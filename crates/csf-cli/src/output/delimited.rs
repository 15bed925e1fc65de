//! CSV export.

use std::io::Write;

use csf_core::Record;

use super::header;

/// One header row, then one row per record.
pub fn write<W: Write>(records: &[Record], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(header())?;
    for record in records {
        wtr.write_record(record.values())?;
    }

    wtr.flush()?;
    Ok(())
}
