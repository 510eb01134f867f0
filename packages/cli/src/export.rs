//! Spreadsheet export of extracted records.

use std::path::Path;

use anyhow::{Context, Result};
use mapleads::BusinessInfo;
use rust_xlsxwriter::{Format, Workbook};

use crate::table::HEADERS;

/// Default output file name.
pub const DEFAULT_FILE_NAME: &str = "google_maps_data.xlsx";

const SHEET_NAME: &str = "Google Maps Data";

/// Write records to an `.xlsx` workbook.
///
/// Header row, one row per record with a 1-based serial number, auto-sized
/// columns.
pub fn write_workbook(records: &[BusinessInfo], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_number(row, 0, (i + 1) as f64)?;
        worksheet.write_string(row, 1, &record.name)?;
        worksheet.write_string(row, 2, &record.address)?;
        worksheet.write_string(row, 3, &record.phone)?;
    }

    worksheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_workbook_creates_the_file() {
        let records = vec![
            BusinessInfo {
                name: "Acme".to_string(),
                address: "1 Main St".to_string(),
                phone: "555-0001".to_string(),
            },
            BusinessInfo {
                name: "Borealis".to_string(),
                address: "N/A".to_string(),
                phone: "555-0002".to_string(),
            },
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        write_workbook(&records, &path).unwrap();

        let written = std::fs::metadata(&path).unwrap();
        assert!(written.len() > 0);
    }

    #[test]
    fn test_empty_record_list_still_writes_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        write_workbook(&[], &path).unwrap();
        assert!(path.exists());
    }
}
