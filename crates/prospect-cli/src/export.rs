//! Spreadsheet export.

use std::path::Path;

use prospect_core::{ResultTable, EXPORT_COLUMNS};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Writes `table` to a single-sheet workbook at `path`, replacing any
/// existing file. Row 1 holds [`EXPORT_COLUMNS`]; data starts on row 2 in
/// table order. Blank cells (the contact name) are left empty.
pub(crate) fn write_workbook(path: &Path, table: &ResultTable) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    for (col, title) in (0u16..).zip(EXPORT_COLUMNS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }

    for (row, record) in (1u32..).zip(table.export_records()) {
        for (col, value) in (0u16..).zip(record.cells()) {
            if value.is_empty() {
                continue;
            }
            sheet.write_string(row, col, value)?;
        }
    }

    sheet.autofit();
    workbook.save(path)?;
    tracing::debug!(path = %path.display(), rows = table.len(), "workbook written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use prospect_core::ResultRow;

    use super::*;

    fn table() -> ResultTable {
        ResultTable::from(vec![
            ResultRow::new(
                Some("Acme Ltda".into()),
                Some("100 Main St".into()),
                Some("(217) 555-0100".into()),
                None,
            ),
            ResultRow::new(Some("Acme Parts".into()), None, None, None),
        ])
    }

    #[test]
    fn writes_xlsx_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        write_workbook(&path, &table()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"), "xlsx files are zip archives");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        std::fs::write(&path, b"stale").unwrap();

        write_workbook(&path, &table()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.xlsx");

        assert!(write_workbook(&path, &table()).is_err());
    }
}
