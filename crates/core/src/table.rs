//! Raw tabular parsing: bytes in, header row plus string rows out.
//!
//! No column semantics live here. [`crate::import`] decides which columns
//! matter; this module only turns a CSV or a workbook into text cells.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};

use crate::error::ImportError;
use crate::format::SourceFormat;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A parsed table before validation. Every row has exactly `headers.len()`
/// cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn parse(bytes: &[u8], format: SourceFormat) -> Result<Self, ImportError> {
        match format {
            SourceFormat::DelimitedText => Self::from_delimited(bytes),
            SourceFormat::SpreadsheetLegacy | SourceFormat::SpreadsheetModern => {
                Self::from_spreadsheet(bytes)
            }
        }
    }

    /// Parse comma-separated UTF-8 text whose first row is the header.
    ///
    /// Short rows are padded with empty cells. A row with more cells than
    /// the header is rejected.
    pub fn from_delimited(bytes: &[u8]) -> Result<Self, ImportError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ImportError::Parse(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() {
            return Err(ImportError::Parse("CSV is empty".into()));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ImportError::Parse(e.to_string()))?;

            if record.len() > headers.len() {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(ImportError::Parse(format!(
                    "line {line}: expected at most {} fields, found {}",
                    headers.len(),
                    record.len()
                )));
            }

            let mut row: Vec<String> = record.iter().map(String::from).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Parse the first worksheet of an `.xls`/`.xlsx`/`.ods` workbook.
    ///
    /// The container is detected from the bytes, so a workbook declared with
    /// the wrong spreadsheet MIME type still opens. Rows with no non-empty
    /// cell are skipped.
    pub fn from_spreadsheet(bytes: &[u8]) -> Result<Self, ImportError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| ImportError::Parse(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::Parse("workbook has no worksheets".into()))?
            .map_err(|e| ImportError::Parse(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let headers: Vec<String> = sheet_rows
            .next()
            .ok_or_else(|| ImportError::Parse("first worksheet is empty".into()))?
            .iter()
            .map(|cell| cell_text(cell).trim().to_string())
            .collect();

        let rows = sheet_rows
            .filter(|cells| cells.iter().any(|c| !c.is_empty()))
            .map(|cells| cells.iter().map(cell_text).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    /// Position of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Render a workbook cell as text.
///
/// Whole-number floats render without a fractional part (`12.0` becomes
/// `12`), matching how identifiers typed into a spreadsheet read back.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn delimited_reads_header_and_rows() {
        let table = RawTable::from_delimited(b"A,B\n1,2\n3,4\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn delimited_handles_quoted_delimiters_and_newlines() {
        let table =
            RawTable::from_delimited(b"A,B\n\"x, y\",\"line one\nline two\"\n").unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "x, y");
        assert_eq!(table.rows[0][1], "line one\nline two");
    }

    #[test]
    fn delimited_pads_short_rows() {
        let table = RawTable::from_delimited(b"A,B,C\n1\n").unwrap();
        assert_eq!(table.rows, vec![vec!["1", "", ""]]);
    }

    #[test]
    fn delimited_rejects_long_rows() {
        assert_matches!(
            RawTable::from_delimited(b"A,B\n1,2,3\n"),
            Err(ImportError::Parse(msg)) if msg.contains("line 2")
        );
    }

    #[test]
    fn delimited_skips_blank_lines() {
        let table = RawTable::from_delimited(b"A,B\n1,2\n\n3,4\n").unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn delimited_strips_bom_and_trims_headers() {
        let table = RawTable::from_delimited(b"\xEF\xBB\xBF A , B\n1,2\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.column_index("A"), Some(0));
    }

    #[test]
    fn delimited_empty_input_is_parse_error() {
        assert_matches!(RawTable::from_delimited(b""), Err(ImportError::Parse(_)));
    }

    #[test]
    fn delimited_invalid_utf8_is_parse_error() {
        assert_matches!(
            RawTable::from_delimited(b"A,B\n\xff\xfe,1\n"),
            Err(ImportError::Parse(_))
        );
    }

    #[test]
    fn header_only_yields_no_rows() {
        let table = RawTable::from_delimited(b"A,B\n").unwrap();
        assert!(table.rows.is_empty());
    }

    fn workbook_bytes(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn spreadsheet_reads_first_sheet() {
        let bytes = workbook_bytes(&[&[" A ", "B"], &["x", ""], &["", ""], &["y", "z"]]);
        let table = RawTable::from_spreadsheet(&bytes).unwrap();

        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["x", ""], vec!["y", "z"]]);
    }

    #[test]
    fn spreadsheet_numbers_render_without_trailing_zero() {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "SAA").unwrap();
        sheet.write_string(0, 1, "SAT").unwrap();
        sheet.write_number(1, 0, 1042.0).unwrap();
        sheet.write_number(1, 1, 2.5).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = RawTable::from_spreadsheet(&bytes).unwrap();
        assert_eq!(table.rows, vec![vec!["1042", "2.5"]]);
    }

    #[test]
    fn spreadsheet_opens_regardless_of_declared_variant() {
        let bytes = workbook_bytes(&[&["A"], &["x"]]);
        let legacy = RawTable::parse(&bytes, SourceFormat::SpreadsheetLegacy).unwrap();
        let modern = RawTable::parse(&bytes, SourceFormat::SpreadsheetModern).unwrap();
        assert_eq!(legacy, modern);
    }

    #[test]
    fn spreadsheet_garbage_is_parse_error() {
        assert_matches!(
            RawTable::from_spreadsheet(b"definitely not a workbook"),
            Err(ImportError::Parse(_))
        );
    }

    #[test]
    fn parse_dispatches_on_format() {
        let table = RawTable::parse(b"A\nx\n", SourceFormat::DelimitedText).unwrap();
        assert_eq!(table.rows, vec![vec!["x"]]);
        assert_matches!(
            RawTable::parse(b"A\nx\n", SourceFormat::SpreadsheetModern),
            Err(ImportError::Parse(_))
        );
    }

    #[test]
    fn cell_text_renders_numbers_and_blanks() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Float(12.0)), "12");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::String("Ativo".into())), "Ativo");
    }
}
