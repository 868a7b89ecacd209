//! Declared source formats accepted by the importer.
//!
//! The format is chosen from the content type the uploader declares. File
//! contents are never sniffed to pick a format.

use crate::error::ImportError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// MIME type of legacy binary workbooks (`.xls`).
pub const MIME_SPREADSHEET_LEGACY: &str = "application/vnd.ms-excel";

/// MIME type of Office Open XML workbooks (`.xlsx`).
pub const MIME_SPREADSHEET_MODERN: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type of comma-separated text.
pub const MIME_CSV: &str = "text/csv";

/// All accepted content types.
pub const SUPPORTED_CONTENT_TYPES: &[&str] =
    &[MIME_SPREADSHEET_LEGACY, MIME_SPREADSHEET_MODERN, MIME_CSV];

// ---------------------------------------------------------------------------
// SourceFormat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    SpreadsheetLegacy,
    SpreadsheetModern,
    DelimitedText,
}

impl SourceFormat {
    /// Resolve a declared content type.
    ///
    /// Parameters such as `; charset=utf-8` are ignored and the comparison
    /// is case-insensitive.
    pub fn from_content_type(content_type: &str) -> Result<Self, ImportError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            MIME_SPREADSHEET_LEGACY => Ok(Self::SpreadsheetLegacy),
            MIME_SPREADSHEET_MODERN => Ok(Self::SpreadsheetModern),
            MIME_CSV => Ok(Self::DelimitedText),
            _ => Err(ImportError::UnsupportedFormat(format!(
                "'{}' is not accepted. Upload one of: {}",
                content_type.trim(),
                SUPPORTED_CONTENT_TYPES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn resolves_each_supported_type() {
        let resolved: Vec<SourceFormat> = SUPPORTED_CONTENT_TYPES
            .iter()
            .map(|ct| SourceFormat::from_content_type(ct).unwrap())
            .collect();
        assert_eq!(
            resolved,
            vec![
                SourceFormat::SpreadsheetLegacy,
                SourceFormat::SpreadsheetModern,
                SourceFormat::DelimitedText,
            ]
        );
    }

    #[test]
    fn ignores_parameters_and_case() {
        assert_eq!(
            SourceFormat::from_content_type(" Text/CSV; charset=UTF-8").unwrap(),
            SourceFormat::DelimitedText
        );
    }

    #[test]
    fn pdf_is_unsupported() {
        assert_matches!(
            SourceFormat::from_content_type("application/pdf"),
            Err(ImportError::UnsupportedFormat(msg)) if msg.contains("application/pdf")
        );
    }

    #[test]
    fn empty_type_is_unsupported() {
        assert_matches!(
            SourceFormat::from_content_type(""),
            Err(ImportError::UnsupportedFormat(_))
        );
    }
}
