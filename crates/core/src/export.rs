//! CSV export of the current roster.

use serde::Serialize;

use crate::error::CoreError;
use crate::format::MIME_CSV;
use crate::record::{CollaboratorRecord, Field};

/// Suggested download name for an exported roster.
pub const EXPORT_FILE_NAME: &str = "lista_colaboradores.csv";

/// A ready-to-download export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub content_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Write `records` as UTF-8 CSV with a canonical header row.
///
/// Values containing commas, quotes or newlines are quoted. An empty slice
/// still produces the header.
pub fn write_delimited(records: &[CollaboratorRecord]) -> Result<Vec<u8>, CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(Field::ALL.map(Field::as_str))
        .map_err(|e| CoreError::Internal(format!("CSV header write failed: {e}")))?;

    for record in records {
        writer
            .write_record(record.values())
            .map_err(|e| CoreError::Internal(format!("CSV row write failed: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| CoreError::Internal(format!("CSV flush failed: {e}")))
}

/// Bundle the CSV bytes with the download name and MIME type.
pub fn export_file(records: &[CollaboratorRecord]) -> Result<ExportFile, CoreError> {
    Ok(ExportFile {
        file_name: EXPORT_FILE_NAME,
        content_type: MIME_CSV,
        bytes: write_delimited(records)?,
    })
}
