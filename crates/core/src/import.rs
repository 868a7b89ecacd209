//! Tabular import: resolve the declared format, parse, check that every
//! required column is present and project rows onto [`CollaboratorRecord`].
//!
//! The importer never touches a store. Callers install the returned
//! collection with [`crate::store::RecordStore::replace_all`] only when the
//! whole import succeeded.

use crate::error::ImportError;
use crate::format::SourceFormat;
use crate::record::{CollaboratorRecord, Field};
use crate::table::RawTable;

/// Parse `bytes` as `content_type` and return one record per data row, in
/// file order.
pub fn import(bytes: &[u8], content_type: &str) -> Result<Vec<CollaboratorRecord>, ImportError> {
    let format = SourceFormat::from_content_type(content_type)?;
    let table = RawTable::parse(bytes, format)?;
    project(&table)
}

/// Column position of each field, in canonical order.
///
/// A canonical header takes precedence over its alias when both appear.
pub fn resolve_columns(table: &RawTable) -> Result<[usize; 7], ImportError> {
    let mut missing = Vec::new();
    let mut positions = [0usize; 7];

    for (slot, field) in Field::ALL.into_iter().enumerate() {
        let found = table
            .column_index(field.as_str())
            .or_else(|| field.alias().and_then(|alias| table.column_index(alias)));

        match found {
            Some(pos) => positions[slot] = pos,
            None => missing.push(field.as_str().to_string()),
        }
    }

    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(ImportError::MissingColumns(missing))
    }
}

/// Validate the header and keep only the seven recognised columns.
pub fn project(table: &RawTable) -> Result<Vec<CollaboratorRecord>, ImportError> {
    let positions = resolve_columns(table)?;

    let records = table
        .rows
        .iter()
        .map(|row| {
            CollaboratorRecord::from_pairs(
                Field::ALL
                    .into_iter()
                    .zip(positions)
                    .map(|(field, pos)| (field, row.get(pos).cloned().unwrap_or_default())),
            )
        })
        .collect();

    Ok(records)
}
