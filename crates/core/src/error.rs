/// Failure to turn an uploaded file into a record collection.
///
/// Every variant leaves the caller's store untouched; the import either
/// produces a complete collection or nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Failed to parse file: {0}")]
    Parse(String),
}

/// A position-based operation referenced a record that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Record index {index} is out of bounds (store holds {len} records)")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("Internal error: {0}")]
    Internal(String),
}
