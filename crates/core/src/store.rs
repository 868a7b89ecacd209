//! In-memory record store for one session.
//!
//! Records are addressed by position. Positions are always `0..len()`;
//! removing a record shifts every later record down by one.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, IndexError};
use crate::export::{export_file, write_delimited, ExportFile};
use crate::record::CollaboratorRecord;

// ---------------------------------------------------------------------------
// Status buckets
// ---------------------------------------------------------------------------

/// `NOTE` value (after normalisation) that marks an active collaborator.
pub const STATUS_ACTIVE: &str = "ativo";

/// `NOTE` value (after normalisation) that marks an inactive collaborator.
pub const STATUS_INACTIVE: &str = "inativo";

/// Trim surrounding whitespace and lower-case. Inner whitespace and accents
/// are left alone.
fn normalize_status(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Headline counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<CollaboratorRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CollaboratorRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CollaboratorRecord> {
        self.records.get(index)
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(IndexError {
                index,
                len: self.records.len(),
            })
        }
    }

    /// Append a record and return its position.
    pub fn add(&mut self, record: CollaboratorRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Replace the record at `index`.
    pub fn update_at(&mut self, index: usize, record: CollaboratorRecord) -> Result<(), IndexError> {
        self.check_index(index)?;
        self.records[index] = record;
        Ok(())
    }

    /// Remove and return the record at `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<CollaboratorRecord, IndexError> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Discard every record and install `records` in their given order.
    pub fn replace_all(&mut self, records: Vec<CollaboratorRecord>) {
        self.records = records;
    }

    /// Count records whose `NOTE` matches `target`, ignoring case and
    /// surrounding whitespace on both sides.
    pub fn count_where(&self, target: &str) -> usize {
        let target = normalize_status(target);
        self.records
            .iter()
            .filter(|r| normalize_status(&r.note) == target)
            .count()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.len(),
            active: self.count_where(STATUS_ACTIVE),
            inactive: self.count_where(STATUS_INACTIVE),
        }
    }

    /// The whole store as CSV bytes.
    pub fn export_delimited(&self) -> Result<Vec<u8>, CoreError> {
        write_delimited(&self.records)
    }

    pub fn export(&self) -> Result<ExportFile, CoreError> {
        export_file(&self.records)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
