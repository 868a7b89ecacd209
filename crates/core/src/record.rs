//! The collaborator record and its fixed seven-column schema.
//!
//! Column names are the wire names used in uploaded files, exported CSVs and
//! JSON bodies. The order of [`Field::ALL`] is the canonical column order.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One of the seven columns every record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "SAA")]
    Saa,
    #[serde(rename = "SAT")]
    Sat,
    #[serde(rename = "SAO")]
    Sao,
    #[serde(rename = "COLLABORATOR")]
    Collaborator,
    #[serde(rename = "SECTOR")]
    Sector,
    #[serde(rename = "CONTRACT")]
    Contract,
    #[serde(rename = "NOTE")]
    Note,
}

impl Field {
    /// All fields in canonical column order.
    pub const ALL: [Field; 7] = [
        Field::Saa,
        Field::Sat,
        Field::Sao,
        Field::Collaborator,
        Field::Sector,
        Field::Contract,
        Field::Note,
    ];

    /// Canonical column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Saa => "SAA",
            Self::Sat => "SAT",
            Self::Sao => "SAO",
            Self::Collaborator => "COLLABORATOR",
            Self::Sector => "SECTOR",
            Self::Contract => "CONTRACT",
            Self::Note => "NOTE",
        }
    }

    /// Header used by the Portuguese-language spreadsheets, if it differs
    /// from the canonical name.
    pub fn alias(self) -> Option<&'static str> {
        match self {
            Self::Collaborator => Some("COLABORADOR"),
            Self::Sector => Some("SETOR"),
            Self::Contract => Some("CONTRATO"),
            Self::Note => Some("OBSERVAÇÃO"),
            Self::Saa | Self::Sat | Self::Sao => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A single collaborator row.
///
/// Deserializing from a partial map fills the absent fields with empty
/// strings, which is how form submissions with blank inputs arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaboratorRecord {
    #[serde(rename = "SAA")]
    pub saa: String,
    #[serde(rename = "SAT")]
    pub sat: String,
    #[serde(rename = "SAO")]
    pub sao: String,
    #[serde(rename = "COLLABORATOR")]
    pub collaborator: String,
    #[serde(rename = "SECTOR")]
    pub sector: String,
    #[serde(rename = "CONTRACT")]
    pub contract: String,
    #[serde(rename = "NOTE")]
    pub note: String,
}

impl CollaboratorRecord {
    /// Build a record from `(field, value)` pairs. Fields not mentioned stay
    /// empty; a repeated field keeps the last value.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Field, S)>,
        S: Into<String>,
    {
        let mut record = Self::default();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Saa => &self.saa,
            Field::Sat => &self.sat,
            Field::Sao => &self.sao,
            Field::Collaborator => &self.collaborator,
            Field::Sector => &self.sector,
            Field::Contract => &self.contract,
            Field::Note => &self.note,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Saa => &mut self.saa,
            Field::Sat => &mut self.sat,
            Field::Sao => &mut self.sao,
            Field::Collaborator => &mut self.collaborator,
            Field::Sector => &mut self.sector,
            Field::Contract => &mut self.contract,
            Field::Note => &mut self.note,
        };
        *slot = value.into();
    }

    /// Field values in canonical column order.
    pub fn values(&self) -> [&str; 7] {
        Field::ALL.map(|f| self.get(f))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
