//! Collaborator roster core: the record schema, the per-session record store,
//! and the spreadsheet/CSV codecs that feed and drain it.
//!
//! This crate has no async and no I/O of its own. The host hands it byte
//! slices and field maps and receives records, counts and CSV bytes back.

pub mod error;
pub mod export;
pub mod format;
pub mod import;
pub mod record;
pub mod store;
pub mod table;
