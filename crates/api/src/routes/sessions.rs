//! Route definitions for sessions and their rosters.
//!
//! Mounted at `/sessions`:
//! ```text
//! POST   /                                  -> create_session
//! GET    /{session_id}                      -> get_session
//! DELETE /{session_id}                      -> delete_session
//! GET    /{session_id}/records              -> list_records
//! POST   /{session_id}/records              -> add_record
//! PUT    /{session_id}/records/{index}      -> update_record
//! DELETE /{session_id}/records/{index}      -> delete_record
//! GET    /{session_id}/summary              -> get_summary
//! POST   /{session_id}/import               -> import_body
//! POST   /{session_id}/upload               -> import_multipart
//! GET    /{session_id}/export               -> export_csv
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{records, session, transfer};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(session::create_session))
        .route(
            "/{session_id}",
            get(session::get_session).delete(session::delete_session),
        )
        .route(
            "/{session_id}/records",
            get(records::list_records).post(records::add_record),
        )
        .route(
            "/{session_id}/records/{index}",
            put(records::update_record).delete(records::delete_record),
        )
        .route("/{session_id}/summary", get(records::get_summary))
        .route("/{session_id}/import", post(transfer::import_body))
        .route("/{session_id}/upload", post(transfer::import_multipart))
        .route("/{session_id}/export", get(transfer::export_csv))
}
