//! Core data model and operations for the talk board.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{default_log_level, EditorPolicy, LoggingConfig};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::board::{Board, BoardId, ModelValidationError, Track, TrackId};
pub use model::talk::{Talk, TalkField, TalkFields, TalkId, TalkValidationError, NEW_TALK_TEXT};
pub use reorder::{move_within, transfer_between, ReorderError};
pub use seed::{boards_from_json, boards_to_json, default_boards, SeedError};
pub use service::board_service::{BoardService, BoardServiceError, DropRequest};
pub use service::talk_editor::{
    DialogOutcome, EditCommit, EditRequest, EditorError, EditorSession, EditorState, TalkDraft,
};
pub use store::board_store::{
    BoardRepository, InMemoryBoardStore, StoreError, StoreResult, TalkLocation,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
