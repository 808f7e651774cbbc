//! Core use-case services.
//!
//! # Responsibility
//! - Turn resolved UI requests (activation, drops, edits) into store updates.
//! - Keep the view layer decoupled from sequence bookkeeping.

pub mod board_service;
pub mod talk_editor;
