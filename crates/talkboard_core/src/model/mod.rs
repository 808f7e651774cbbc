//! Board/track/talk domain model.
//!
//! # Responsibility
//! - Define the value shapes rendered by the board UI.
//! - Encode containment: a board owns its tracks, a track owns its talks.
//!
//! # Invariants
//! - Every talk lives in exactly one track's `talks` sequence.
//! - Every track lives in exactly one board's `tracks` sequence.
//! - Sequence order is display order and is never re-sorted implicitly.

pub mod board;
pub mod talk;
