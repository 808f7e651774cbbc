//! Board store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Own the canonical board collection and the active-board pointer.
//! - Expose read access plus narrowly scoped mutation to services.
//!
//! # Invariants
//! - Board membership is fixed once the store is built.
//! - The active board, when set, is always a member of the collection.

pub mod board_store;
