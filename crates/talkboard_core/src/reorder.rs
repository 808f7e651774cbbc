//! Reorder engine for drag-and-drop.
//!
//! # Responsibility
//! - Move one element within a sequence, or transfer it between two.
//! - Stay agnostic of the gesture that produced the request.
//!
//! # Invariants
//! - On success every other element keeps its relative order.
//! - On error both sequences are left untouched.
//! - Transfers move the owned element; nothing is cloned.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Index bounds violation for a move/transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    /// `from` does not address an element of the source sequence.
    SourceIndexOutOfRange { index: usize, len: usize },
    /// `to` is outside the valid insertion range of the target sequence.
    TargetIndexOutOfRange { index: usize, len: usize },
}

impl Display for ReorderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceIndexOutOfRange { index, len } => {
                write!(f, "source index {index} out of range for length {len}")
            }
            Self::TargetIndexOutOfRange { index, len } => {
                write!(f, "target index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for ReorderError {}

/// Moves the element at `from` so that it ends up at `to`.
///
/// Both indices must address existing elements. `from == to` is a no-op.
///
/// # Errors
/// - `SourceIndexOutOfRange` when `from >= seq.len()`.
/// - `TargetIndexOutOfRange` when `to >= seq.len()`.
pub fn move_within<T>(seq: &mut [T], from: usize, to: usize) -> Result<(), ReorderError> {
    let len = seq.len();
    if from >= len {
        return Err(ReorderError::SourceIndexOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(ReorderError::TargetIndexOutOfRange { index: to, len });
    }

    // Rotating the spanned window shifts the in-between elements by one.
    if from < to {
        seq[from..=to].rotate_left(1);
    } else if from > to {
        seq[to..=from].rotate_right(1);
    }
    debug!("event=move_within module=reorder status=ok from={from} to={to} len={len}");
    Ok(())
}

/// Removes the element at `from` in `source` and inserts it at `to` in `dest`.
///
/// `to == dest.len()` appends. Source and destination cannot alias because
/// both are taken by unique reference.
///
/// # Errors
/// - `SourceIndexOutOfRange` when `from >= source.len()`.
/// - `TargetIndexOutOfRange` when `to > dest.len()`.
pub fn transfer_between<T>(
    source: &mut Vec<T>,
    dest: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<(), ReorderError> {
    if from >= source.len() {
        return Err(ReorderError::SourceIndexOutOfRange {
            index: from,
            len: source.len(),
        });
    }
    if to > dest.len() {
        return Err(ReorderError::TargetIndexOutOfRange {
            index: to,
            len: dest.len(),
        });
    }

    let item = source.remove(from);
    dest.insert(to, item);
    debug!(
        "event=transfer_between module=reorder status=ok from={from} to={to} source_len={} dest_len={}",
        source.len(),
        dest.len()
    );
    Ok(())
}
