//! Board seed data.
//!
//! # Responsibility
//! - Provide the bundled demo boards loaded at startup.
//! - Parse externally supplied JSON seeds into model records.
//!
//! # Invariants
//! - Seeded ids are non-nil; talk handles are generated on load.

use crate::model::board::{Board, ModelValidationError, Track};
use crate::model::talk::Talk;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from seed parsing.
#[derive(Debug)]
pub enum SeedError {
    /// Input is not a valid JSON board array.
    Json(serde_json::Error),
    /// A record failed model validation.
    Model(ModelValidationError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid board seed: {err}"),
            Self::Model(err) => write!(f, "invalid board seed: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Model(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ModelValidationError> for SeedError {
    fn from(value: ModelValidationError) -> Self {
        Self::Model(value)
    }
}

/// Parses a JSON array of boards.
///
/// # Errors
/// - `Json` on malformed input.
/// - `Model` when a board or track id is nil.
pub fn boards_from_json(input: &str) -> Result<Vec<Board>, SeedError> {
    let boards: Vec<Board> = serde_json::from_str(input)?;
    for board in &boards {
        if board.id.is_nil() || board.tracks.iter().any(|track| track.id.is_nil()) {
            return Err(SeedError::Model(ModelValidationError::NilId));
        }
    }
    Ok(boards)
}

/// Serializes boards into the seed JSON shape.
pub fn boards_to_json(boards: &[Board]) -> Result<String, SeedError> {
    serde_json::to_string_pretty(boards).map_err(Into::into)
}

/// Demo boards shown on first launch.
pub fn default_boards() -> Vec<Board> {
    vec![
        Board::new("Conference 2018")
            .with_track(
                Track::new("Submitted")
                    .with_talk(
                        Talk::new("Reactive forms with array fields")
                            .with_speaker("Ada Lovelace")
                            .with_tags(["forms", "angular"]),
                    )
                    .with_talk(
                        Talk::new("Drag and drop without tears")
                            .with_speaker("Grace Hopper")
                            .with_image("assets/dnd.png")
                            .with_tags(["cdk"]),
                    ),
            )
            .with_track(
                Track::new("Accepted").with_talk(
                    Talk::new("State without a store library").with_speaker("Alan Kay"),
                ),
            )
            .with_track(Track::new("Scheduled")),
        Board::new("Meetup")
            .with_track(
                Track::new("Ideas")
                    .with_talk(Talk::new("Lightning talks"))
                    .with_talk(Talk::new("Workshop night").with_tags(["hands-on"])),
            )
            .with_track(Track::new("Booked")),
    ]
}

#[cfg(test)]
mod tests {
    use super::default_boards;
    use std::collections::HashSet;

    #[test]
    fn default_boards_have_unique_track_ids() {
        let boards = default_boards();
        let mut seen = HashSet::new();
        for track in boards.iter().flat_map(|board| board.tracks.iter()) {
            assert!(seen.insert(track.id));
        }
    }
}
