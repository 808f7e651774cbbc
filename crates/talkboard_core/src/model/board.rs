//! Board and track records.
//!
//! # Invariants
//! - `id` is stable and non-nil for every board and track.
//! - A board exclusively owns its tracks; a track exclusively owns its talks.

use crate::model::talk::{Talk, TalkId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a board.
pub type BoardId = Uuid;

/// Stable identifier of a track (board column).
pub type TrackId = Uuid;

/// Constructor-level validation failures for model records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Caller supplied `Uuid::nil()` as a stable id.
    NilId,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be nil"),
        }
    }
}

impl Error for ModelValidationError {}

/// Top-level container a user activates to view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    /// Columns in display order.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Board {
    /// Creates an empty board with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Creates an empty board with a caller-provided id.
    ///
    /// Used by seed/import paths where identity already exists.
    pub fn with_id(id: BoardId, name: impl Into<String>) -> Result<Self, ModelValidationError> {
        if id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        Ok(Self {
            id,
            name: name.into(),
            tracks: Vec::new(),
        })
    }

    /// Builder-style append used when assembling seed data.
    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn track(&self, track_id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == track_id)
    }

    pub fn track_mut(&mut self, track_id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|track| track.id == track_id)
    }

    /// Returns the position of a track in display order.
    pub fn track_index(&self, track_id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|track| track.id == track_id)
    }

    /// Total number of talks across all tracks.
    pub fn talk_count(&self) -> usize {
        self.tracks.iter().map(|track| track.talks.len()).sum()
    }
}

/// A column holding an ordered list of talks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    /// Talk cards in display order; index 0 is rendered first.
    #[serde(default)]
    pub talks: Vec<Talk>,
}

impl Track {
    /// Creates an empty track with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            talks: Vec::new(),
        }
    }

    /// Creates an empty track with a caller-provided id.
    pub fn with_id(id: TrackId, name: impl Into<String>) -> Result<Self, ModelValidationError> {
        if id.is_nil() {
            return Err(ModelValidationError::NilId);
        }
        Ok(Self {
            id,
            name: name.into(),
            talks: Vec::new(),
        })
    }

    pub fn with_talk(mut self, talk: Talk) -> Self {
        self.talks.push(talk);
        self
    }

    pub fn talk(&self, talk_id: TalkId) -> Option<&Talk> {
        self.talks.iter().find(|talk| talk.id == talk_id)
    }

    pub fn talk_mut(&mut self, talk_id: TalkId) -> Option<&mut Talk> {
        self.talks.iter_mut().find(|talk| talk.id == talk_id)
    }

    /// Prepends the default "New talk" card.
    ///
    /// # Invariants
    /// - The new talk is always at index 0; existing talks shift by one.
    pub fn add_new_talk(&mut self) -> &mut Talk {
        self.talks.insert(0, Talk::placeholder());
        &mut self.talks[0]
    }
}
