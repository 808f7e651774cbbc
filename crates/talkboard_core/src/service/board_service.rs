//! Board use-case service.
//!
//! # Responsibility
//! - Activate boards for the view layer.
//! - Dispatch resolved drop requests to the reorder engine.
//! - Apply committed talk edits and "add talk" actions in place.
//!
//! # Invariants
//! - A drop never changes the total number of talks on a board.
//! - Committed edits keep the talk's handle and position.
//! - Failed operations leave the store unchanged.

use crate::config::EditorPolicy;
use crate::model::board::{Board, BoardId, Track, TrackId};
use crate::model::talk::{Talk, TalkId, TalkValidationError};
use crate::reorder::{move_within, transfer_between, ReorderError};
use crate::service::talk_editor::{EditCommit, TalkDraft};
use crate::store::board_store::{BoardRepository, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from board service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Board, track or talk lookup failed.
    Store(StoreError),
    /// Drop indices do not fit the addressed sequences.
    Reorder(ReorderError),
    /// Draft failed required-field validation.
    Validation(TalkValidationError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Reorder(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Reorder(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<StoreError> for BoardServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ReorderError> for BoardServiceError {
    fn from(value: ReorderError) -> Self {
        Self::Reorder(value)
    }
}

impl From<TalkValidationError> for BoardServiceError {
    fn from(value: TalkValidationError) -> Self {
        Self::Validation(value)
    }
}

/// A drop gesture already resolved into container ids and indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropRequest {
    pub board_id: BoardId,
    pub source_track: TrackId,
    pub dest_track: TrackId,
    /// Index in the source track before the move.
    pub from: usize,
    /// Index in the destination track after the move.
    pub to: usize,
}

impl DropRequest {
    pub fn is_transfer(&self) -> bool {
        self.source_track != self.dest_track
    }
}

/// Board service facade.
pub struct BoardService<R: BoardRepository> {
    repo: R,
}

impl<R: BoardRepository> BoardService<R> {
    /// Creates service from repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn boards(&self) -> &[Board] {
        self.repo.boards()
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.repo.current_board()
    }

    /// Makes `board_id` the active board and returns it.
    pub fn activate(&mut self, board_id: BoardId) -> Result<&Board, BoardServiceError> {
        self.repo.activate(board_id)?;
        self.repo
            .board(board_id)
            .ok_or(BoardServiceError::Store(StoreError::BoardNotFound(board_id)))
    }

    /// Applies one talk drop within a track or across two tracks.
    pub fn apply_drop(&mut self, request: &DropRequest) -> Result<(), BoardServiceError> {
        let board = self.board_mut(request.board_id)?;
        let source_index = track_index(board, request.source_track)?;

        let result = if request.is_transfer() {
            let dest_index = track_index(board, request.dest_track)?;
            let (source, dest) = two_tracks_mut(&mut board.tracks, source_index, dest_index);
            transfer_between(&mut source.talks, &mut dest.talks, request.from, request.to)
        } else {
            move_within(
                &mut board.tracks[source_index].talks,
                request.from,
                request.to,
            )
        };

        match result {
            Ok(()) => {
                info!(
                    "event=talk_drop module=board status=ok board_id={} transfer={} from={} to={}",
                    request.board_id,
                    request.is_transfer(),
                    request.from,
                    request.to
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=talk_drop module=board status=error board_id={} error={err}",
                    request.board_id
                );
                Err(err.into())
            }
        }
    }

    /// Reorders tracks (columns) on one board.
    pub fn move_track(
        &mut self,
        board_id: BoardId,
        from: usize,
        to: usize,
    ) -> Result<(), BoardServiceError> {
        let board = self.board_mut(board_id)?;
        move_within(&mut board.tracks, from, to)?;
        info!("event=track_move module=board status=ok board_id={board_id} from={from} to={to}");
        Ok(())
    }

    /// Prepends a default talk to a track and returns its handle.
    pub fn add_new_talk(
        &mut self,
        board_id: BoardId,
        track_id: TrackId,
    ) -> Result<TalkId, BoardServiceError> {
        let board = self.board_mut(board_id)?;
        let track = board
            .track_mut(track_id)
            .ok_or(StoreError::TrackNotFound { board_id, track_id })?;
        let talk_id = track.add_new_talk().id;
        info!(
            "event=talk_add module=board status=ok board_id={board_id} track_id={track_id} talks={}",
            track.talks.len()
        );
        Ok(talk_id)
    }

    /// Overwrites the addressed talk with committed values.
    pub fn commit_edit(&mut self, commit: EditCommit) -> Result<&Talk, BoardServiceError> {
        let talk_id = commit.talk_id;
        let talk = self
            .repo
            .talk_mut(talk_id)
            .ok_or(StoreError::TalkNotFound(talk_id))?;
        talk.apply_fields(commit.fields);
        info!("event=talk_commit module=board status=ok talk_id={talk_id}");
        Ok(talk)
    }

    /// Validates a draft and commits it in one step.
    pub fn commit_draft(
        &mut self,
        draft: TalkDraft,
        policy: &EditorPolicy,
    ) -> Result<&Talk, BoardServiceError> {
        let talk_id = draft.talk_id();
        let commit = draft.into_commit(policy).map_err(|err| {
            warn!(
                "event=talk_commit module=board status=error talk_id={talk_id} missing={}",
                err.missing_fields.len()
            );
            err
        })?;
        self.commit_edit(commit)
    }

    fn board_mut(&mut self, board_id: BoardId) -> Result<&mut Board, BoardServiceError> {
        self.repo
            .board_mut(board_id)
            .ok_or(BoardServiceError::Store(StoreError::BoardNotFound(board_id)))
    }
}

fn track_index(board: &Board, track_id: TrackId) -> Result<usize, StoreError> {
    board.track_index(track_id).ok_or(StoreError::TrackNotFound {
        board_id: board.id,
        track_id,
    })
}

/// Borrows two distinct tracks mutably. `first != second` is required.
fn two_tracks_mut(tracks: &mut [Track], first: usize, second: usize) -> (&mut Track, &mut Track) {
    if first < second {
        let (head, tail) = tracks.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = tracks.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}

#[cfg(test)]
mod tests {
    use super::two_tracks_mut;
    use crate::model::board::Track;

    #[test]
    fn two_tracks_mut_returns_requested_order() {
        let mut tracks = vec![Track::new("a"), Track::new("b"), Track::new("c")];
        let (first, second) = two_tracks_mut(&mut tracks, 2, 0);
        assert_eq!(first.name, "c");
        assert_eq!(second.name, "a");
    }
}
