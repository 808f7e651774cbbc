//! Board store contract and in-memory implementation.
//!
//! # Invariants
//! - Board ids, track ids and talk handles are unique across the whole store.
//! - `current_board_id` is `None` until the first successful activation.
//! - Callers receive slices, never the owning `Vec`, so membership cannot
//!   change through this API.

use crate::model::board::{Board, BoardId, Track, TrackId};
use crate::model::talk::{Talk, TalkId};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Lookup and construction failures of the board store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No board with this id is held by the store.
    BoardNotFound(BoardId),
    /// Board exists but has no track with this id.
    TrackNotFound {
        board_id: BoardId,
        track_id: TrackId,
    },
    /// No track in the store holds a talk with this handle.
    TalkNotFound(TalkId),
    /// Two boards in the initial collection share one id.
    DuplicateBoard(BoardId),
    /// Two tracks in the initial collection share one id.
    DuplicateTrack(TrackId),
    /// One talk handle appears more than once in the initial collection.
    DuplicateTalk(TalkId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoardNotFound(id) => write!(f, "board not found: {id}"),
            Self::TrackNotFound { board_id, track_id } => {
                write!(f, "track {track_id} not found on board {board_id}")
            }
            Self::TalkNotFound(id) => write!(f, "talk not found: {id}"),
            Self::DuplicateBoard(id) => write!(f, "duplicate board id: {id}"),
            Self::DuplicateTrack(id) => write!(f, "duplicate track id: {id}"),
            Self::DuplicateTalk(id) => write!(f, "duplicate talk handle: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Position of one talk inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TalkLocation {
    pub board_id: BoardId,
    pub track_id: TrackId,
    pub index: usize,
}

/// Store interface consumed by board and editor services.
pub trait BoardRepository {
    /// Full collection in display order.
    fn boards(&self) -> &[Board];
    /// Mutable view over boards; membership stays fixed.
    fn boards_mut(&mut self) -> &mut [Board];
    /// Id of the active board, if any board was activated.
    fn current_board_id(&self) -> Option<BoardId>;
    /// Points the active board at `board_id`.
    fn activate(&mut self, board_id: BoardId) -> StoreResult<()>;

    fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards().iter().find(|board| board.id == board_id)
    }

    fn board_mut(&mut self, board_id: BoardId) -> Option<&mut Board> {
        self.boards_mut()
            .iter_mut()
            .find(|board| board.id == board_id)
    }

    fn track(&self, board_id: BoardId, track_id: TrackId) -> Option<&Track> {
        self.board(board_id).and_then(|board| board.track(track_id))
    }

    /// Active board, or `None` before the first activation.
    fn current_board(&self) -> Option<&Board> {
        self.current_board_id()
            .and_then(|board_id| self.board(board_id))
    }

    /// Locates a talk by handle across all boards.
    fn locate_talk(&self, talk_id: TalkId) -> Option<TalkLocation> {
        self.boards().iter().find_map(|board| {
            board.tracks.iter().find_map(|track| {
                track
                    .talks
                    .iter()
                    .position(|talk| talk.id == talk_id)
                    .map(|index| TalkLocation {
                        board_id: board.id,
                        track_id: track.id,
                        index,
                    })
            })
        })
    }

    fn find_talk(&self, talk_id: TalkId) -> Option<&Talk> {
        self.boards()
            .iter()
            .flat_map(|board| board.tracks.iter())
            .find_map(|track| track.talk(talk_id))
    }

    fn talk_mut(&mut self, talk_id: TalkId) -> Option<&mut Talk> {
        self.boards_mut()
            .iter_mut()
            .flat_map(|board| board.tracks.iter_mut())
            .find_map(|track| track.talk_mut(talk_id))
    }
}

/// Process-local board store; the single owner of all boards.
#[derive(Debug, Default)]
pub struct InMemoryBoardStore {
    boards: Vec<Board>,
    current: Option<BoardId>,
}

impl InMemoryBoardStore {
    /// Builds a store from seed boards.
    ///
    /// # Errors
    /// - `DuplicateBoard` / `DuplicateTrack` / `DuplicateTalk` when ids collide.
    pub fn from_boards(boards: Vec<Board>) -> StoreResult<Self> {
        let mut board_ids = HashSet::new();
        let mut track_ids = HashSet::new();
        let mut talk_ids = HashSet::new();
        for board in &boards {
            if !board_ids.insert(board.id) {
                return Err(StoreError::DuplicateBoard(board.id));
            }
            for track in &board.tracks {
                if !track_ids.insert(track.id) {
                    return Err(StoreError::DuplicateTrack(track.id));
                }
                for talk in &track.talks {
                    if !talk_ids.insert(talk.id) {
                        return Err(StoreError::DuplicateTalk(talk.id));
                    }
                }
            }
        }

        info!(
            "event=store_init module=store status=ok boards={} tracks={} talks={}",
            board_ids.len(),
            track_ids.len(),
            talk_ids.len()
        );
        Ok(Self {
            boards,
            current: None,
        })
    }
}

impl BoardRepository for InMemoryBoardStore {
    fn boards(&self) -> &[Board] {
        &self.boards
    }

    fn boards_mut(&mut self) -> &mut [Board] {
        &mut self.boards
    }

    fn current_board_id(&self) -> Option<BoardId> {
        self.current
    }

    fn activate(&mut self, board_id: BoardId) -> StoreResult<()> {
        if self.board(board_id).is_none() {
            warn!("event=board_activate module=store status=error reason=not_found board_id={board_id}");
            return Err(StoreError::BoardNotFound(board_id));
        }
        self.current = Some(board_id);
        info!("event=board_activate module=store status=ok board_id={board_id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardRepository, InMemoryBoardStore, StoreError};
    use crate::model::board::{Board, Track};
    use crate::model::talk::Talk;

    #[test]
    fn from_boards_rejects_track_shared_between_boards() {
        let track = Track::new("Shared");
        let first = Board::new("First").with_track(track.clone());
        let second = Board::new("Second").with_track(track.clone());

        let err = InMemoryBoardStore::from_boards(vec![first, second]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateTrack(track.id));
    }

    #[test]
    fn from_boards_rejects_talk_cloned_into_two_tracks() {
        let talk = Talk::new("Shared talk");
        let board = Board::new("Board")
            .with_track(Track::new("A").with_talk(talk.clone()))
            .with_track(Track::new("B").with_talk(talk.clone()));

        let err = InMemoryBoardStore::from_boards(vec![board]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateTalk(talk.id));
    }

    #[test]
    fn track_and_find_talk_resolve_nested_records() {
        let talk = Talk::new("Nested");
        let track = Track::new("Lane").with_talk(talk.clone());
        let track_id = track.id;
        let board = Board::new("Board").with_track(track);
        let board_id = board.id;
        let store = InMemoryBoardStore::from_boards(vec![board]).unwrap();

        assert_eq!(store.track(board_id, track_id).map(|t| t.name.as_str()), Some("Lane"));
        assert_eq!(store.find_talk(talk.id).map(|t| t.text.as_str()), Some("Nested"));
        assert!(store.find_talk(uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn empty_store_has_no_current_board() {
        let store = InMemoryBoardStore::default();
        assert!(store.boards().is_empty());
        assert!(store.current_board().is_none());
    }
}
