use talkboard_core::{
    Board, BoardRepository, BoardService, BoardServiceError, DropRequest, InMemoryBoardStore,
    ReorderError, StoreError, Talk, TalkId, Track, NEW_TALK_TEXT,
};
use uuid::Uuid;

struct Fixture {
    service: BoardService<InMemoryBoardStore>,
    board: Uuid,
    track_a: Uuid,
    track_b: Uuid,
    talk1: TalkId,
    talk2: TalkId,
}

fn setup() -> Fixture {
    let talk1 = Talk::new("Talk1").with_speaker("One");
    let talk2 = Talk::new("Talk2").with_speaker("Two");
    let (talk1_id, talk2_id) = (talk1.id, talk2.id);
    let track_a = Track::new("A").with_talk(talk1).with_talk(talk2);
    let track_b = Track::new("B");
    let (track_a_id, track_b_id) = (track_a.id, track_b.id);
    let board = Board::new("Main").with_track(track_a).with_track(track_b);
    let board_id = board.id;

    let store = InMemoryBoardStore::from_boards(vec![board, Board::new("Other")]).unwrap();
    Fixture {
        service: BoardService::new(store),
        board: board_id,
        track_a: track_a_id,
        track_b: track_b_id,
        talk1: talk1_id,
        talk2: talk2_id,
    }
}

fn talk_ids(service: &BoardService<InMemoryBoardStore>, board: Uuid, track: Uuid) -> Vec<TalkId> {
    service
        .repo()
        .track(board, track)
        .map(|track| track.talks.iter().map(|talk| talk.id).collect())
        .unwrap()
}

#[test]
fn current_board_is_unset_until_activation() {
    let mut fx = setup();
    assert!(fx.service.current_board().is_none());

    let activated = fx.service.activate(fx.board).unwrap();
    assert_eq!(activated.name, "Main");
    assert_eq!(fx.service.current_board().map(|b| b.id), Some(fx.board));
}

#[test]
fn activate_unknown_board_keeps_previous_selection() {
    let mut fx = setup();
    fx.service.activate(fx.board).unwrap();

    let unknown = Uuid::new_v4();
    let err = fx.service.activate(unknown).unwrap_err();
    assert_eq!(err, BoardServiceError::Store(StoreError::BoardNotFound(unknown)));
    assert_eq!(fx.service.current_board().map(|b| b.id), Some(fx.board));
}

#[test]
fn boards_are_returned_in_seed_order() {
    let fx = setup();
    let names = fx
        .service
        .boards()
        .iter()
        .map(|board| board.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Main", "Other"]);
}

#[test]
fn cross_track_drop_transfers_talk() {
    let mut fx = setup();
    fx.service
        .apply_drop(&DropRequest {
            board_id: fx.board,
            source_track: fx.track_a,
            dest_track: fx.track_b,
            from: 0,
            to: 0,
        })
        .unwrap();

    assert_eq!(talk_ids(&fx.service, fx.board, fx.track_a), vec![fx.talk2]);
    assert_eq!(talk_ids(&fx.service, fx.board, fx.track_b), vec![fx.talk1]);
    assert_eq!(fx.service.repo().board(fx.board).unwrap().talk_count(), 2);

    let location = fx.service.repo().locate_talk(fx.talk1).unwrap();
    assert_eq!(location.track_id, fx.track_b);
    assert_eq!(location.index, 0);
}

#[test]
fn same_track_drop_reorders_talks() {
    let mut fx = setup();
    fx.service
        .apply_drop(&DropRequest {
            board_id: fx.board,
            source_track: fx.track_a,
            dest_track: fx.track_a,
            from: 1,
            to: 0,
        })
        .unwrap();

    assert_eq!(
        talk_ids(&fx.service, fx.board, fx.track_a),
        vec![fx.talk2, fx.talk1]
    );
}

#[test]
fn invalid_drop_leaves_board_unchanged() {
    let mut fx = setup();
    let before = fx.service.repo().board(fx.board).unwrap().clone();

    let err = fx
        .service
        .apply_drop(&DropRequest {
            board_id: fx.board,
            source_track: fx.track_a,
            dest_track: fx.track_b,
            from: 0,
            to: 5,
        })
        .unwrap_err();
    assert_eq!(
        err,
        BoardServiceError::Reorder(ReorderError::TargetIndexOutOfRange { index: 5, len: 0 })
    );

    let unknown_track = Uuid::new_v4();
    let err = fx
        .service
        .apply_drop(&DropRequest {
            board_id: fx.board,
            source_track: fx.track_a,
            dest_track: unknown_track,
            from: 0,
            to: 0,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        BoardServiceError::Store(StoreError::TrackNotFound { track_id, .. }) if track_id == unknown_track
    ));

    assert_eq!(fx.service.repo().board(fx.board).unwrap(), &before);
}

#[test]
fn move_track_reorders_columns() {
    let mut fx = setup();
    fx.service.move_track(fx.board, 0, 1).unwrap();

    let order = fx
        .service
        .repo()
        .board(fx.board)
        .unwrap()
        .tracks
        .iter()
        .map(|track| track.id)
        .collect::<Vec<_>>();
    assert_eq!(order, vec![fx.track_b, fx.track_a]);
}

#[test]
fn add_new_talk_prepends_default_card() {
    let mut fx = setup();
    let new_id = fx.service.add_new_talk(fx.board, fx.track_a).unwrap();

    let ids = talk_ids(&fx.service, fx.board, fx.track_a);
    assert_eq!(ids, vec![new_id, fx.talk1, fx.talk2]);

    let track = fx
        .service
        .repo()
        .board(fx.board)
        .and_then(|board| board.track(fx.track_a))
        .unwrap();
    assert_eq!(track.talks[0].text, NEW_TALK_TEXT);
}

#[test]
fn add_new_talk_to_unknown_track_fails() {
    let mut fx = setup();
    let missing = Uuid::new_v4();
    let err = fx.service.add_new_talk(fx.board, missing).unwrap_err();
    assert_eq!(
        err,
        BoardServiceError::Store(StoreError::TrackNotFound {
            board_id: fx.board,
            track_id: missing,
        })
    );
}
