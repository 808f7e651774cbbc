use talkboard_core::{move_within, transfer_between, ReorderError, Talk};

#[test]
fn move_to_same_index_is_noop() {
    let mut seq = vec!["t1", "t2", "t3"];
    for index in 0..seq.len() {
        move_within(&mut seq, index, index).unwrap();
    }
    assert_eq!(seq, vec!["t1", "t2", "t3"]);
}

#[test]
fn move_first_to_last_shifts_others_left() {
    let mut seq = vec!["t1", "t2", "t3"];
    move_within(&mut seq, 0, 2).unwrap();
    assert_eq!(seq, vec!["t2", "t3", "t1"]);
}

#[test]
fn move_preserves_length_and_elements_for_every_pair() {
    let original = vec![10, 20, 30, 40, 50];
    for from in 0..original.len() {
        for to in 0..original.len() {
            let mut seq = original.clone();
            move_within(&mut seq, from, to).unwrap();
            assert_eq!(seq.len(), original.len());
            assert_eq!(seq[to], original[from]);

            let mut sorted = seq.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, original);

            let others = seq.iter().filter(|v| **v != original[from]).collect::<Vec<_>>();
            let expected = original
                .iter()
                .filter(|v| **v != original[from])
                .collect::<Vec<_>>();
            assert_eq!(others, expected);
        }
    }
}

#[test]
fn move_out_of_range_is_rejected_without_mutation() {
    let mut seq = vec![1, 2, 3];
    assert_eq!(
        move_within(&mut seq, 3, 0).unwrap_err(),
        ReorderError::SourceIndexOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        move_within(&mut seq, 0, 3).unwrap_err(),
        ReorderError::TargetIndexOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(seq, vec![1, 2, 3]);
}

#[test]
fn move_within_empty_sequence_is_rejected() {
    let mut seq: Vec<u8> = Vec::new();
    assert!(move_within(&mut seq, 0, 0).is_err());
}

#[test]
fn transfer_moves_talk_into_empty_track() {
    let talk1 = Talk::new("Talk1");
    let talk2 = Talk::new("Talk2");
    let (id1, id2) = (talk1.id, talk2.id);
    let mut track_a = vec![talk1, talk2];
    let mut track_b: Vec<Talk> = Vec::new();

    transfer_between(&mut track_a, &mut track_b, 0, 0).unwrap();

    assert_eq!(track_a.len(), 1);
    assert_eq!(track_a[0].id, id2);
    assert_eq!(track_b.len(), 1);
    assert_eq!(track_b[0].id, id1);
}

#[test]
fn transfer_allows_append_and_removes_from_source() {
    let mut source = vec!['a', 'b', 'c'];
    let mut dest = vec!['x', 'y'];

    transfer_between(&mut source, &mut dest, 1, 2).unwrap();

    assert_eq!(source, vec!['a', 'c']);
    assert_eq!(dest, vec!['x', 'y', 'b']);
}

#[test]
fn transfer_from_empty_source_is_rejected() {
    let mut source: Vec<char> = Vec::new();
    let mut dest = vec!['x'];
    let err = transfer_between(&mut source, &mut dest, 0, 0).unwrap_err();
    assert_eq!(err, ReorderError::SourceIndexOutOfRange { index: 0, len: 0 });
    assert_eq!(dest, vec!['x']);
}
