use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::First.opponent(), Player::Second);
    assert_eq!(Player::Second.opponent(), Player::First);
}

#[test]
fn test_player_rows() {
    assert_eq!(Player::First.goal_row(), 7);
    assert_eq!(Player::Second.goal_row(), 0);
    assert_eq!(Player::First.start_row(), 1);
    assert_eq!(Player::Second.start_row(), 6);
}

#[test]
fn test_player_index_roundtrip() {
    for p in Player::BOTH {
        assert_eq!(Player::from_index(p.index()), Some(p));
    }
    assert_eq!(Player::from_index(2), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 5);
    assert_eq!(pos.to_index(), 29);
    assert_eq!(Pos::from_index(29), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 8));
    assert!(Pos::new(7, 7).on_board());
    assert!(!Pos { row: 8, col: 0 }.on_board());
    assert!(!Pos { row: 0, col: 8 }.on_board());
}

#[test]
fn test_pos_offset_off_board() {
    assert_eq!(Pos::new(0, 0).step(Direction::N), None);
    assert_eq!(Pos::new(0, 0).step(Direction::W), None);
    assert_eq!(Pos::new(0, 0).step(Direction::S), Some(Pos::new(1, 0)));
    assert_eq!(Pos::new(7, 7).offset(2, 0), None);
}

#[test]
fn test_direction_deltas() {
    assert_eq!(Direction::N.delta(), (-1, 0));
    assert_eq!(Direction::S.delta(), (1, 0));
    assert_eq!(Direction::E.delta(), (0, 1));
    assert_eq!(Direction::W.delta(), (0, -1));
}

#[test]
fn test_prongs_reject_duplicates() {
    let mut prongs = Prongs::new();
    assert!(prongs.push(Direction::E));
    assert!(!prongs.push(Direction::E));
    assert_eq!(prongs.len(), 1);

    let from = Prongs::from_slice(&[Direction::S, Direction::S, Direction::N]);
    assert_eq!(from.as_slice(), &[Direction::S, Direction::N]);
}

#[test]
fn test_prongs_pop_is_last_attached() {
    let mut prongs = Prongs::from_slice(&[Direction::W, Direction::N, Direction::E]);
    assert_eq!(prongs.pop(), Some(Direction::E));
    assert_eq!(prongs.pop(), Some(Direction::N));
    assert_eq!(prongs.as_slice(), &[Direction::W]);
}

#[test]
fn test_prongs_equality_ignores_popped_slots() {
    let mut a = Prongs::from_slice(&[Direction::S, Direction::E]);
    a.pop();
    let b = Prongs::from_slice(&[Direction::S]);
    assert_eq!(a, b);
}

#[test]
fn test_prongs_missing() {
    let prongs = Prongs::from_slice(&[Direction::S]);
    let missing: Vec<_> = prongs.missing().collect();
    assert_eq!(missing, vec![Direction::N, Direction::E, Direction::W]);
}

#[test]
fn test_starting_board() {
    let board = Board::starting();
    assert_eq!(board.pod_count(Player::First), 4);
    assert_eq!(board.pod_count(Player::Second), 4);
    for col in 2..6 {
        let pod = board.cell_at(Pos::new(1, col)).expect("player 0 pod");
        assert_eq!(pod.owner, Player::First);
        assert!(pod.prongs.is_empty());
        let pod = board.cell_at(Pos::new(6, col)).expect("player 1 pod");
        assert_eq!(pod.owner, Player::Second);
    }
    assert!(board.is_empty(Pos::new(0, 0)));
}

#[test]
fn test_bases() {
    let board = Board::new();
    assert_eq!(
        board.bases_of(Player::First),
        [Pos::new(1, 2), Pos::new(1, 3), Pos::new(1, 4), Pos::new(1, 5)]
    );
    assert_eq!(
        board.bases_of(Player::Second),
        [Pos::new(6, 2), Pos::new(6, 3), Pos::new(6, 4), Pos::new(6, 5)]
    );
}

#[test]
fn test_place_pod_overwrites() {
    let mut board = Board::new();
    let pos = Pos::new(4, 4);
    board.place_pod(pos, Player::First, &[Direction::N]);
    board.place_pod(pos, Player::Second, &[]);
    assert_eq!(board.owner_at(pos), Some(Player::Second));
    assert_eq!(board.total_pods(), 1);
}

#[test]
fn test_pods_of_row_major() {
    let board = Board::starting();
    let positions: Vec<_> = board.pods_of(Player::Second).map(|(p, _)| p).collect();
    assert_eq!(positions, board.bases_of(Player::Second).to_vec());
}

#[test]
fn test_board_display() {
    let board = Board::starting();
    let text = board.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], ". . . . . . . .");
    assert_eq!(lines[1], ". . 0 0 0 0 . .");
    assert_eq!(lines[6], ". . 1 1 1 1 . .");
}
