//! Tests for match control: execution, turn handling, scoring, stalemate.

use strictly_soccer::{CellKind, Coord, Match, Move, MoveError, Outcome, Phase, Side};

#[test]
fn test_wrong_turn_rejected_without_mutation() {
    let mut game = Match::start_default().unwrap();
    let before = game.clone();
    let err = game.attempt_move(Side::B, Coord::new(5, 4)).unwrap_err();
    assert_eq!(err, MoveError::WrongTurn(Side::B));
    assert_eq!(game, before);
}

#[test]
fn test_invalid_destination_rejected_without_mutation() {
    let mut game = Match::start_default().unwrap();
    let before = game.clone();
    let err = game.attempt_move(Side::A, Coord::new(0, 0)).unwrap_err();
    assert_eq!(err, MoveError::InvalidMove(Coord::new(0, 0)));
    assert_eq!(game, before);
}

#[test]
fn test_move_walls_the_vacated_node_and_records_one_edge() {
    let mut game = Match::start_default().unwrap();
    let edges_before = game.board().used_edge_count();

    let outcome = game.attempt_move(Side::A, Coord::new(5, 4)).unwrap();

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(game.board().cell(Coord::new(6, 4)), Some(CellKind::Wall));
    assert!(!game.board().has_ball(Coord::new(6, 4)));
    assert!(game.board().has_ball(Coord::new(5, 4)));
    assert_eq!(
        game.board().cell(Coord::new(5, 4)),
        Some(CellKind::Free { has_ball: true })
    );
    assert_eq!(game.board().used_edge_count(), edges_before + 1);
    assert_eq!(game.current_side(), Side::B);
    assert_eq!(game.history(), &[Move::new(Side::A, Coord::new(5, 4))]);
}

#[test]
fn test_bounce_off_a_walled_node_keeps_the_turn() {
    let mut game = Match::start_default().unwrap();
    let drive = [
        (Side::A, Coord::new(5, 3)),
        (Side::B, Coord::new(4, 2)),
        (Side::A, Coord::new(3, 2)),
        (Side::B, Coord::new(2, 2)),
    ];
    for (side, to) in drive {
        assert_eq!(game.attempt_move(side, to).unwrap(), Outcome::Continue);
    }

    // (1, 1) is fence wall, but the diagonal onto it was never traveled.
    assert_eq!(game.current_side(), Side::A);
    assert_eq!(
        game.attempt_move(Side::A, Coord::new(1, 1)).unwrap(),
        Outcome::Continue
    );
    assert_eq!(
        game.current_side(),
        Side::A,
        "bounce lets the same side move again"
    );
    assert!(game.board().has_ball(Coord::new(1, 1)));
}

#[test]
fn test_reaching_the_top_goal_scores_for_side_a() {
    let mut game = Match::start_default().unwrap();
    let line = [
        (Side::A, Coord::new(5, 4)),
        (Side::B, Coord::new(4, 4)),
        (Side::A, Coord::new(3, 4)),
        (Side::B, Coord::new(2, 4)),
        (Side::A, Coord::new(1, 4)),
    ];
    for (side, to) in line {
        assert_eq!(game.attempt_move(side, to).unwrap(), Outcome::Continue);
    }

    let outcome = game.attempt_move(Side::B, Coord::new(0, 4)).unwrap();

    assert_eq!(outcome, Outcome::GoalScored(Side::A));
    assert_eq!(game.score().as_pair(), (1, 0));
    assert_eq!(game.phase(), Phase::Scored);
    assert!(game.is_terminal());
    // The ball never enters the goal mouth.
    assert!(game.board().has_ball(Coord::new(1, 4)));
    assert_eq!(
        game.attempt_move(Side::A, Coord::new(1, 3)),
        Err(MoveError::RoundOver)
    );
}

#[test]
fn test_corner_pocket_drive_ends_in_stalemate() {
    let mut game = Match::start_default().unwrap();
    let drive = [
        (Side::A, Coord::new(5, 3)),
        (Side::B, Coord::new(4, 2)),
        (Side::A, Coord::new(3, 2)),
        (Side::B, Coord::new(2, 2)),
        (Side::A, Coord::new(1, 1)), // bounce, A keeps the turn
        (Side::A, Coord::new(2, 1)),
        (Side::B, Coord::new(2, 0)), // bounce
        (Side::B, Coord::new(1, 1)), // bounce
    ];
    for (side, to) in drive {
        assert_eq!(game.attempt_move(side, to).unwrap(), Outcome::Continue);
    }

    // The last open edge out of the pocket leads to a node with none left.
    let outcome = game.attempt_move(Side::B, Coord::new(0, 2)).unwrap();

    assert_eq!(outcome, Outcome::Stalemate);
    assert_eq!(game.phase(), Phase::Stalemate);
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.score().as_pair(), (0, 0));
}

#[test]
fn test_replay_matches_live_play() {
    let mut live = Match::start_default().unwrap();
    live.attempt_move(Side::A, Coord::new(5, 4)).unwrap();
    live.attempt_move(Side::B, Coord::new(4, 3)).unwrap();
    live.attempt_move(Side::A, Coord::new(3, 3)).unwrap();

    // Persist the history the way a host would, then rebuild from it.
    let json = serde_json::to_string(live.history()).unwrap();
    let moves: Vec<Move> = serde_json::from_str(&json).unwrap();
    let replayed = Match::replay(&moves).unwrap();

    assert_eq!(replayed, live);
}

#[test]
fn test_replay_rejects_an_illegal_record() {
    let moves = [Move::new(Side::A, Coord::new(0, 0))];
    assert!(Match::replay(&moves).is_err());
}
