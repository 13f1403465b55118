//! Tests for cross-round sessions.

use strictly_soccer::{BoardConfig, Coord, Match, Phase, Session, Side};

fn drive_goal(game: &mut Match) {
    let line = [
        (Side::A, Coord::new(5, 4)),
        (Side::B, Coord::new(4, 4)),
        (Side::A, Coord::new(3, 4)),
        (Side::B, Coord::new(2, 4)),
        (Side::A, Coord::new(1, 4)),
        (Side::B, Coord::new(0, 4)),
    ];
    for (side, to) in line {
        game.attempt_move(side, to).unwrap();
    }
}

#[test]
fn test_tally_accumulates_across_rounds() {
    let mut session = Session::new(BoardConfig::default()).unwrap();

    drive_goal(session.game_mut());
    assert_eq!(session.game().phase(), Phase::Scored);
    session.new_round().unwrap();
    assert_eq!(session.tally().as_pair(), (1, 0));
    assert_eq!(session.rounds_played(), 1);
    assert_eq!(session.game().phase(), Phase::InProgress);
    assert_eq!(session.game().board().ball_pos(), Coord::new(6, 4));

    drive_goal(session.game_mut());
    session.new_round().unwrap();
    assert_eq!(session.tally().as_pair(), (2, 0));
    assert_eq!(session.rounds_played(), 2);
}

#[test]
fn test_aborted_round_leaves_the_tally_untouched() {
    let mut session = Session::new(BoardConfig::default()).unwrap();
    session
        .game_mut()
        .attempt_move(Side::A, Coord::new(5, 4))
        .unwrap();

    session.new_round().unwrap();

    assert_eq!(session.tally().as_pair(), (0, 0));
    assert_eq!(session.rounds_played(), 0);
    assert!(session.game().history().is_empty());
}
