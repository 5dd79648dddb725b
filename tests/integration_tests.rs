//! Integration tests - full turns through the public API

use match_three::core::{
    detect, new_session, request_swap, Board, GameError, GameSession, Resolver, ScoringTable,
    ScriptedColors, SessionConfig, TurnOutcome,
};
use match_three::runner::{autoplay, picker_for};
use match_three::types::{Color, Coord, ResolverState, SwapOutcome, MAX_DIMENSION};

const QUIET_ROWS: [&str; 6] = [
    "YGBYGYBY",
    "BYGBYGBG",
    "GBYGBYGB",
    "YGBYGBYG",
    "BYGBYGBY",
    "GBYGBYGB",
];

fn quiet_board() -> Board {
    let mut rows = vec!["RRGRBYGB", "GBYGYBYG"];
    rows.extend_from_slice(&QUIET_ROWS);
    Board::from_letters(&rows).unwrap()
}

#[test]
fn scenario_b_four_in_a_row_scores_25() {
    let mut rows = vec!["RRGRBYGB", "GBRGYBYG"];
    rows.extend_from_slice(&QUIET_ROWS);
    let mut board = Board::from_letters(&rows).unwrap();
    assert!(detect(&board).is_empty());

    let outcome = request_swap(&mut board, Coord::new(0, 2), Coord::new(1, 2)).unwrap();
    assert_eq!(outcome, SwapOutcome::Committed);

    let matches = detect(&board);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].len(), 4);

    let mut resolver = Resolver::default();
    let mut score = 0;
    let mut refill = ScriptedColors::new(vec![
        Color::MAGENTA,
        Color::CYAN,
        Color::MAGENTA,
        Color::CYAN,
    ])
    .unwrap();
    let report = resolver
        .resolve_cascade(&mut board, &mut score, &mut refill)
        .unwrap();

    assert_eq!(score, 25);
    assert_eq!(report.depth(), 1);
    assert_eq!(report.total_cleared(), 4);
    assert_eq!(refill.drawn(), 4);
    assert_eq!(resolver.state(), ResolverState::Idle);
    assert!(detect(&board).is_empty());
    assert!(board.is_full());

    let mut expected_rows = vec!["MCMCBYGB", "GBGGYBYG"];
    expected_rows.extend_from_slice(&QUIET_ROWS);
    assert_eq!(board, Board::from_letters(&expected_rows).unwrap());
}

#[test]
fn scenario_c_non_adjacent_swap_changes_nothing() {
    let mut session = GameSession::with_board(SessionConfig::seeded(3), quiet_board()).unwrap();
    let before = session.snapshot();

    session.select(Coord::new(0, 0)).unwrap();
    let err = session.swap_with(Coord::new(0, 2)).unwrap_err();

    assert_eq!(
        err,
        GameError::InvalidSwap {
            a: Coord::new(0, 0),
            b: Coord::new(0, 2)
        }
    );
    assert!(err.is_recoverable());

    let after = session.snapshot();
    assert_eq!(after.board, before.board);
    assert_eq!(after.board_hash, before.board_hash);
    assert_eq!(after.score, 0);
    assert_eq!(after.moves, 0);
}

#[test]
fn scenario_d_chain_reaction_scores_each_pass() {
    let mut board = Board::from_letters(&["BGY", "BYG", "GBY", "RRR"]).unwrap();
    let mut resolver = Resolver::default();
    let mut score = 0;
    let mut refill = ScriptedColors::new(vec![
        Color::BLUE,
        Color::MAGENTA,
        Color::CYAN,
        Color::YELLOW,
        Color::MAGENTA,
        Color::YELLOW,
    ])
    .unwrap();

    let report = resolver
        .resolve_cascade(&mut board, &mut score, &mut refill)
        .unwrap();

    assert_eq!(report.depth(), 2);
    assert_eq!(report.passes[0].points, 10);
    assert_eq!(report.passes[1].points, 10);
    assert_eq!(score, 20);
    assert!(detect(&board).is_empty());
    assert!(board.is_full());
}

#[test]
fn reverted_swap_restores_the_board() {
    let mut board = quiet_board();
    let before = board.clone();

    let outcome = request_swap(&mut board, Coord::new(7, 0), Coord::new(7, 1)).unwrap();

    assert_eq!(outcome, SwapOutcome::Reverted);
    assert_eq!(board, before);
}

#[test]
fn every_rejected_swap_leaves_the_board_alone() {
    let mut session = new_session(8, 8, 5, Some(77)).unwrap();
    let (rows, cols) = session.board_view().dimensions();

    for row in 0..rows {
        for col in 0..cols {
            let a = Coord::new(row, col);
            for b in [Coord::new(row, col + 1), Coord::new(row + 1, col)] {
                if b.row >= rows || b.col >= cols {
                    continue;
                }
                let before = session.board_view().clone();
                let mut scratch = before.clone();
                if request_swap(&mut scratch, a, b).unwrap() == SwapOutcome::Reverted {
                    assert_eq!(scratch, before, "{} <-> {}", a, b);
                    let outcome = session.swap(a, b).unwrap();
                    assert!(!outcome.is_committed());
                    assert_eq!(session.board_view(), &before);
                }
            }
        }
    }
    assert_eq!(session.score(), 0);
}

#[test]
fn sessions_with_the_same_seed_play_identically() {
    let play = || {
        let mut session = new_session(8, 8, 6, Some(42)).unwrap();
        let mut picker = picker_for(&session);
        let log = autoplay(&mut session, 15, &mut picker, |_, _| {}).unwrap();
        (log, session.snapshot())
    };

    let (log_a, snap_a) = play();
    let (log_b, snap_b) = play();

    assert!(!log_a.is_empty());
    assert_eq!(log_a, log_b);
    assert_eq!(snap_a, snap_b);
    assert_eq!(snap_a.board_hash, snap_b.board_hash);
}

#[test]
fn score_grows_by_exactly_the_matched_points() {
    let table = ScoringTable::default();

    for seed in 0..10u64 {
        let mut session = new_session(8, 8, 5, Some(seed)).unwrap();
        for _ in 0..10 {
            let Some(&(a, b)) = session.valid_swaps().first() else {
                break;
            };
            let before = session.score();

            let TurnOutcome::Committed(report) = session.swap(a, b).unwrap() else {
                panic!("listed swap {} <-> {} did not commit", a, b);
            };

            let expected: u32 = report
                .passes
                .iter()
                .flat_map(|p| p.matches.iter())
                .map(|m| table.points_for(m.len()))
                .sum();
            assert!(expected >= 10);
            assert_eq!(session.score(), before + expected);
            assert!(session.is_settled());
            assert_eq!(session.resolver_state(), ResolverState::Idle);
        }
    }
}

#[test]
fn new_sessions_start_settled_at_zero() {
    for seed in 0..25u64 {
        let session = new_session(6, 9, 4, Some(seed)).unwrap();
        assert_eq!(session.score(), 0);
        assert!(session.is_settled());
        assert!(detect(session.board_view()).is_empty());
    }
}

#[test]
fn tiny_palettes_and_boards_are_rejected() {
    assert!(matches!(
        new_session(8, 8, 2, Some(1)),
        Err(GameError::InvalidConfig(_))
    ));
    assert!(matches!(
        new_session(2, 8, 6, Some(1)),
        Err(GameError::InvalidConfig(_))
    ));
    assert!(matches!(
        new_session(8, 0, 6, Some(1)),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn huge_boards_are_rejected_before_allocation() {
    assert!(matches!(
        new_session(1 << 20, 1 << 20, 6, Some(1)),
        Err(GameError::InvalidConfig(_))
    ));
    assert!(matches!(
        new_session(usize::MAX, usize::MAX, 6, Some(1)),
        Err(GameError::InvalidConfig(_))
    ));
    assert!(matches!(
        new_session(MAX_DIMENSION + 1, 8, 6, Some(1)),
        Err(GameError::InvalidConfig(_))
    ));
}
