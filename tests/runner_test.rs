use match_three::cli::{parse_args, DEFAULT_MOVES};
use match_three::core::{new_session, GameSession};
use match_three::runner::{autoplay, picker_for};
use rand::Rng;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parsed_overrides_reach_the_session_config() {
    let opts = parse_args(&args(&["--seed", "5", "--rows", "6", "--colors", "4"]))
        .unwrap()
        .unwrap();
    assert_eq!(opts.moves, DEFAULT_MOVES);

    let config = opts.session_config().unwrap();
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.rows, 6);
    assert_eq!(config.cols, 8);
    assert_eq!(config.palette_size, 4);
}

#[test]
fn invalid_override_fails_validation() {
    let opts = parse_args(&args(&["--colors", "2"])).unwrap().unwrap();
    assert!(opts.session_config().is_err());
}

#[test]
fn missing_config_file_is_reported() {
    let opts = parse_args(&args(&["--config", "/nonexistent/match-three.toml"]))
        .unwrap()
        .unwrap();
    let err = opts.session_config().unwrap_err();
    assert!(format!("{:#}", err).contains("match-three.toml"));
}

#[test]
fn autoplay_logs_each_move_and_keeps_score() {
    let mut session = new_session(8, 8, 6, Some(2024)).unwrap();
    let mut picker = picker_for(&session);
    let mut seen = 0;

    let log = autoplay(&mut session, 10, &mut picker, |turn, s| {
        seen += 1;
        assert_eq!(turn.score, s.score());
        assert!(s.is_settled());
    })
    .unwrap();

    assert_eq!(log.len(), seen);
    assert_eq!(session.moves() as usize, log.len());
    for pair in log.windows(2) {
        assert!(pair[1].score > pair[0].score);
        assert_eq!(pair[1].index, pair[0].index + 1);
    }
    for turn in &log {
        assert!(turn.points >= 10);
        assert!(turn.depth >= 1);
    }
    assert_eq!(log.last().map_or(0, |t| t.score), session.score());
}

#[test]
fn autoplay_with_zero_moves_does_nothing() {
    let mut session = new_session(8, 8, 6, Some(1)).unwrap();
    let before = session.snapshot();
    let mut picker = picker_for(&session);

    let log = autoplay(&mut session, 0, &mut picker, |_, _| {}).unwrap();

    assert!(log.is_empty());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn picker_follows_the_session_seed() {
    let a = new_session(8, 8, 6, Some(31)).unwrap();
    let b = new_session(8, 8, 6, Some(31)).unwrap();
    let c = new_session(8, 8, 6, Some(32)).unwrap();

    let draws = |session: &GameSession| {
        let mut picker = picker_for(session);
        (0..16).map(|_| picker.gen_range(0..1000u32)).collect::<Vec<_>>()
    };

    assert_eq!(draws(&a), draws(&b));
    assert_ne!(draws(&a), draws(&c));
}

#[test]
fn oversized_board_flags_are_rejected() {
    let opts = parse_args(&args(&["--rows", "4294967296", "--cols", "4294967296"]))
        .unwrap()
        .unwrap();
    assert!(opts.session_config().is_err());
}
