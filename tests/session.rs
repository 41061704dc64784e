use conway_torus::application::MAX_STEPS_PER_ADVANCE;
use conway_torus::{Config, Language, RunState, Session};

fn session_with(steps_per_second: f32, start_preset: u8) -> Session {
    let config = Config {
        steps_per_second,
        start_preset,
        language: Some(Language::English),
        ..Config::default()
    };
    Session::from_config(&config).unwrap()
}

#[test]
fn test_toggle_cell_round_trip() {
    let mut session = Session::new(6, 6).unwrap();
    assert!(session.toggle_cell(2, 3).unwrap());
    assert!(session.cell_alive(2, 3).unwrap());
    assert!(!session.toggle_cell(2, 3).unwrap());
    assert_eq!(session.grid().population(), 0);
    assert_eq!(session.generation(), 0);
    assert!(session.toggle_cell(6, 0).is_err());
}

#[test]
fn test_clear_while_running() {
    let mut session = session_with(8.0, 6);
    session.toggle_running();
    assert_eq!(session.tick(0.25), 2);
    assert_eq!(session.generation(), 2);

    session.clear();
    assert_eq!(session.run_state(), RunState::Idle);
    assert_eq!(session.generation(), 0);
    assert_eq!(session.grid().population(), 0);
    assert_eq!(session.tick(1.0), 0);
}

#[test]
fn test_tick_only_advances_while_running() {
    let mut session = session_with(4.0, 6);
    assert_eq!(session.tick(2.0), 0);
    assert_eq!(session.generation(), 0);

    session.toggle_running();
    let taken: u32 = (0..4).map(|_| session.tick(0.25)).sum();
    assert_eq!(taken, 4);
    assert_eq!(session.generation(), 4);

    // Pausing drops the partial interval
    session.tick(0.2);
    session.toggle_running();
    session.toggle_running();
    assert_eq!(session.tick(0.1), 0);
    assert_eq!(session.generation(), 4);
}

#[test]
fn test_glider_advances_through_tick() {
    let mut session = session_with(8.0, 6);
    let before: Vec<_> = session.grid().live_cells().collect();

    session.toggle_running();
    assert_eq!(session.tick(0.5), 4);

    let after: Vec<_> = session.grid().live_cells().collect();
    let expected: Vec<_> = before.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(after, expected);
}

#[test]
fn test_long_stall_is_capped() {
    let mut session = session_with(60.0, 0);
    session.toggle_running();
    assert_eq!(session.tick(1e6), MAX_STEPS_PER_ADVANCE);
    assert_eq!(session.generation(), u64::from(MAX_STEPS_PER_ADVANCE));
    assert_eq!(session.tick(0.0), 0);
}
