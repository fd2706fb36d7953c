mod common;

use common::{TWO_BY_TWO, WALLED, env, grid};
use maze_sarsa::{
    Error,
    maze::{Cell, Layout, MazeEnvironment, environment::BUMP_REWARD},
    types::{Action, Position},
};

#[test]
fn state_count_matches_passable_cells() {
    let env = env(WALLED);
    // 16 cells, 2 walls
    assert_eq!(env.state_count(), 14);
    assert_eq!(env.layout().passable_count(), 14);
    assert_eq!(env.layout().rows(), 4);
    assert_eq!(env.layout().cols(), 4);
}

#[test]
fn every_state_maps_back_to_its_position() {
    let env = env(WALLED);
    for state in env.states() {
        let position = env.position_of(state).unwrap();
        assert_eq!(env.state_at(position), Some(state));
        assert_ne!(env.cell_attribute(position), Cell::Wall);
    }
    assert_eq!(env.state_at(Position::new(1, 1)), None);
}

#[test]
fn states_are_numbered_column_major() {
    let env = env(WALLED);
    let order: Vec<Position> = env.states().filter_map(|s| env.position_of(s)).collect();
    assert_eq!(&order[..5], &[
        Position::new(0, 0),
        Position::new(1, 0),
        Position::new(2, 0),
        Position::new(3, 0),
        Position::new(0, 1),
    ]);
    assert_eq!(env.start_state().to_string(), "s1");
}

#[test]
fn cells_outside_the_crop_are_ignored() {
    let env = env(&["S,G,X,?", ",,,", ",,EOG,zzz", "W,W,W,W"]);
    assert_eq!(env.state_count(), 4);
}

#[test]
fn missing_sentinel_is_rejected() {
    let result = Layout::parse(&grid(&["S,G", ",,"]));
    assert!(matches!(result, Err(Error::MissingSentinel)));
}

#[test]
fn two_sentinels_are_rejected() {
    let result = Layout::parse(&grid(&["S,G,EOG", ",,EOG"]));
    assert!(matches!(result, Err(Error::AmbiguousSentinel { count: 2 })));
}

#[test]
fn sentinel_in_first_row_or_column_is_rejected() {
    assert!(matches!(
        Layout::parse(&grid(&["S,G,EOG"])),
        Err(Error::DegenerateGrid { row: 0, col: 2 })
    ));
    assert!(matches!(
        Layout::parse(&grid(&["S,G", "EOG,"])),
        Err(Error::DegenerateGrid { row: 1, col: 0 })
    ));
}

#[test]
fn two_goals_are_rejected() {
    let result = Layout::parse(&grid(&["S,G,G,", ",,,EOG"]));
    assert!(matches!(result, Err(Error::AmbiguousGoal { count: 2 })));
}

#[test]
fn missing_start_is_rejected() {
    let result = Layout::parse(&grid(&[",G,", ",,EOG"]));
    assert!(matches!(result, Err(Error::MissingStart)));
}

#[test]
fn missing_goal_and_duplicate_start_are_rejected() {
    assert!(matches!(
        Layout::parse(&grid(&["S,,", ",,EOG"])),
        Err(Error::MissingGoal)
    ));
    assert!(matches!(
        Layout::parse(&grid(&["S,S,G,", ",,,EOG"])),
        Err(Error::AmbiguousStart { count: 2 })
    ));
}

#[test]
fn unknown_label_is_rejected_with_location() {
    let result = Layout::parse(&grid(&["S,x,", ",G,", ",,EOG"]));
    match result {
        Err(Error::InvalidCellLabel { row, col, label }) => {
            assert_eq!((row, col), (0, 1));
            assert_eq!(label, "x");
        }
        other => panic!("expected InvalidCellLabel, got {other:?}"),
    }
}

#[test]
fn moving_off_the_edge_bumps_in_place() {
    let env = env(WALLED);
    let start = env.start_state();
    for action in [Action::Up, Action::Left] {
        let (reward, next) = env.step(action);
        assert_eq!(reward, BUMP_REWARD);
        assert_eq!(next, start);
    }
}

#[test]
fn every_off_grid_move_bumps_in_place() {
    let mut env = env(WALLED);
    let (rows, cols) = (env.layout().rows(), env.layout().cols());
    let mut bumps = 0;
    for state in env.states().collect::<Vec<_>>() {
        let position = env.position_of(state).unwrap();
        env.set_state(state);
        for action in Action::ALL {
            if position.offset(action, rows, cols).is_none() {
                assert_eq!(env.step(action), (BUMP_REWARD, state), "{action} from {position}");
                bumps += 1;
            }
        }
    }
    // 4x4 grid: four cells per side
    assert_eq!(bumps, 16);
}

#[test]
fn walls_block_movement() {
    let mut env = env(WALLED);
    let above_wall = env.state_at(Position::new(0, 1)).unwrap();
    env.set_state(above_wall);

    let (reward, next) = env.step(Action::Down);
    assert_eq!(reward, BUMP_REWARD);
    assert_eq!(next, above_wall);
}

#[test]
fn rewards_follow_the_entered_cell() {
    let mut env = env(WALLED);

    // Empty
    let (reward, _) = env.step(Action::Right);
    assert_eq!(reward, 1.0);

    // Numeric
    env.set_state(env.state_at(Position::new(2, 0)).unwrap());
    let (reward, next) = env.step(Action::Right);
    assert_eq!(reward, 3.0);
    assert_eq!(env.position_of(next), Some(Position::new(2, 1)));

    // Trap
    env.set_state(next);
    let (reward, _) = env.step(Action::Right);
    assert_eq!(reward, -100.0);

    // Goal
    env.set_state(env.state_at(Position::new(3, 2)).unwrap());
    let (reward, next) = env.step(Action::Right);
    assert_eq!(reward, 100.0);
    assert_eq!(next, env.goal_state());

    // Start
    env.set_state(env.state_at(Position::new(1, 0)).unwrap());
    let (reward, next) = env.step(Action::Up);
    assert_eq!(reward, 1.0);
    assert_eq!(next, env.start_state());
}

#[test]
fn step_is_deterministic_and_pure() {
    let env = env(WALLED);
    let first = env.step(Action::Down);
    let second = env.step(Action::Down);
    assert_eq!(first, second);
    assert_eq!(env.current_state(), env.start_state());
}

#[test]
fn terminal_checks_track_committed_state() {
    let mut env: MazeEnvironment = env(TWO_BY_TWO);
    assert!(!env.is_at_goal());

    let (_, next) = env.step(Action::Right);
    assert!(!env.is_at_goal());
    env.set_state(next);
    assert!(env.is_at_goal());
    assert!(!env.is_trapped());

    env.reset();
    assert_eq!(env.current_state(), env.start_state());
}
