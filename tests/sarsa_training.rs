mod common;

use std::sync::{Arc, Mutex};

use common::{TWO_BY_TWO, WALLED, env};
use maze_sarsa::{
    Result,
    maze::Cell,
    pipeline::{EpisodeOutcome, Observer, ScriptedLearner, TrainingConfig, TrainingPipeline},
    ports::{Learner, StepEvent},
    q_learning::{SarsaAgent, SarsaConfig},
    types::{Action, Position, StateId},
};

/// Records every committed position across all episodes.
#[derive(Clone, Default)]
struct VisitRecorder {
    visits: Arc<Mutex<Vec<Position>>>,
}

impl Observer for VisitRecorder {
    fn on_episode_start(&mut self, _episode: usize, start: Position) -> Result<()> {
        self.visits.lock().unwrap().push(start);
        Ok(())
    }

    fn on_step(&mut self, _episode: usize, event: &StepEvent) -> Result<()> {
        self.visits.lock().unwrap().push(event.position);
        Ok(())
    }
}

fn config(episodes: usize, step_budget: usize) -> TrainingConfig {
    TrainingConfig {
        episodes,
        step_budget,
        seed: None,
    }
}

#[test]
fn start_next_to_goal_ends_in_one_step() {
    let mut env = env(TWO_BY_TWO);
    // One action for the first move, one for the next-action pick
    let mut learner = ScriptedLearner::new(vec![Action::Right, Action::Up]);

    let mut pipeline = TrainingPipeline::new(config(1, 10));
    let report = pipeline.run_episode(0, &mut env, &mut learner).unwrap();

    assert_eq!(report.outcome, EpisodeOutcome::Goal);
    assert_eq!(report.steps, 1);
    assert_eq!(report.total_reward, 100.0);
    assert!(env.is_at_goal());
}

#[test]
fn forced_step_into_trap_ends_trapped() {
    let mut env = env(&["S,T,", ",G,", ",,EOG"]);
    let mut learner = ScriptedLearner::parse("RR").unwrap();

    let mut pipeline = TrainingPipeline::new(config(1, 10));
    let report = pipeline.run_episode(0, &mut env, &mut learner).unwrap();

    assert_eq!(report.outcome, EpisodeOutcome::Trapped);
    assert_eq!(report.steps, 1);
    assert_eq!(report.total_reward, -100.0);
    assert_eq!(env.cell_attribute(env.current_position()), Cell::Trap);
}

#[test]
fn budget_exhaustion_is_a_timeout() {
    let mut env = env(WALLED);
    let mut learner = ScriptedLearner::parse("UUUU").unwrap();

    let mut pipeline = TrainingPipeline::new(config(1, 3));
    let report = pipeline.run_episode(0, &mut env, &mut learner).unwrap();

    assert_eq!(report.outcome, EpisodeOutcome::BudgetExhausted);
    assert_eq!(report.steps, 3);
    assert_eq!(report.total_reward, -3.0);
}

#[test]
fn first_update_matches_sarsa_arithmetic() {
    let env = env(TWO_BY_TWO);
    let mut agent = SarsaAgent::new(env.state_count(), SarsaConfig::default()).unwrap();

    // Start -> Down onto an empty cell: r = 1, Q(s', a') = 0
    let start = env.start_state();
    let (reward, next) = env.step(Action::Down);
    agent.update(start, Action::Down, reward, next, Action::Up).unwrap();
    assert!((agent.q_table().get(start, Action::Down).unwrap() - 0.8).abs() < 1e-12);

    // Bootstraps from the value just learned
    agent.update(next, Action::Up, 1.0, start, Action::Down).unwrap();
    let expected = 0.8 * (1.0 + 0.9 * 0.8);
    assert!((agent.q_table().get(next, Action::Up).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn agent_never_occupies_a_wall() {
    let mut env = env(WALLED);
    let mut agent =
        SarsaAgent::new(env.state_count(), SarsaConfig::default().with_seed(11)).unwrap();
    let recorder = VisitRecorder::default();

    let mut pipeline =
        TrainingPipeline::new(config(200, 60)).with_observer(Box::new(recorder.clone()));
    pipeline.run(&mut env, &mut agent).unwrap();

    let visits = recorder.visits.lock().unwrap();
    assert!(!visits.is_empty());
    for &position in visits.iter() {
        let cell = env.layout().get(position).expect("position inside the grid");
        assert_ne!(cell, Cell::Wall, "agent stood on a wall at {position}");
    }
}

#[test]
fn training_learns_to_reach_the_goal() {
    let mut env = env(WALLED);
    let mut agent =
        SarsaAgent::new(env.state_count(), SarsaConfig::default().with_seed(3)).unwrap();

    let mut pipeline = TrainingPipeline::new(config(500, 100));
    let result = pipeline.run(&mut env, &mut agent).unwrap();

    assert_eq!(result.total_episodes, 500);
    assert_eq!(result.goals + result.traps + result.timeouts, 500);
    assert!(result.goals > 0, "no episode reached the goal");
    assert!(result.first_goal_episode.is_some());
}

#[test]
fn greedy_selection_with_zero_epsilon() {
    let mut agent = SarsaAgent::new(
        3,
        SarsaConfig::default().with_epsilon(0.0).with_seed(99),
    )
    .unwrap();
    let state = StateId::new(2);

    // All-zero row ties break to the first action
    assert_eq!(agent.select_action(state).unwrap(), Action::Up);

    agent
        .update(state, Action::Left, 5.0, StateId::new(0), Action::Up)
        .unwrap();
    for _ in 0..50 {
        assert_eq!(agent.select_action(state).unwrap(), Action::Left);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let train = |seed: u64| {
        let mut env = env(WALLED);
        let mut agent = SarsaAgent::new(env.state_count(), SarsaConfig::default()).unwrap();
        let mut pipeline = TrainingPipeline::new(TrainingConfig {
            episodes: 50,
            step_budget: 40,
            seed: Some(seed),
        });
        let result = pipeline.run(&mut env, &mut agent).unwrap();
        (result, agent)
    };

    let (first_result, first_agent) = train(21);
    let (second_result, second_agent) = train(21);

    assert_eq!(first_result, second_result);
    assert_eq!(first_agent.q_table(), second_agent.q_table());
    assert_eq!(Learner::name(&first_agent), "SARSA");
}

#[test]
fn zero_episode_config_is_rejected() {
    let mut env = env(TWO_BY_TWO);
    let mut agent = SarsaAgent::new(env.state_count(), SarsaConfig::default()).unwrap();

    let mut pipeline = TrainingPipeline::new(config(0, 10));
    assert!(pipeline.run(&mut env, &mut agent).is_err());
}
