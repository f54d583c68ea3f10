use super::*;
use agents::{Strategy, StrategyAgent};
use rps_core::{
    Agent, Configuration, EpisodeResult, EvaluatorError, GameEvaluator, RpsEvaluator, PAPER, ROCK,
};

/// Reports the same counts for every episode without asking the agents.
struct Canned(EpisodeResult);

impl GameEvaluator for Canned {
    fn run_episode(
        &self,
        _left: &mut dyn Agent,
        _right: &mut dyn Agent,
        _config: &Configuration,
    ) -> Result<EpisodeResult, EvaluatorError> {
        Ok(self.0)
    }
}

struct Failing;

impl GameEvaluator for Failing {
    fn run_episode(
        &self,
        _left: &mut dyn Agent,
        _right: &mut dyn Agent,
        _config: &Configuration,
    ) -> Result<EpisodeResult, EvaluatorError> {
        Err(EvaluatorError::Backend("simulator offline".to_string()))
    }
}

fn constant(name: &str, sign: u32) -> StrategyAgent {
    StrategyAgent::seeded(name, Strategy::Constant(sign), 0)
}

#[test]
fn test_constant_match() {
    let mut rock = constant("rock", ROCK);
    let mut paper = constant("paper", PAPER);

    let evaluator = RpsEvaluator::new();
    let runner = MatchRunner::new(&evaluator, Configuration::classic(10).unwrap());
    let result = runner.run_match(&mut rock, &mut paper).unwrap();

    assert_eq!(result, MatchResult { left_wins: 0, right_wins: 10, draws: 0 });
    assert_eq!(result.outcome(), MatchOutcome::Right);
}

#[test]
fn test_quick_match() {
    let mut a = StrategyAgent::seeded("counter", Strategy::Counter, 3);
    let mut b = constant("rock", ROCK);

    let result = quick_match(&mut a, &mut b, 20).unwrap();

    // the counter agent only risks the opening step
    assert!(result.left_wins >= 19);
    assert_eq!(result.left_wins + result.right_wins + result.draws, 20);
}

#[test]
fn test_evaluator_counts_are_passed_through() {
    let evaluator = Canned(EpisodeResult { left_wins: 7, right_wins: 3, draws: 0 });
    let runner = MatchRunner::new(&evaluator, Configuration::classic(10).unwrap());

    let result = runner
        .run_match(&mut constant("a", ROCK), &mut constant("b", ROCK))
        .unwrap();

    assert_eq!(result, MatchResult::new(7, 3));
    assert_eq!(result.decisive_steps(), 10);
}

#[test]
fn test_counts_beyond_episode_length_are_rejected() {
    let evaluator = Canned(EpisodeResult { left_wins: 8, right_wins: 5, draws: 0 });
    let runner = MatchRunner::new(&evaluator, Configuration::classic(10).unwrap());

    let err = runner
        .run_match(&mut constant("a", ROCK), &mut constant("b", ROCK))
        .unwrap_err();

    match err {
        TournamentError::Match { left, right, source } => {
            assert_eq!((left.as_str(), right.as_str()), ("a", "b"));
            assert_eq!(
                source,
                EvaluatorError::InconsistentResult {
                    left_wins: 8,
                    right_wins: 5,
                    episode_steps: 10,
                }
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_counts_near_u32_max_are_rejected() {
    let evaluator = Canned(EpisodeResult { left_wins: u32::MAX, right_wins: 1, draws: 0 });
    let runner = MatchRunner::new(&evaluator, Configuration::classic(10).unwrap());

    let err = runner
        .run_match(&mut constant("a", ROCK), &mut constant("b", ROCK))
        .unwrap_err();

    assert!(matches!(
        err,
        TournamentError::Match {
            source: EvaluatorError::InconsistentResult { left_wins: u32::MAX, right_wins: 1, .. },
            ..
        }
    ));
}

#[test]
fn test_evaluator_failure_propagates() {
    let runner = MatchRunner::new(&Failing, Configuration::classic(10).unwrap());

    let err = runner
        .run_match(&mut constant("a", ROCK), &mut constant("b", ROCK))
        .unwrap_err();

    assert!(matches!(
        err,
        TournamentError::Match { source: EvaluatorError::Backend(_), .. }
    ));
}

#[test]
fn test_match_outcome() {
    assert_eq!(MatchResult::new(7, 3).outcome(), MatchOutcome::Left);
    assert_eq!(MatchResult::new(3, 7).outcome(), MatchOutcome::Right);
    assert_eq!(MatchResult::new(5, 5).outcome(), MatchOutcome::Draw);
}
