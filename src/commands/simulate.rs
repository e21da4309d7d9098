//! Step-by-step games against one secret
//!
//! Runs each strategy through a full game and records the candidate count
//! around every guess.

use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;
use crate::error::{MastermindError, Result};
use crate::solver::{CodeBreaker, SearchOptions, Strategy};
use std::time::{Duration, Instant};

/// A single guess of a simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStep {
    pub guess: Codeword,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A simulated game of one strategy
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub strategy: String,
    pub secret: Codeword,
    pub steps: Vec<SimulationStep>,
    pub solved: bool,
    pub duration: Duration,
}

/// Play `strategy` against `secret`
///
/// A strategy that runs out of guesses ends the game unsolved rather than
/// failing, so several strategies can be reported side by side.
///
/// # Errors
///
/// Returns `MastermindError::Domain` if `secret` is not a codeword of the
/// game, and `MastermindError::InconsistentState` if a feedback leaves no
/// candidate.
pub fn simulate_game<S: Strategy, F: EquivalenceFilter>(
    engine: &Engine,
    strategy: S,
    filter: F,
    options: SearchOptions,
    secret: &Codeword,
) -> Result<SimulationResult> {
    Codeword::new(secret.pegs(), engine.rules())?;

    let name = strategy.name().to_string();
    let mut breaker = CodeBreaker::new(engine, strategy, filter, options);
    let mut steps = Vec::new();
    let start = Instant::now();

    while !breaker.is_solved() && steps.len() < engine.universe().len() {
        let candidates_before = breaker.candidates().len();
        let guess = breaker.make_guess();
        if guess.is_empty() {
            break;
        }

        let feedback = engine.compare(secret, &guess);
        breaker.add_constraint(&guess, feedback)?;
        steps.push(SimulationStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: breaker.candidates().len(),
        });
    }

    Ok(SimulationResult {
        strategy: name,
        secret: *secret,
        solved: breaker.is_solved(),
        steps,
        duration: start.elapsed(),
    })
}

/// Pick a secret uniformly from the universe
///
/// # Errors
///
/// Returns `MastermindError::InconsistentState` for an empty universe.
pub fn random_secret(engine: &Engine) -> Result<Codeword> {
    use rand::prelude::IndexedRandom;

    engine
        .universe()
        .choose(&mut rand::rng())
        .copied()
        .ok_or_else(|| MastermindError::InconsistentState("empty codeword universe".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{ConstraintEquivalenceFilter, IdentityFilter};
    use crate::solver::{SimpleStrategy, StrategyType};

    #[test]
    fn simple_strategy_game_steps() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let secret = Codeword::parse("21", engine.rules()).unwrap();
        let result = simulate_game(
            &engine,
            SimpleStrategy,
            IdentityFilter,
            SearchOptions::default(),
            &secret,
        )
        .unwrap();

        let guesses: Vec<String> = result.steps.iter().map(|s| s.guess.to_string()).collect();
        assert_eq!(guesses, vec!["00", "11", "12", "21"]);
        assert!(result.solved);

        let counts: Vec<(usize, usize)> = result
            .steps
            .iter()
            .map(|s| (s.candidates_before, s.candidates_after))
            .collect();
        assert_eq!(counts, vec![(9, 4), (4, 2), (2, 1), (1, 1)]);
    }

    #[test]
    fn every_strategy_finds_the_secret() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        let secret = engine.universe()[engine.universe().len() / 4 * 3];

        for strategy in StrategyType::all() {
            let filter = ConstraintEquivalenceFilter::new(engine.rules());
            let result =
                simulate_game(&engine, strategy, filter, SearchOptions::default(), &secret).unwrap();
            assert!(result.solved, "{}", result.strategy);
            assert_eq!(result.steps.last().map(|s| s.guess), Some(secret));
            assert!(
                result
                    .steps
                    .last()
                    .is_some_and(|s| s.feedback.is_perfect(engine.rules()))
            );
        }
    }

    #[test]
    fn invalid_secret_rejected() {
        let engine = Engine::try_new(3, 4, false).unwrap();
        let result = simulate_game(
            &engine,
            SimpleStrategy,
            IdentityFilter,
            SearchOptions::default(),
            &Codeword::EMPTY,
        );
        assert!(matches!(result, Err(MastermindError::Domain(_))));
    }

    #[test]
    fn random_secret_is_in_universe() {
        let engine = Engine::try_new(3, 5, false).unwrap();
        let secret = random_secret(&engine).unwrap();
        assert!(engine.universe().contains(&secret));
    }
}
