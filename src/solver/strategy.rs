//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::heuristics::{
    Heuristic, MaximizeEntropy, MaximizePartitions, MinimizeAverage, MinimizeWorstCase,
};
use crate::core::{Codeword, Engine};
use crate::equivalence::EquivalenceFilter;
use crate::error::{MastermindError, Result};
use rayon::prelude::*;
use tracing::trace;

/// Search switches shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Shortcut positions where the answer is obvious, see [`obvious_guess`]
    pub optimize_obvious: bool,
    /// Only guess codewords that may still be the secret
    pub possibility_only: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            optimize_obvious: true,
            possibility_only: false,
        }
    }
}

/// A strategy for selecting the next guess given the remaining candidates
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    /// Select the next guess
    ///
    /// `filter` carries the symmetries left by the guesses made so far;
    /// guesses equivalent under it are interchangeable. Returns `None` when
    /// there is nothing to guess.
    fn select_guess<F: EquivalenceFilter>(
        &self,
        engine: &Engine,
        candidates: &[Codeword],
        filter: &F,
        options: &SearchOptions,
    ) -> Option<Codeword>;
}

/// Guess that needs no search, if any
///
/// With at most two candidates the first one is as good as anything. Otherwise
/// the first candidate that separates every remaining candidate from every
/// other wins the game on the next guess at the latest.
#[must_use]
pub fn obvious_guess(engine: &Engine, candidates: &[Codeword]) -> Option<Codeword> {
    if candidates.len() <= 2 {
        return candidates.first().copied();
    }
    candidates
        .iter()
        .find(|guess| engine.partition(guess, candidates).partitions() == candidates.len())
        .copied()
}

/// Always guess the first remaining candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStrategy;

impl Strategy for SimpleStrategy {
    fn name(&self) -> &str {
        "simple"
    }

    fn select_guess<F: EquivalenceFilter>(
        &self,
        _engine: &Engine,
        candidates: &[Codeword],
        _filter: &F,
        _options: &SearchOptions,
    ) -> Option<Codeword> {
        candidates.first().copied()
    }
}

/// Pick the canonical guess with the best heuristic score
///
/// Ties go to the guess that comes first in the guess pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy<H> {
    heuristic: H,
}

impl<H: Heuristic> HeuristicStrategy<H> {
    #[must_use]
    pub const fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    #[must_use]
    pub const fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> Strategy for HeuristicStrategy<H> {
    fn name(&self) -> &str {
        self.heuristic.name()
    }

    fn select_guess<F: EquivalenceFilter>(
        &self,
        engine: &Engine,
        candidates: &[Codeword],
        filter: &F,
        options: &SearchOptions,
    ) -> Option<Codeword> {
        if candidates.len() <= 1 {
            return candidates.first().copied();
        }
        if options.optimize_obvious {
            if let Some(guess) = obvious_guess(engine, candidates) {
                return Some(guess);
            }
        }

        let pool = if options.possibility_only {
            candidates
        } else {
            engine.universe()
        };
        let guesses = filter.canonical_guesses(pool);

        // Score in parallel, keep pool order for a deterministic tie-break
        let scores: Vec<H::Score> = guesses
            .par_iter()
            .map(|guess| {
                self.heuristic
                    .score(&engine.partition(guess, candidates), engine.rules())
            })
            .collect();

        let mut best: Option<(usize, H::Score)> = None;
        for (i, score) in scores.into_iter().enumerate() {
            if best.is_none_or(|(_, top)| H::GOAL.is_better(&score, &top)) {
                best = Some((i, score));
            }
        }

        let (index, score) = best?;
        trace!(
            strategy = self.heuristic.name(),
            guess = %guesses[index],
            ?score,
            pool = guesses.len(),
            candidates = candidates.len(),
            "selected guess"
        );
        Some(guesses[index])
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// First remaining candidate
    Simple(SimpleStrategy),
    /// Smallest worst-case partition
    MinMax(HeuristicStrategy<MinimizeWorstCase>),
    /// Smallest expected partition
    MinAvg(HeuristicStrategy<MinimizeAverage>),
    /// Most informative feedback, plain or by color total
    Entropy(HeuristicStrategy<MaximizeEntropy>),
    /// Most distinct feedbacks
    Parts(HeuristicStrategy<MaximizePartitions>),
}

impl StrategyType {
    /// Every name accepted by [`StrategyType::from_name`], in report order
    pub const NAMES: [&'static str; 6] = ["simple", "minmax", "minavg", "entropy", "entropy*", "parts"];

    /// Create strategy from name string
    ///
    /// # Errors
    /// Returns `MastermindError::Configuration` for an unknown name.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::solver::{Strategy, StrategyType};
    ///
    /// let strategy = StrategyType::from_name("entropy*").unwrap();
    /// assert_eq!(strategy.name(), "entropy*");
    /// assert!(StrategyType::from_name("knuth").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "simple" => Ok(Self::Simple(SimpleStrategy)),
            "minmax" => Ok(Self::MinMax(HeuristicStrategy::new(
                MinimizeWorstCase::default(),
            ))),
            "minavg" => Ok(Self::MinAvg(HeuristicStrategy::new(MinimizeAverage))),
            "entropy" => Ok(Self::Entropy(HeuristicStrategy::new(MaximizeEntropy::new()))),
            "entropy*" => Ok(Self::Entropy(HeuristicStrategy::new(
                MaximizeEntropy::equal_color_pegs(),
            ))),
            "parts" => Ok(Self::Parts(HeuristicStrategy::new(MaximizePartitions))),
            other => Err(MastermindError::Configuration(format!(
                "unknown strategy '{other}', expected one of {}",
                Self::NAMES.join(", ")
            ))),
        }
    }

    /// All strategies, in report order
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::NAMES
            .iter()
            .filter_map(|name| Self::from_name(name).ok())
            .collect()
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &str {
        match self {
            Self::Simple(s) => s.name(),
            Self::MinMax(s) => s.name(),
            Self::MinAvg(s) => s.name(),
            Self::Entropy(s) => s.name(),
            Self::Parts(s) => s.name(),
        }
    }

    fn select_guess<F: EquivalenceFilter>(
        &self,
        engine: &Engine,
        candidates: &[Codeword],
        filter: &F,
        options: &SearchOptions,
    ) -> Option<Codeword> {
        match self {
            Self::Simple(s) => s.select_guess(engine, candidates, filter, options),
            Self::MinMax(s) => s.select_guess(engine, candidates, filter, options),
            Self::MinAvg(s) => s.select_guess(engine, candidates, filter, options),
            Self::Entropy(s) => s.select_guess(engine, candidates, filter, options),
            Self::Parts(s) => s.select_guess(engine, candidates, filter, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::equivalence::{ConstraintEquivalenceFilter, IdentityFilter};

    fn code(text: &str, engine: &Engine) -> Codeword {
        Codeword::parse(text, engine.rules()).unwrap()
    }

    #[test]
    fn simple_strategy_takes_first_candidate() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        let candidates = vec![code("12", &engine), code("21", &engine)];
        let guess = SimpleStrategy.select_guess(
            &engine,
            &candidates,
            &IdentityFilter,
            &SearchOptions::default(),
        );
        assert_eq!(guess, Some(code("12", &engine)));

        let none = SimpleStrategy.select_guess(&engine, &[], &IdentityFilter, &SearchOptions::default());
        assert_eq!(none, None);
    }

    #[test]
    fn obvious_guess_with_two_candidates() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        let candidates = vec![code("1234", &engine), code("4321", &engine)];
        assert_eq!(obvious_guess(&engine, &candidates), Some(candidates[0]));
    }

    #[test]
    fn obvious_guess_finds_separating_candidate() {
        let engine = Engine::try_new(2, 3, true).unwrap();
        // 10 answers (1,0) to both 20 and 12; 20 separates all three
        let candidates = vec![code("10", &engine), code("20", &engine), code("12", &engine)];
        assert_eq!(obvious_guess(&engine, &candidates), Some(code("20", &engine)));

        let candidates = vec![code("00", &engine), code("11", &engine), code("22", &engine)];
        assert_eq!(obvious_guess(&engine, &candidates), None);
    }

    #[test]
    fn minmax_first_guess_classic() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        let filter = ConstraintEquivalenceFilter::new(engine.rules());
        let strategy = StrategyType::from_name("minmax").unwrap();
        let guess = strategy.select_guess(
            &engine,
            engine.universe(),
            &filter,
            &SearchOptions::default(),
        );
        // Worst case 256 remaining, as in the classic analysis
        assert_eq!(guess, Some(code("0011", &engine)));
    }

    #[test]
    fn filter_does_not_change_choice() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        let constraint = ConstraintEquivalenceFilter::new(engine.rules());
        let options = SearchOptions::default();

        for strategy in StrategyType::all() {
            let pruned = strategy.select_guess(&engine, engine.universe(), &constraint, &options);
            let full = strategy.select_guess(&engine, engine.universe(), &IdentityFilter, &options);
            assert_eq!(pruned, full, "{}", strategy.name());
        }
    }

    #[test]
    fn possibility_only_guesses_a_candidate() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        let candidates = engine.filter(engine.universe(), &code("0011", &engine), Feedback::new(1, 0));
        let options = SearchOptions {
            optimize_obvious: false,
            possibility_only: true,
        };

        for strategy in StrategyType::all() {
            let guess = strategy
                .select_guess(&engine, &candidates, &IdentityFilter, &options)
                .unwrap();
            assert!(candidates.contains(&guess), "{}", strategy.name());
        }
    }

    #[test]
    fn single_candidate_is_guessed() {
        let engine = Engine::try_new(4, 6, true).unwrap();
        let only = [code("5432", &engine)];
        for strategy in StrategyType::all() {
            let guess = strategy.select_guess(&engine, &only, &IdentityFilter, &SearchOptions::default());
            assert_eq!(guess, Some(only[0]));
        }
    }

    #[test]
    fn names_round_trip() {
        let names: Vec<String> = StrategyType::all()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, StrategyType::NAMES);
        assert!(matches!(
            StrategyType::from_name("random"),
            Err(MastermindError::Configuration(_))
        ));
    }
}
