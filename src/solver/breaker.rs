//! Single-game code breaker
//!
//! Plays one game with one strategy: proposes guesses and narrows the
//! candidates as feedback comes in.

use super::strategy::{SearchOptions, Strategy};
use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;
use crate::error::{MastermindError, Result};
use tracing::debug;

/// Running state of one strategy across a single game
///
/// Starts with every codeword as a candidate.
pub struct CodeBreaker<'a, S: Strategy, F: EquivalenceFilter> {
    engine: &'a Engine,
    strategy: S,
    filter: F,
    options: SearchOptions,
    candidates: Vec<Codeword>,
    history: Vec<(Codeword, Feedback)>,
}

impl<'a, S: Strategy, F: EquivalenceFilter> CodeBreaker<'a, S, F> {
    /// Create a code breaker for a new game
    ///
    /// # Parameters
    /// - `engine`: Rules and codeword universe of the game
    /// - `strategy`: The guess selection strategy to use
    /// - `filter`: Fresh equivalence filter for the same rules
    /// - `options`: Search switches passed to the strategy
    pub fn new(engine: &'a Engine, strategy: S, filter: F, options: SearchOptions) -> Self {
        Self {
            engine,
            strategy,
            filter,
            options,
            candidates: engine.universe().to_vec(),
            history: Vec::new(),
        }
    }

    /// Next guess of the strategy
    ///
    /// Returns the empty codeword when no candidate is left.
    #[must_use]
    pub fn make_guess(&self) -> Codeword {
        self.strategy
            .select_guess(self.engine, &self.candidates, &self.filter, &self.options)
            .unwrap_or(Codeword::EMPTY)
    }

    /// Record that `guess` was answered with `feedback`
    ///
    /// # Errors
    /// Returns `MastermindError::Domain` for a guess that is not a codeword of
    /// this game, and `MastermindError::InconsistentState` when no candidate
    /// is consistent with the feedback. The state is left unchanged.
    pub fn add_constraint(&mut self, guess: &Codeword, feedback: Feedback) -> Result<()> {
        Codeword::new(guess.pegs(), self.engine.rules())?;

        let remaining = self.engine.filter(&self.candidates, guess, feedback);
        if remaining.is_empty() {
            return Err(MastermindError::InconsistentState(format!(
                "no candidate answers {feedback} to {guess}"
            )));
        }

        self.filter.add_constraint(guess, feedback, &remaining);
        debug!(
            %guess,
            %feedback,
            before = self.candidates.len(),
            after = remaining.len(),
            "applied constraint"
        );
        self.candidates = remaining;
        self.history.push((*guess, feedback));
        Ok(())
    }

    /// Play against a known secret until it is found
    ///
    /// Returns the `(guess, feedback)` history of the game.
    ///
    /// # Errors
    /// Returns `MastermindError::Domain` for a secret that is not a codeword
    /// of this game, and `MastermindError::InconsistentState` when the
    /// strategy runs out of guesses.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Codeword, Engine};
    /// use mastermind_solver::equivalence::ConstraintEquivalenceFilter;
    /// use mastermind_solver::solver::{CodeBreaker, SearchOptions, StrategyType};
    ///
    /// let engine = Engine::try_new(4, 6, true).unwrap();
    /// let strategy = StrategyType::from_name("minmax").unwrap();
    /// let filter = ConstraintEquivalenceFilter::new(engine.rules());
    /// let mut breaker = CodeBreaker::new(&engine, strategy, filter, SearchOptions::default());
    ///
    /// let secret = Codeword::parse("3632", engine.rules()).unwrap();
    /// let history = breaker.solve(&secret).unwrap();
    /// assert_eq!(history.last().map(|(guess, _)| *guess), Some(secret));
    /// assert!(breaker.is_solved());
    /// ```
    pub fn solve(&mut self, secret: &Codeword) -> Result<Vec<(Codeword, Feedback)>> {
        Codeword::new(secret.pegs(), self.engine.rules())?;

        // Every guess removes at least one candidate
        for _ in 0..self.engine.universe().len() {
            if self.is_solved() {
                return Ok(self.history.clone());
            }
            let guess = self.make_guess();
            if guess.is_empty() {
                break;
            }
            let feedback = self.engine.compare(secret, &guess);
            self.add_constraint(&guess, feedback)?;
        }

        if self.is_solved() {
            Ok(self.history.clone())
        } else {
            Err(MastermindError::InconsistentState(format!(
                "{} did not find {secret}",
                self.strategy.name()
            )))
        }
    }

    /// Whether the last feedback was perfect
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_perfect(self.engine.rules()))
    }

    /// Secrets still consistent with every feedback
    #[must_use]
    pub fn candidates(&self) -> &[Codeword] {
        &self.candidates
    }

    /// `(guess, feedback)` pairs in the order they were added
    #[must_use]
    pub fn history(&self) -> &[(Codeword, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }
}
