//! Codeword generation and scoring

use super::codeword::Codeword;
use super::feedback::{Feedback, FeedbackFrequencyTable};
use super::rules::{MAX_COLORS, MAX_PEGS, Rules};
use crate::error::Result;
use tracing::debug;

/// Combinatorial engine for one ruleset
///
/// Owns the rules and the generated universe; shared read-only by every
/// filter, strategy and tree builder working on the same game.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: Rules,
    universe: Vec<Codeword>,
}

impl Engine {
    /// Create an engine and generate its codeword universe
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        let universe = generate(&rules);
        debug!(%rules, codewords = universe.len(), "generated codeword universe");
        Self { rules, universe }
    }

    /// Validate the raw parameters and create an engine
    ///
    /// # Errors
    /// Returns `MastermindError::Configuration` for invalid rules, see
    /// [`Rules::new`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Engine;
    ///
    /// let engine = Engine::try_new(2, 3, true).unwrap();
    /// assert_eq!(engine.universe().len(), 9);
    ///
    /// assert!(Engine::try_new(4, 3, false).is_err());
    /// ```
    pub fn try_new(pegs: usize, colors: usize, repeatable: bool) -> Result<Self> {
        Ok(Self::new(Rules::new(pegs, colors, repeatable)?))
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// All codewords, in generation order
    #[inline]
    #[must_use]
    pub fn universe(&self) -> &[Codeword] {
        &self.universe
    }

    /// Generate a fresh copy of the universe
    ///
    /// Repeatable rules enumerate in mixed-radix counting order (last peg
    /// fastest); non-repeatable rules enumerate permutations of color
    /// subsets in lexicographic order.
    #[must_use]
    pub fn generate_codewords(&self) -> Vec<Codeword> {
        generate(&self.rules)
    }

    /// Score `guess` against `secret`
    ///
    /// The result is symmetric in its two arguments.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Codeword, Engine, Feedback};
    ///
    /// let engine = Engine::try_new(4, 6, true).unwrap();
    /// let secret = Codeword::parse("1123", engine.rules()).unwrap();
    /// let guess = Codeword::parse("3141", engine.rules()).unwrap();
    ///
    /// // peg 1 matches exactly; colors 1 and 3 match elsewhere
    /// assert_eq!(engine.compare(&secret, &guess), Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn compare(&self, secret: &Codeword, guess: &Codeword) -> Feedback {
        let exact = secret
            .pegs()
            .iter()
            .zip(guess.pegs())
            .filter(|(s, g)| s == g)
            .count() as u8;

        let secret_counts = secret.color_counts();
        let guess_counts = guess.color_counts();
        let common: u8 = secret_counts[..self.rules.colors()]
            .iter()
            .zip(&guess_counts[..self.rules.colors()])
            .map(|(&s, &g)| s.min(g))
            .sum();

        Feedback::new(exact, common - exact)
    }

    /// Score every codeword in `guesses` against `secret`
    #[must_use]
    pub fn compare_many(&self, secret: &Codeword, guesses: &[Codeword]) -> Vec<Feedback> {
        guesses
            .iter()
            .map(|guess| self.compare(secret, guess))
            .collect()
    }

    /// Count each feedback value in one pass
    #[must_use]
    pub fn count_frequencies(&self, feedbacks: &[Feedback]) -> FeedbackFrequencyTable {
        let mut table = FeedbackFrequencyTable::new();
        for &feedback in feedbacks {
            table.record(feedback);
        }
        table
    }

    /// Partition sizes induced by `guess` on `candidates`
    ///
    /// Equivalent to `count_frequencies(&compare_many(guess, candidates))`
    /// without the intermediate list.
    #[must_use]
    pub fn partition(&self, guess: &Codeword, candidates: &[Codeword]) -> FeedbackFrequencyTable {
        let mut table = FeedbackFrequencyTable::new();
        for candidate in candidates {
            table.record(self.compare(candidate, guess));
        }
        table
    }

    /// Candidates that would answer `guess` with `feedback`
    #[must_use]
    pub fn filter(
        &self,
        candidates: &[Codeword],
        guess: &Codeword,
        feedback: Feedback,
    ) -> Vec<Codeword> {
        candidates
            .iter()
            .filter(|&candidate| self.compare(candidate, guess) == feedback)
            .copied()
            .collect()
    }
}

fn generate(rules: &Rules) -> Vec<Codeword> {
    let mut out = Vec::with_capacity(rules.size());
    let mut pegs = [0u8; MAX_PEGS];
    if rules.repeatable() {
        generate_counting(rules, &mut pegs, &mut out);
    } else {
        let mut used = [false; MAX_COLORS];
        generate_distinct(rules, 0, &mut pegs, &mut used, &mut out);
    }
    debug_assert_eq!(out.len(), rules.size());
    out
}

fn generate_counting(rules: &Rules, pegs: &mut [u8; MAX_PEGS], out: &mut Vec<Codeword>) {
    let n = rules.pegs();
    let colors = rules.colors() as u8;
    loop {
        out.push(Codeword::from_slice(&pegs[..n]));

        // Increment from the last peg, carrying leftwards
        let mut i = n;
        loop {
            if i == 0 {
                return;
            }
            i -= 1;
            pegs[i] += 1;
            if pegs[i] < colors {
                break;
            }
            pegs[i] = 0;
        }
    }
}

fn generate_distinct(
    rules: &Rules,
    peg: usize,
    pegs: &mut [u8; MAX_PEGS],
    used: &mut [bool; MAX_COLORS],
    out: &mut Vec<Codeword>,
) {
    if peg == rules.pegs() {
        out.push(Codeword::from_slice(&pegs[..peg]));
        return;
    }
    for color in 0..rules.colors() {
        if used[color] {
            continue;
        }
        used[color] = true;
        pegs[peg] = color as u8;
        generate_distinct(rules, peg + 1, pegs, used, out);
        used[color] = false;
    }
}
