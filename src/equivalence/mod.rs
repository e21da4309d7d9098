//! Symmetry-based pruning of guesses
//!
//! Relabeling pegs and colors consistently in guess and secret does not
//! change the feedback. As long as a relabeling also fixes every guess made
//! so far, two guesses related by it produce isomorphic subtrees, so only one
//! representative per class ("canonical guess") needs to be searched.

mod constraint;
mod permutation;

pub use constraint::ConstraintEquivalenceFilter;
pub use permutation::CodewordPermutation;

use crate::core::{Codeword, Feedback, Rules};

/// Tracks which guesses are still equivalent after a history of constraints
///
/// Filters are cloned at every branch of a search; a clone must be fully
/// independent of its parent.
pub trait EquivalenceFilter: Clone + Send + Sync {
    /// One representative per equivalence class, in candidate order
    ///
    /// The representative is the first member of its class in `candidates`.
    fn canonical_guesses(&self, candidates: &[Codeword]) -> Vec<Codeword>;

    /// Absorb the observation that `guess` answered `feedback`, leaving
    /// `remaining` candidates
    fn add_constraint(&mut self, guess: &Codeword, feedback: Feedback, remaining: &[Codeword]);
}

/// A filter that never prunes: every candidate is its own class
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFilter;

impl EquivalenceFilter for IdentityFilter {
    fn canonical_guesses(&self, candidates: &[Codeword]) -> Vec<Codeword> {
        candidates.to_vec()
    }

    fn add_constraint(&mut self, _guess: &Codeword, _feedback: Feedback, _remaining: &[Codeword]) {}
}

/// Runtime choice between the available filters
///
/// Keeps static dispatch in the search while letting the caller decide
/// whether symmetry pruning is on.
#[derive(Debug, Clone)]
pub enum FilterType {
    Constraint(ConstraintEquivalenceFilter),
    Identity(IdentityFilter),
}

impl FilterType {
    /// The constraint filter when `symmetry` is set, the identity filter otherwise
    #[must_use]
    pub fn new(rules: &Rules, symmetry: bool) -> Self {
        if symmetry {
            Self::Constraint(ConstraintEquivalenceFilter::new(rules))
        } else {
            Self::Identity(IdentityFilter)
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Constraint(_) => "constraint",
            Self::Identity(_) => "identity",
        }
    }
}

impl EquivalenceFilter for FilterType {
    fn canonical_guesses(&self, candidates: &[Codeword]) -> Vec<Codeword> {
        match self {
            Self::Constraint(f) => f.canonical_guesses(candidates),
            Self::Identity(f) => f.canonical_guesses(candidates),
        }
    }

    fn add_constraint(&mut self, guess: &Codeword, feedback: Feedback, remaining: &[Codeword]) {
        match self {
            Self::Constraint(f) => f.add_constraint(guess, feedback, remaining),
            Self::Identity(f) => f.add_constraint(guess, feedback, remaining),
        }
    }
}
