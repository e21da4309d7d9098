//! Canonical guess enumeration
//!
//! Lists the non-equivalent guesses at the root, then for each of them the
//! non-equivalent guesses once it has been played, down to a given depth.
//! Feedback does not affect the symmetry group, so none is needed.

use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;

/// Canonical guesses at one level of the enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalLevel {
    /// Each guess with the level that follows it
    Expanded(Vec<CanonicalBranch>),
    /// Guesses at the deepest level
    Leaf(Vec<Codeword>),
}

/// A canonical guess and the canonical guesses left after playing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalBranch {
    pub guess: Codeword,
    pub next: CanonicalLevel,
}

impl CanonicalLevel {
    /// Canonical guesses at this level, in universe order
    #[must_use]
    pub fn guesses(&self) -> Vec<Codeword> {
        match self {
            Self::Expanded(branches) => branches.iter().map(|b| b.guess).collect(),
            Self::Leaf(guesses) => guesses.clone(),
        }
    }
}

/// Enumerate canonical guess sequences `depth` guesses deep
///
/// With `depth == 0` only the canonical guesses of `filter` are listed.
///
/// # Examples
/// ```
/// use mastermind_solver::commands::enumerate_canonical;
/// use mastermind_solver::core::Engine;
/// use mastermind_solver::equivalence::ConstraintEquivalenceFilter;
///
/// let engine = Engine::try_new(4, 6, true).unwrap();
/// let filter = ConstraintEquivalenceFilter::new(engine.rules());
/// let root = enumerate_canonical(&engine, &filter, 0);
/// assert_eq!(root.guesses().len(), 5);
/// ```
pub fn enumerate_canonical<F: EquivalenceFilter>(
    engine: &Engine,
    filter: &F,
    depth: usize,
) -> CanonicalLevel {
    let canonical = filter.canonical_guesses(engine.universe());
    if depth == 0 {
        return CanonicalLevel::Leaf(canonical);
    }

    let branches = canonical
        .into_iter()
        .map(|guess| {
            let mut child = filter.clone();
            child.add_constraint(&guess, Feedback::new(0, 0), engine.universe());
            CanonicalBranch {
                guess,
                next: enumerate_canonical(engine, &child, depth - 1),
            }
        })
        .collect();
    CanonicalLevel::Expanded(branches)
}
