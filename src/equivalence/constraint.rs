//! Constraint-tracking equivalence filter
//!
//! Keeps the subgroup of peg × color relabelings that fix every guess made
//! so far. Two candidates related by such a relabeling lead to identical
//! subtrees, so only one of them needs to be tried as a guess.

use super::EquivalenceFilter;
use super::permutation::CodewordPermutation;
use crate::core::{Codeword, CodewordIndexer, Feedback, Rules};
use rustc_hash::FxHashSet;
use tracing::trace;

/// Equivalence filter backed by the stabilizer of the guess history
///
/// Starts with every peg permutation, each with a fully unmapped color part.
/// Each constraint pins some colors and drops peg permutations that cannot
/// fix the guess, so the group only shrinks.
#[derive(Debug, Clone)]
pub struct ConstraintEquivalenceFilter {
    rules: Rules,
    indexer: CodewordIndexer,
    symmetries: Vec<CodewordPermutation>,
}

impl ConstraintEquivalenceFilter {
    /// Create a filter with no constraints
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Engine;
    /// use mastermind_solver::equivalence::{ConstraintEquivalenceFilter, EquivalenceFilter};
    ///
    /// let engine = Engine::try_new(4, 6, true).unwrap();
    /// let filter = ConstraintEquivalenceFilter::new(engine.rules());
    /// assert_eq!(filter.symmetry_count(), 24);
    ///
    /// // 0000, 0001, 0011, 0012, 0123
    /// assert_eq!(filter.canonical_guesses(engine.universe()).len(), 5);
    /// ```
    #[must_use]
    pub fn new(rules: &Rules) -> Self {
        let mut p = CodewordPermutation::identity(rules);
        let mut symmetries = vec![p];
        while p.next_peg_order() {
            symmetries.push(p);
        }

        Self {
            rules: *rules,
            indexer: CodewordIndexer::new(rules),
            symmetries,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of surviving symmetries
    #[must_use]
    pub fn symmetry_count(&self) -> usize {
        self.symmetries.len()
    }

    #[must_use]
    pub fn symmetries(&self) -> &[CodewordPermutation] {
        &self.symmetries
    }
}

impl EquivalenceFilter for ConstraintEquivalenceFilter {
    fn canonical_guesses(&self, candidates: &[Codeword]) -> Vec<Codeword> {
        let mut crossed_out: FxHashSet<usize> = FxHashSet::default();
        let mut canonical = Vec::new();

        for candidate in candidates {
            if crossed_out.contains(&self.indexer.index(candidate)) {
                continue;
            }
            canonical.push(*candidate);

            // Each symmetry is only a partial relabeling; the union of the
            // images over the whole group is the equivalence class.
            for symmetry in &self.symmetries {
                symmetry.for_each_completion(candidate, |image| {
                    crossed_out.insert(self.indexer.index(&image));
                });
            }
        }

        canonical
    }

    fn add_constraint(&mut self, guess: &Codeword, _feedback: Feedback, _remaining: &[Codeword]) {
        let before = self.symmetries.len();

        let mut i = self.symmetries.len();
        while i > 0 {
            i -= 1;
            if !self.symmetries[i].restrict_to_fix(guess) {
                trace!(permutation = %self.symmetries[i], "dropped symmetry");
                self.symmetries.swap_remove(i);
            }
        }

        trace!(
            %guess,
            before,
            after = self.symmetries.len(),
            "restricted symmetry group"
        );
    }
}
