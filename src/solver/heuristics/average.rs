//! Expected-size minimization

use super::{Goal, Heuristic};
use crate::core::{FeedbackFrequencyTable, Rules};

/// Minimize the expected number of remaining candidates
///
/// With `n` candidates split into partitions of size `sᵢ`, the expected
/// remaining count is `Σ sᵢ² / n`. `n` is the same for every guess at a
/// node, so the score is the plain sum of squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimizeAverage;

impl Heuristic for MinimizeAverage {
    type Score = u64;

    const GOAL: Goal = Goal::Minimize;

    fn name(&self) -> &'static str {
        "minavg"
    }

    fn score(&self, table: &FeedbackFrequencyTable, _rules: &Rules) -> Self::Score {
        table.sum_of_squares()
    }
}
