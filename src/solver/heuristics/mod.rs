//! Scoring functions for candidate guesses
//!
//! A heuristic looks only at how a guess partitions the remaining candidates
//! (its feedback frequency table) and returns a comparable score. Whether a
//! lower or a higher score is better is part of the heuristic.

mod average;
mod entropy;
mod minimax;
mod partitions;

pub use average::MinimizeAverage;
pub use entropy::{MaximizeEntropy, shannon_entropy};
pub use minimax::{MAX_WORST_CASE_LEVELS, MinimizeWorstCase};
pub use partitions::MaximizePartitions;

use crate::core::{FeedbackFrequencyTable, Rules};
use std::fmt;

/// Direction in which a heuristic's score improves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Minimize,
    Maximize,
}

impl Goal {
    /// Whether `candidate` is strictly better than `best`
    ///
    /// Equal scores are never better, so the earliest best guess wins ties.
    #[inline]
    #[must_use]
    pub fn is_better<T: PartialOrd>(self, candidate: &T, best: &T) -> bool {
        match self {
            Self::Minimize => candidate < best,
            Self::Maximize => candidate > best,
        }
    }
}

/// A pure scoring function over feedback partitions
pub trait Heuristic: Send + Sync {
    /// Totally ordered in practice; `f64` scores are never NaN
    type Score: Copy + PartialOrd + Send + fmt::Debug;

    const GOAL: Goal;

    /// Short name used on the command line and in reports
    fn name(&self) -> &'static str;

    /// Score the partition `table` of the candidates under `rules`
    fn score(&self, table: &FeedbackFrequencyTable, rules: &Rules) -> Self::Score;
}
