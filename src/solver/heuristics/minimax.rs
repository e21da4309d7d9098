//! Worst-case minimization
//!
//! Prefers the guess whose largest partition is smallest. Ties can be broken
//! on the second and third largest partitions.

use super::{Goal, Heuristic};
use crate::core::{FeedbackFrequencyTable, Rules};

/// Deepest tie-break supported by [`MinimizeWorstCase`]
pub const MAX_WORST_CASE_LEVELS: usize = 3;

/// Minimize the size of the largest partitions
///
/// The score holds the `levels` largest partition sizes in descending order
/// (padded with zeros) and compares lexicographically.
#[derive(Debug, Clone, Copy)]
pub struct MinimizeWorstCase {
    levels: usize,
}

impl MinimizeWorstCase {
    /// Tie-break on the `levels` largest partitions, clamped to `1..=3`
    #[must_use]
    pub fn new(levels: usize) -> Self {
        Self {
            levels: levels.clamp(1, MAX_WORST_CASE_LEVELS),
        }
    }

    #[must_use]
    pub const fn levels(&self) -> usize {
        self.levels
    }
}

impl Default for MinimizeWorstCase {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Heuristic for MinimizeWorstCase {
    type Score = [u32; MAX_WORST_CASE_LEVELS];

    const GOAL: Goal = Goal::Minimize;

    fn name(&self) -> &'static str {
        "minmax"
    }

    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, FeedbackFrequencyTable, Rules};
    /// use mastermind_solver::solver::heuristics::{Heuristic, MinimizeWorstCase};
    ///
    /// let mut table = FeedbackFrequencyTable::new();
    /// for (fb, n) in [(Feedback::new(0, 0), 5), (Feedback::new(1, 0), 3), (Feedback::new(0, 1), 4)] {
    ///     for _ in 0..n {
    ///         table.record(fb);
    ///     }
    /// }
    ///
    /// let rules = Rules::default();
    /// assert_eq!(MinimizeWorstCase::new(1).score(&table, &rules), [5, 0, 0]);
    /// assert_eq!(MinimizeWorstCase::new(3).score(&table, &rules), [5, 4, 3]);
    /// ```
    fn score(&self, table: &FeedbackFrequencyTable, _rules: &Rules) -> Self::Score {
        let mut top = [0u32; MAX_WORST_CASE_LEVELS];
        if self.levels == 1 {
            top[0] = table.max_partition();
            return top;
        }
        for (_, size) in table.iter() {
            // Insert into the descending top list, dropping the smallest
            let mut value = size;
            for slot in top.iter_mut().take(self.levels) {
                if value > *slot {
                    std::mem::swap(slot, &mut value);
                }
            }
        }
        top
    }
}
