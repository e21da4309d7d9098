//! Partition-count maximization

use super::{Goal, Heuristic};
use crate::core::{FeedbackFrequencyTable, Rules};

/// Maximize the number of distinct feedbacks a guess can receive
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizePartitions;

impl Heuristic for MaximizePartitions {
    type Score = usize;

    const GOAL: Goal = Goal::Maximize;

    fn name(&self) -> &'static str {
        "parts"
    }

    fn score(&self, table: &FeedbackFrequencyTable, _rules: &Rules) -> Self::Score {
        table.partitions()
    }
}
