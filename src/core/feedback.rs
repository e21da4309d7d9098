//! Mastermind feedback calculation and representation
//!
//! A feedback counts exact matches (right color, right peg) and color-only
//! matches (right color, wrong peg). The pair is packed into one byte with a
//! triangular encoding:
//!
//! ```text
//! value = t × (t + 1) / 2 + exact      where t = exact + color_only
//! ```
//!
//! For any ruleset the perfect feedback `(pegs, 0)` is the largest reachable
//! value, so a frequency table only needs `(pegs + 1)(pegs + 2) / 2` slots.

use super::rules::{MAX_PEGS, Rules};
use std::fmt;

/// Number of distinct feedback values for the largest supported peg count
pub const FEEDBACK_DOMAIN: usize = (MAX_PEGS + 1) * (MAX_PEGS + 2) / 2;

/// Score of a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u8);

impl Feedback {
    /// Create a feedback from exact and color-only counts
    ///
    /// Counts are saturated to at most `MAX_PEGS` pegs in total, with
    /// `exact` taking precedence.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let fb = Feedback::new(1, 2);
    /// assert_eq!(fb.exact(), 1);
    /// assert_eq!(fb.color_only(), 2);
    /// assert_eq!(fb.to_string(), "1A2B");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        let max = MAX_PEGS as u8;
        let exact = if exact > max { max } else { exact };
        let color_only = if color_only > max - exact {
            max - exact
        } else {
            color_only
        };
        let total = exact + color_only;
        Self(total * (total + 1) / 2 + exact)
    }

    /// Create a feedback from a packed value below `FEEDBACK_DOMAIN`
    #[inline]
    #[must_use]
    pub(crate) const fn from_value(value: u8) -> Self {
        debug_assert!((value as usize) < FEEDBACK_DOMAIN);
        Self(value)
    }

    /// The packed value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The feedback of a guess equal to the secret
    #[inline]
    #[must_use]
    pub const fn perfect(rules: &Rules) -> Self {
        Self::new(rules.pegs() as u8, 0)
    }

    /// Largest packed value reachable under `rules`
    #[inline]
    #[must_use]
    pub const fn max_value(rules: &Rules) -> u8 {
        Self::perfect(rules).0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self, rules: &Rules) -> bool {
        self.0 == Self::max_value(rules)
    }

    /// Number of pegs with matching color, in place or not
    #[must_use]
    pub const fn total(self) -> u8 {
        let mut total = 0;
        while (total + 1) * (total + 2) / 2 <= self.0 {
            total += 1;
        }
        total
    }

    /// Number of pegs matching in both color and position
    #[must_use]
    pub const fn exact(self) -> u8 {
        let total = self.total();
        self.0 - total * (total + 1) / 2
    }

    /// Number of colors present in the secret but on a different peg
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.total() - self.exact()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.exact(), self.color_only())
    }
}

/// Occurrence count of each feedback value
///
/// Produced by comparing one guess against a candidate set; each non-empty
/// slot is one partition of the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackFrequencyTable {
    counts: [u32; FEEDBACK_DOMAIN],
}

impl Default for FeedbackFrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackFrequencyTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; FEEDBACK_DOMAIN],
        }
    }

    /// Count one more occurrence of `feedback`
    #[inline]
    pub fn record(&mut self, feedback: Feedback) {
        self.counts[usize::from(feedback.value())] += 1;
    }

    /// Occurrences of `feedback`
    #[inline]
    #[must_use]
    pub fn get(&self, feedback: Feedback) -> u32 {
        self.counts[usize::from(feedback.value())]
    }

    /// Raw counts indexed by packed feedback value
    #[must_use]
    pub const fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Total number of recorded feedbacks
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Number of non-empty partitions
    #[must_use]
    pub fn partitions(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Size of the largest partition
    #[must_use]
    pub fn max_partition(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Sum of squared partition sizes
    #[must_use]
    pub fn sum_of_squares(&self) -> u64 {
        self.counts
            .iter()
            .map(|&count| u64::from(count) * u64::from(count))
            .sum()
    }

    /// Non-empty partitions as `(feedback, size)`, in feedback order
    pub fn iter(&self) -> impl Iterator<Item = (Feedback, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(value, &count)| (Feedback::from_value(value as u8), count))
    }
}

impl fmt::Display for FeedbackFrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (feedback, count) in self.iter() {
            writeln!(f, "{feedback} = {count}")?;
        }
        write!(f, "Total: {}", self.total())
    }
}
