//! Shannon entropy maximization
//!
//! Treats the feedback of a guess as a random variable over the remaining
//! candidates and prefers the guess whose feedback carries the most
//! information.
//!
//! # Formula
//! H(X) = -Σ p(x) * log₂(p(x))
//!
//! where p(x) is the share of candidates answering with feedback x.

use super::{Goal, Heuristic};
use crate::core::{FEEDBACK_DOMAIN, Feedback, FeedbackFrequencyTable, Rules};

/// Maximize the entropy of the feedback distribution
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizeEntropy {
    equal_color_pegs: bool,
}

impl MaximizeEntropy {
    /// Entropy over the full feedback
    #[must_use]
    pub const fn new() -> Self {
        Self {
            equal_color_pegs: false,
        }
    }

    /// Entropy over the number of matching colors only
    ///
    /// Feedbacks with the same `exact + color_only` total fall into one
    /// class. The perfect feedback keeps a class of its own, so a guess that
    /// may win is still told apart.
    #[must_use]
    pub const fn equal_color_pegs() -> Self {
        Self {
            equal_color_pegs: true,
        }
    }
}

impl Heuristic for MaximizeEntropy {
    type Score = f64;

    const GOAL: Goal = Goal::Maximize;

    fn name(&self) -> &'static str {
        if self.equal_color_pegs {
            "entropy*"
        } else {
            "entropy"
        }
    }

    fn score(&self, table: &FeedbackFrequencyTable, rules: &Rules) -> Self::Score {
        if !self.equal_color_pegs {
            return shannon_entropy(table.counts());
        }

        // Totals 0..=pegs, then one slot for the perfect feedback
        let mut merged = [0u32; FEEDBACK_DOMAIN];
        let perfect_slot = rules.pegs() + 1;
        for (feedback, count) in table.iter() {
            let slot = if feedback == Feedback::perfect(rules) {
                perfect_slot
            } else {
                usize::from(feedback.total())
            };
            merged[slot] += count;
        }
        shannon_entropy(&merged)
    }
}

/// Shannon entropy, in bits, of a distribution given by raw counts
///
/// Zero counts are ignored; an empty distribution has zero entropy.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::heuristics::shannon_entropy;
///
/// let uniform = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((uniform - 2.0).abs() < 1e-9); // log2(4) = 2 bits
///
/// assert_eq!(shannon_entropy(&[10]), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total = f64::from(counts.iter().sum::<u32>());
    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(Feedback, u32)]) -> FeedbackFrequencyTable {
        let mut table = FeedbackFrequencyTable::new();
        for &(feedback, count) in entries {
            for _ in 0..count {
                table.record(feedback);
            }
        }
        table
    }

    #[test]
    fn shannon_entropy_skewed_is_lower() {
        let uniform = shannon_entropy(&[25, 25, 25, 25]);
        let skewed = shannon_entropy(&[97, 1, 1, 1]);
        assert!(uniform > skewed);
    }

    #[test]
    fn shannon_entropy_bounds() {
        let counts = [10u32, 20, 30];
        let entropy = shannon_entropy(&counts);
        assert!(entropy >= 0.0);
        assert!(entropy <= (counts.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[0, 0]).abs() < f64::EPSILON);
    }

    #[test]
    fn plain_entropy_binary_split() {
        let rules = Rules::default();
        let t = table(&[(Feedback::new(4, 0), 1), (Feedback::new(0, 0), 1)]);
        let entropy = MaximizeEntropy::new().score(&t, &rules);
        assert!((entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn equal_color_pegs_merges_same_total() {
        let rules = Rules::default();
        // (1,1) and (2,0) share total 2; (0,2) too
        let t = table(&[
            (Feedback::new(1, 1), 1),
            (Feedback::new(2, 0), 1),
            (Feedback::new(0, 2), 2),
        ]);
        assert!((MaximizeEntropy::new().score(&t, &rules) - 1.5).abs() < 1e-9);
        assert!(MaximizeEntropy::equal_color_pegs().score(&t, &rules).abs() < 1e-9);
    }

    #[test]
    fn equal_color_pegs_keeps_perfect_apart() {
        let rules = Rules::default();
        // Total 4 both times, but only one of them wins the game
        let t = table(&[(Feedback::new(4, 0), 1), (Feedback::new(2, 2), 1)]);
        let entropy = MaximizeEntropy::equal_color_pegs().score(&t, &rules);
        assert!((entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn names() {
        assert_eq!(MaximizeEntropy::new().name(), "entropy");
        assert_eq!(MaximizeEntropy::equal_color_pegs().name(), "entropy*");
    }
}
