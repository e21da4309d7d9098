//! Formatting utilities for terminal output

use crate::core::{Feedback, Rules};

/// Format a feedback as key pegs: `●` exact, `○` color only, `·` miss
#[must_use]
pub fn feedback_pegs(feedback: Feedback, rules: &Rules) -> String {
    let exact = usize::from(feedback.exact());
    let color = usize::from(feedback.color_only());
    let miss = rules.pegs().saturating_sub(exact + color);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(color), "·".repeat(miss))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Right-aligned frequency table cell, `-` for zero
#[must_use]
pub fn count_cell(count: usize, width: usize) -> String {
    if count == 0 {
        format!("{:>width$}", "-")
    } else {
        format!("{count:>width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_classic() {
        let rules = Rules::default();
        assert_eq!(feedback_pegs(Feedback::new(1, 2), &rules), "●○○·");
        assert_eq!(feedback_pegs(Feedback::perfect(&rules), &rules), "●●●●");
        assert_eq!(feedback_pegs(Feedback::new(0, 0), &rules), "····");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn count_cells() {
        assert_eq!(count_cell(0, 4), "   -");
        assert_eq!(count_cell(123, 4), " 123");
    }
}
