//! Game rules
//!
//! Rules fix the number of pegs, the number of colors and whether a color may
//! appear more than once in a codeword.

use crate::error::{MastermindError, Result};
use std::fmt;

/// Largest supported number of pegs
pub const MAX_PEGS: usize = 6;

/// Largest supported number of colors
pub const MAX_COLORS: usize = 10;

/// Immutable description of a Mastermind ruleset
///
/// A `Rules` value is always valid: the only constructor checks the peg and
/// color counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    pegs: usize,
    colors: usize,
    repeatable: bool,
}

impl Rules {
    /// Create a ruleset
    ///
    /// # Errors
    /// Returns `MastermindError::Configuration` if:
    /// - `pegs` is 0 or greater than [`MAX_PEGS`]
    /// - `colors` is 0 or greater than [`MAX_COLORS`]
    /// - colors are not repeatable and `pegs > colors`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Rules;
    ///
    /// let rules = Rules::new(4, 6, true).unwrap();
    /// assert_eq!(rules.size(), 1296);
    ///
    /// assert!(Rules::new(5, 4, false).is_err());
    /// ```
    pub fn new(pegs: usize, colors: usize, repeatable: bool) -> Result<Self> {
        if pegs == 0 || pegs > MAX_PEGS {
            return Err(MastermindError::Configuration(format!(
                "pegs must be between 1 and {MAX_PEGS}, got {pegs}"
            )));
        }
        if colors == 0 || colors > MAX_COLORS {
            return Err(MastermindError::Configuration(format!(
                "colors must be between 1 and {MAX_COLORS}, got {colors}"
            )));
        }
        if !repeatable && pegs > colors {
            return Err(MastermindError::Configuration(format!(
                "{pegs} pegs need at least {pegs} colors without repetition, got {colors}"
            )));
        }

        Ok(Self {
            pegs,
            colors,
            repeatable,
        })
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> usize {
        self.pegs
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    #[inline]
    #[must_use]
    pub const fn repeatable(&self) -> bool {
        self.repeatable
    }

    /// Number of codewords in the universe
    ///
    /// `colors^pegs` with repetition, the falling factorial
    /// `colors × (colors-1) × … × (colors-pegs+1)` without.
    #[must_use]
    pub fn size(&self) -> usize {
        if self.repeatable {
            self.colors.pow(self.pegs as u32)
        } else {
            (self.colors - self.pegs + 1..=self.colors).product()
        }
    }
}

impl Default for Rules {
    /// The classic game: 4 pegs, 6 colors, repetition allowed
    fn default() -> Self {
        Self {
            pegs: 4,
            colors: 6,
            repeatable: true,
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p{}c{}{}",
            self.pegs,
            self.colors,
            if self.repeatable { "r" } else { "n" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_size_repeatable() {
        assert_eq!(Rules::new(2, 3, true).unwrap().size(), 9);
        assert_eq!(Rules::new(4, 6, true).unwrap().size(), 1296);
        assert_eq!(Rules::new(1, 1, true).unwrap().size(), 1);
    }

    #[test]
    fn rules_size_non_repeatable() {
        assert_eq!(Rules::new(4, 10, false).unwrap().size(), 5040);
        assert_eq!(Rules::new(3, 3, false).unwrap().size(), 6);
        assert_eq!(Rules::new(1, 5, false).unwrap().size(), 5);
    }

    #[test]
    fn rules_reject_invalid_counts() {
        assert!(matches!(
            Rules::new(0, 6, true),
            Err(MastermindError::Configuration(_))
        ));
        assert!(matches!(
            Rules::new(4, 0, true),
            Err(MastermindError::Configuration(_))
        ));
        assert!(matches!(
            Rules::new(MAX_PEGS + 1, 6, true),
            Err(MastermindError::Configuration(_))
        ));
        assert!(matches!(
            Rules::new(4, MAX_COLORS + 1, true),
            Err(MastermindError::Configuration(_))
        ));
    }

    #[test]
    fn rules_non_repeatable_needs_enough_colors() {
        assert!(Rules::new(4, 3, false).is_err());
        assert!(Rules::new(4, 3, true).is_ok());
        assert!(Rules::new(4, 4, false).is_ok());
    }

    #[test]
    fn rules_default_is_classic() {
        let rules = Rules::default();
        assert_eq!(rules.pegs(), 4);
        assert_eq!(rules.colors(), 6);
        assert!(rules.repeatable());
    }

    #[test]
    fn rules_display() {
        assert_eq!(Rules::default().to_string(), "p4c6r");
        assert_eq!(Rules::new(4, 10, false).unwrap().to_string(), "p4c10n");
    }
}
