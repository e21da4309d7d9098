//! Codeword representation
//!
//! A Codeword stores one color index per peg in a fixed-size array, so it is
//! `Copy` and cheap to hash and compare.

use super::rules::{MAX_COLORS, MAX_PEGS, Rules};
use crate::error::{MastermindError, Result};
use std::fmt;
use std::ops::Index;

/// An assignment of colors to pegs, or the empty "no guess" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codeword {
    len: u8,
    pegs: [u8; MAX_PEGS],
}

impl Codeword {
    /// The empty codeword, returned when no guess can be made
    pub const EMPTY: Self = Self {
        len: 0,
        pegs: [0; MAX_PEGS],
    };

    /// Create a codeword from color indices, validated against `rules`
    ///
    /// # Errors
    /// Returns `MastermindError::Domain` if:
    /// - The number of colors differs from the number of pegs
    /// - A color is outside `[0, colors)`
    /// - A color repeats while the rules forbid repetition
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Codeword, Rules};
    ///
    /// let rules = Rules::new(4, 6, true).unwrap();
    /// let code = Codeword::new(&[1, 2, 3, 4], &rules).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Codeword::new(&[1, 2, 3], &rules).is_err());
    /// assert!(Codeword::new(&[1, 2, 3, 6], &rules).is_err());
    /// ```
    pub fn new(colors: &[u8], rules: &Rules) -> Result<Self> {
        if colors.len() != rules.pegs() {
            return Err(MastermindError::Domain(format!(
                "expected {} pegs, got {}",
                rules.pegs(),
                colors.len()
            )));
        }

        let mut seen = [false; MAX_COLORS];
        for (peg, &color) in colors.iter().enumerate() {
            if usize::from(color) >= rules.colors() {
                return Err(MastermindError::Domain(format!(
                    "color {color} on peg {peg} is outside 0..{}",
                    rules.colors()
                )));
            }
            if !rules.repeatable() && seen[usize::from(color)] {
                return Err(MastermindError::Domain(format!(
                    "color {color} repeats but the rules forbid repetition"
                )));
            }
            seen[usize::from(color)] = true;
        }

        Ok(Self::from_slice(colors))
    }

    /// Parse a codeword written as one digit per peg, e.g. `"0123"`
    ///
    /// # Errors
    /// Returns `MastermindError::Domain` if the text contains a non-digit or
    /// fails the checks of [`Codeword::new`].
    pub fn parse(text: &str, rules: &Rules) -> Result<Self> {
        let colors = text
            .trim()
            .chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| MastermindError::Domain(format!("'{ch}' is not a color digit")))
            })
            .collect::<Result<Vec<u8>>>()?;

        Self::new(&colors, rules)
    }

    /// Build a codeword without validation
    ///
    /// Callers guarantee `colors.len() <= MAX_PEGS` and in-range colors.
    pub(crate) fn from_slice(colors: &[u8]) -> Self {
        debug_assert!(colors.len() <= MAX_PEGS);
        let mut pegs = [0; MAX_PEGS];
        pegs[..colors.len()].copy_from_slice(colors);
        Self {
            len: colors.len() as u8,
            pegs,
        }
    }

    /// Check for the "no guess" sentinel
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Colors on each peg
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs[..self.len()]
    }

    /// Check whether `color` appears on any peg
    #[inline]
    #[must_use]
    pub fn contains(&self, color: u8) -> bool {
        self.pegs().contains(&color)
    }

    /// Number of pegs holding `color`
    #[inline]
    #[must_use]
    pub fn count(&self, color: u8) -> usize {
        self.pegs().iter().filter(|&&c| c == color).count()
    }

    /// Occurrences of every color, indexed by color
    #[inline]
    #[must_use]
    pub fn color_counts(&self) -> [u8; MAX_COLORS] {
        let mut counts = [0u8; MAX_COLORS];
        for &color in self.pegs() {
            counts[usize::from(color)] += 1;
        }
        counts
    }
}

impl Index<usize> for Codeword {
    type Output = u8;

    fn index(&self, peg: usize) -> &u8 {
        &self.pegs()[peg]
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for &color in self.pegs() {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// Packs codewords into dense integer keys
///
/// The key is the mixed-radix number formed by the pegs (first peg most
/// significant), so it is injective for a fixed ruleset and matches the
/// generation order of repeatable universes.
#[derive(Debug, Clone, Copy)]
pub struct CodewordIndexer {
    pegs: usize,
    colors: usize,
}

impl CodewordIndexer {
    #[must_use]
    pub const fn new(rules: &Rules) -> Self {
        Self {
            pegs: rules.pegs(),
            colors: rules.colors(),
        }
    }

    /// Key of a codeword, in `[0, colors^pegs)`
    #[inline]
    #[must_use]
    pub fn index(&self, codeword: &Codeword) -> usize {
        debug_assert_eq!(codeword.len(), self.pegs);
        codeword
            .pegs()
            .iter()
            .fold(0, |key, &color| key * self.colors + usize::from(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Rules {
        Rules::new(4, 6, true).unwrap()
    }

    #[test]
    fn codeword_creation_valid() {
        let code = Codeword::new(&[1, 2, 3, 4], &rules()).unwrap();
        assert_eq!(code.pegs(), &[1, 2, 3, 4]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn codeword_creation_invalid_length() {
        assert!(matches!(
            Codeword::new(&[1, 2, 3], &rules()),
            Err(MastermindError::Domain(_))
        ));
        assert!(Codeword::new(&[1, 2, 3, 4, 5], &rules()).is_err());
    }

    #[test]
    fn codeword_creation_color_out_of_range() {
        assert!(matches!(
            Codeword::new(&[0, 0, 0, 6], &rules()),
            Err(MastermindError::Domain(_))
        ));
    }

    #[test]
    fn codeword_rejects_repeats_when_forbidden() {
        let rules = Rules::new(3, 5, false).unwrap();
        assert!(Codeword::new(&[0, 1, 2], &rules).is_ok());
        assert!(Codeword::new(&[0, 1, 0], &rules).is_err());
    }

    #[test]
    fn codeword_parse() {
        let code = Codeword::parse("0123", &rules()).unwrap();
        assert_eq!(code.pegs(), &[0, 1, 2, 3]);

        assert!(Codeword::parse("01a3", &rules()).is_err());
        assert!(Codeword::parse("012", &rules()).is_err());
        assert!(Codeword::parse("0129", &rules()).is_err());
    }

    #[test]
    fn codeword_index_access() {
        let code = Codeword::parse("5310", &rules()).unwrap();
        assert_eq!(code[0], 5);
        assert_eq!(code[1], 3);
        assert_eq!(code[3], 0);
    }

    #[test]
    fn codeword_contains_and_count() {
        let code = Codeword::parse("1121", &rules()).unwrap();
        assert!(code.contains(1));
        assert!(code.contains(2));
        assert!(!code.contains(0));
        assert_eq!(code.count(1), 3);
        assert_eq!(code.count(2), 1);
        assert_eq!(code.count(5), 0);

        let counts = code.color_counts();
        assert_eq!(counts[1], 3);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 4);
    }

    #[test]
    fn codeword_empty_sentinel() {
        assert!(Codeword::EMPTY.is_empty());
        assert_eq!(Codeword::EMPTY.len(), 0);
        assert_eq!(Codeword::EMPTY.to_string(), "-");
    }

    #[test]
    fn codeword_display() {
        let code = Codeword::parse("0042", &rules()).unwrap();
        assert_eq!(format!("{code}"), "0042");
    }

    #[test]
    fn indexer_is_mixed_radix() {
        let rules = Rules::new(2, 3, true).unwrap();
        let indexer = CodewordIndexer::new(&rules);
        assert_eq!(indexer.index(&Codeword::parse("00", &rules).unwrap()), 0);
        assert_eq!(indexer.index(&Codeword::parse("01", &rules).unwrap()), 1);
        assert_eq!(indexer.index(&Codeword::parse("10", &rules).unwrap()), 3);
        assert_eq!(indexer.index(&Codeword::parse("22", &rules).unwrap()), 8);
    }
}
