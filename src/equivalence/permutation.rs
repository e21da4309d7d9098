//! Peg and color relabelings of codewords
//!
//! A `CodewordPermutation` first rearranges the pegs, then renames the colors.
//! The color part may be partial: colors that never appeared in a guess are
//! left unmapped and can be sent to any still-unused color.

use crate::core::{Codeword, MAX_COLORS, MAX_PEGS, Rules};
use std::fmt;

/// A symmetry of the game: peg rearrangement followed by color renaming
///
/// Applied to a codeword `c`, peg `i` of the image holds `color[c[peg[i]]]`.
/// Scoring is invariant when guess and secret are relabeled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordPermutation {
    pegs: u8,
    colors: u8,
    peg: [u8; MAX_PEGS],
    color: [Option<u8>; MAX_COLORS],
}

impl CodewordPermutation {
    /// Identity peg order with every color unmapped
    #[must_use]
    pub fn identity(rules: &Rules) -> Self {
        let mut peg = [0u8; MAX_PEGS];
        for (i, slot) in peg.iter_mut().enumerate().take(rules.pegs()) {
            *slot = i as u8;
        }
        Self {
            pegs: rules.pegs() as u8,
            colors: rules.colors() as u8,
            peg,
            color: [None; MAX_COLORS],
        }
    }

    /// Peg rearrangement: image peg `i` takes source peg `peg()[i]`
    #[must_use]
    pub fn peg(&self) -> &[u8] {
        &self.peg[..usize::from(self.pegs)]
    }

    /// Color mapping, `None` where still free
    #[must_use]
    pub fn color(&self) -> &[Option<u8>] {
        &self.color[..usize::from(self.colors)]
    }

    /// Advance the peg part to the next permutation in lexicographic order
    ///
    /// Returns `false` (leaving the order reset to identity) after the last one.
    pub(crate) fn next_peg_order(&mut self) -> bool {
        let n = usize::from(self.pegs);
        next_permutation(&mut self.peg[..n])
    }

    /// Rearrange the pegs of `codeword`, leaving colors untouched
    #[must_use]
    pub fn permute_pegs(&self, codeword: &Codeword) -> Codeword {
        let mut out = [0u8; MAX_PEGS];
        for (slot, &src) in out.iter_mut().zip(self.peg()) {
            *slot = codeword[usize::from(src)];
        }
        Codeword::from_slice(&out[..usize::from(self.pegs)])
    }

    /// Rearrange pegs, then rename colors
    ///
    /// Every color of `codeword` must be mapped.
    #[must_use]
    pub fn permute(&self, codeword: &Codeword) -> Codeword {
        let rearranged = self.permute_pegs(codeword);
        let mut pegs = [0u8; MAX_PEGS];
        for (slot, &c) in pegs.iter_mut().zip(rearranged.pegs()) {
            let mapped = self.color[usize::from(c)];
            debug_assert!(mapped.is_some(), "color {c} is not mapped");
            *slot = mapped.unwrap_or(c);
        }
        Codeword::from_slice(&pegs[..rearranged.len()])
    }

    /// Restrict the color mapping so that `guess` maps onto itself
    ///
    /// Unmapped colors are assigned on demand. Returns `false` when a color
    /// is already mapped elsewhere, in which case no restriction exists and
    /// the permutation is left partially updated.
    pub fn restrict_to_fix(&mut self, guess: &Codeword) -> bool {
        let rearranged = self.permute_pegs(guess);
        for (&from, &to) in rearranged.pegs().iter().zip(guess.pegs()) {
            let slot = &mut self.color[usize::from(from)];
            match *slot {
                None => *slot = Some(to),
                Some(mapped) if mapped != to => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Call `f` with the image of `codeword` under every completion of the
    /// color mapping over the codeword's unmapped colors
    ///
    /// Free colors of the codeword are sent, injectively, to colors that are
    /// not yet the image of any mapped color.
    pub fn for_each_completion(&self, codeword: &Codeword, mut f: impl FnMut(Codeword)) {
        let n_colors = usize::from(self.colors);

        let mut taken = [false; MAX_COLORS];
        for mapped in self.color().iter().flatten() {
            taken[usize::from(*mapped)] = true;
        }
        let targets: Vec<u8> = (0..n_colors as u8)
            .filter(|&c| !taken[usize::from(c)])
            .collect();
        let free: Vec<u8> = (0..n_colors as u8)
            .filter(|&c| self.color[usize::from(c)].is_none() && codeword.contains(c))
            .collect();

        let mut extended = *self;
        for_each_arrangement(&targets, free.len(), &mut |choice: &[u8]| {
            for (&src, &dst) in free.iter().zip(choice) {
                extended.color[usize::from(src)] = Some(dst);
            }
            f(extended.permute(codeword));
        });
    }
}

impl fmt::Display for CodewordPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &p in self.peg() {
            write!(f, "{p}")?;
        }
        write!(f, "|")?;
        for c in self.color() {
            match c {
                Some(c) => write!(f, "{c}")?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}

/// Rearrange `items` into the next lexicographic permutation
///
/// Returns `false` and sorts `items` ascending when it was the last one.
pub(crate) fn next_permutation(items: &mut [u8]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Call `f` with every ordered selection of `k` distinct items from `pool`
fn for_each_arrangement(pool: &[u8], k: usize, f: &mut impl FnMut(&[u8])) {
    fn step(
        pool: &[u8],
        k: usize,
        used: &mut [bool; MAX_COLORS],
        chosen: &mut Vec<u8>,
        f: &mut impl FnMut(&[u8]),
    ) {
        if chosen.len() == k {
            f(chosen.as_slice());
            return;
        }
        for (i, &item) in pool.iter().enumerate() {
            if used[i] {
                continue;
            }
            used[i] = true;
            chosen.push(item);
            step(pool, k, used, chosen, f);
            chosen.pop();
            used[i] = false;
        }
    }

    if k > pool.len() {
        return;
    }
    let mut used = [false; MAX_COLORS];
    let mut chosen = Vec::with_capacity(k);
    step(pool, k, &mut used, &mut chosen, f);
}
