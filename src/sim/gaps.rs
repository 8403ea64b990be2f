//! Gap offset sources
//!
//! Barriers never roll their own dice: every new gap comes from a `GapSource`
//! owned by the session, so a seed (or a script) fully determines the run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::MAX_GAP_OFFSET;

/// Supplies horizontal gap offsets in `[0, MAX_GAP_OFFSET)`
pub trait GapSource {
    fn next_gap_offset(&mut self) -> u32;
}

/// Seeded PCG generator (the default source)
#[derive(Debug, Clone)]
pub struct SeededGaps {
    seed: u64,
    rng: Pcg32,
}

impl SeededGaps {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from a new seed
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

impl GapSource for SeededGaps {
    fn next_gap_offset(&mut self) -> u32 {
        self.rng.random_range(0..MAX_GAP_OFFSET)
    }
}

/// Replays a fixed list of offsets, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedGaps {
    offsets: Vec<u32>,
    cursor: usize,
}

impl ScriptedGaps {
    /// Panics on an empty script.
    pub fn new(offsets: Vec<u32>) -> Self {
        assert!(!offsets.is_empty(), "scripted gap list must not be empty");
        Self { offsets, cursor: 0 }
    }

    /// Every barrier gets the same gap
    pub fn constant(offset: u32) -> Self {
        Self::new(vec![offset])
    }
}

impl GapSource for ScriptedGaps {
    fn next_gap_offset(&mut self) -> u32 {
        let offset = self.offsets[self.cursor];
        self.cursor = (self.cursor + 1) % self.offsets.len();
        debug_assert!(
            offset < MAX_GAP_OFFSET,
            "scripted gap offset {offset} out of range"
        );
        offset % MAX_GAP_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_gaps_in_range() {
        let mut gaps = SeededGaps::new(7);
        for _ in 0..10_000 {
            assert!(gaps.next_gap_offset() < MAX_GAP_OFFSET);
        }
    }

    #[test]
    fn test_seeded_gaps_reproducible() {
        let mut a = SeededGaps::new(424242);
        let mut b = SeededGaps::new(424242);
        let seq_a: Vec<u32> = (0..64).map(|_| a.next_gap_offset()).collect();
        let seq_b: Vec<u32> = (0..64).map(|_| b.next_gap_offset()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut gaps = SeededGaps::new(1);
        let first: Vec<u32> = (0..8).map(|_| gaps.next_gap_offset()).collect();
        gaps.reseed(1);
        let again: Vec<u32> = (0..8).map(|_| gaps.next_gap_offset()).collect();
        assert_eq!(first, again);
        assert_eq!(gaps.seed(), 1);
    }

    #[test]
    fn test_scripted_gaps_wrap() {
        let mut gaps = ScriptedGaps::new(vec![0, 100, 489]);
        let seq: Vec<u32> = (0..5).map(|_| gaps.next_gap_offset()).collect();
        assert_eq!(seq, vec![0, 100, 489, 0, 100]);
    }
}
