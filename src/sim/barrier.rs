//! Horizontal barriers with a single gap
//!
//! The pool never grows or shrinks: a barrier that scrolls off the top is
//! teleported back below the screen with a fresh gap.

use serde::{Deserialize, Serialize};

use super::gaps::GapSource;
use crate::consts::*;

/// One barrier (a left and a right bar with a gap between them)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barrier {
    /// Top edge of both bars
    pub y: f32,
    /// Left edge of the gap
    pub gap_offset: u32,
    /// Pass bonus already awarded this cycle
    pub scored: bool,
}

impl Barrier {
    pub fn new(y: f32, gap_offset: u32) -> Self {
        debug_assert!(gap_offset < MAX_GAP_OFFSET);
        Self {
            y,
            gap_offset,
            scored: false,
        }
    }

    /// Spawn the barrier for pool slot `slot`, staggered below the screen
    pub fn spawn(slot: usize, gaps: &mut impl GapSource) -> Self {
        Self::new(
            BARRIER_RESET_Y + slot as f32 * PLATFORM_STAGGER,
            gaps.next_gap_offset(),
        )
    }

    /// Rise one step. Returns true if the barrier was recycled.
    ///
    /// The reset position is absolute; overshoot past the threshold is dropped.
    pub fn update(&mut self, gaps: &mut impl GapSource) -> bool {
        self.y -= RISING_SPEED;
        if self.y < RECYCLE_THRESHOLD {
            self.recycle(gaps.next_gap_offset());
            return true;
        }
        false
    }

    fn recycle(&mut self, gap_offset: u32) {
        debug_assert!(gap_offset < MAX_GAP_OFFSET);
        self.y = BARRIER_RESET_Y;
        self.gap_offset = gap_offset;
        self.scored = false;
    }

    /// Gap span `[start, end]` in screen units
    #[inline]
    pub fn gap(&self) -> (f32, f32) {
        let start = self.gap_offset as f32;
        (start, start + GAP_WIDTH as f32)
    }

    /// Left bar as (x, width)
    pub fn left_segment(&self) -> (f32, f32) {
        (0.0, self.gap_offset as f32)
    }

    /// Right bar as (x, width)
    pub fn right_segment(&self) -> (f32, f32) {
        let (_, gap_end) = self.gap();
        (gap_end, SCREEN_WIDTH - gap_end)
    }
}
