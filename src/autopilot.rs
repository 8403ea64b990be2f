//! Simple steering bot for headless runs
//!
//! Looks at the closest barrier the player has not cleared yet and steers
//! toward the middle of its gap. Deterministic: the same session always yields
//! the same input.

use serde::{Deserialize, Serialize};

use crate::consts::{GAP_WIDTH, MOVE_SPEED};
use crate::sim::{Barrier, GapSource, Session, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Autopilot {
    /// Press restart as soon as the game ends
    pub auto_restart: bool,
    /// No steering when this close to the target x
    pub deadzone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            auto_restart: false,
            deadzone: MOVE_SPEED / 2.0,
        }
    }
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self {
            auto_restart,
            ..Self::default()
        }
    }

    /// The barrier to aim for: unscored, at or below the player's lower edge, nearest first
    pub fn target<'a, G: GapSource>(&self, session: &'a Session<G>) -> Option<&'a Barrier> {
        let bottom = session.player.bottom();
        session
            .barriers
            .iter()
            .filter(|b| !b.scored && b.y >= bottom)
            .min_by(|a, b| a.y.total_cmp(&b.y))
    }

    pub fn next_input<G: GapSource>(&self, session: &Session<G>) -> TickInput {
        if !session.is_running() {
            return TickInput {
                restart: self.auto_restart,
                ..Default::default()
            };
        }

        let Some(barrier) = self.target(session) else {
            return TickInput::default();
        };

        let target_x = barrier.gap_offset as f32 + GAP_WIDTH as f32 / 2.0;
        let dx = target_x - session.player.pos.x;
        TickInput {
            move_left: dx < -self.deadzone,
            move_right: dx > self.deadzone,
            restart: false,
        }
    }
}
