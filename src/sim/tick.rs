//! Per-frame simulation step
//!
//! Order within a running frame: player, barriers, score, collisions, loss check.

use serde::{Deserialize, Serialize};

use super::collision::resolve_barriers;
use super::gaps::GapSource;
use super::player::Direction;
use super::state::{GameEvent, GamePhase, Session};
use crate::consts::FRAME_SCORE;

/// Input snapshot for a single step (sampled once per frame)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Steer left (held)
    #[serde(default)]
    pub move_left: bool,
    /// Steer right (held)
    #[serde(default)]
    pub move_right: bool,
    /// Start a new round; only honoured after game over
    #[serde(default)]
    pub restart: bool,
}

/// Advance the session by one step
pub fn tick<G: GapSource>(session: &mut Session<G>, input: &TickInput) {
    session.events.clear();

    if session.phase == GamePhase::GameOver {
        if input.restart {
            session.reset();
            session.events.push(GameEvent::Restarted);
        }
        return;
    }

    session.player.set_intent(Direction::Left, input.move_left);
    session.player.set_intent(Direction::Right, input.move_right);
    session.player.update();

    let (barriers, gaps) = session.barriers_and_gaps();
    let mut recycled = Vec::new();
    for (index, barrier) in barriers.iter_mut().enumerate() {
        if barrier.update(&mut *gaps) {
            log::debug!("Recycled barrier {} (new gap at {})", index, barrier.gap_offset);
            recycled.push(GameEvent::Recycled {
                barrier: index,
                gap_offset: barrier.gap_offset,
            });
        }
    }
    session.events.extend(recycled);

    session.frame += 1;
    session.score += FRAME_SCORE;

    let bonus = resolve_barriers(
        &mut session.player,
        &mut session.barriers,
        &mut session.events,
    );
    session.score += bonus;

    // Carried off the top by a barrier
    if session.player.bottom() < 0.0 {
        session.phase = GamePhase::GameOver;
        log::info!(
            "Game over at frame {} with score {}",
            session.frame,
            session.score
        );
        session.events.push(GameEvent::GameOver {
            score: session.score,
            frame: session.frame,
        });
    }

    session.validate();
}

impl<G: GapSource> Session<G> {
    /// Advance one step with the given input
    pub fn step(&mut self, input: &TickInput) {
        tick(self, input);
    }
}
