//! Session state
//!
//! Everything the simulation touches lives in `Session`; there is no ambient
//! state, so two sessions with the same gap source evolve identically.

use serde::{Deserialize, Serialize};

use super::barrier::Barrier;
use super::gaps::{GapSource, SeededGaps};
use super::player::Player;
use crate::consts::*;

/// Session liveness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics, collisions and scoring advance every step
    Running,
    /// Frozen until a restart input
    GameOver,
}

/// Things that happened during the last step, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Passed { barrier: usize, bonus: u64 },
    Landed { barrier: usize, surface_y: f32 },
    Recycled { barrier: usize, gap_offset: u32 },
    GameOver { score: u64, frame: u64 },
    Restarted,
}

/// A single play session: the player, the barrier pool and the score
#[derive(Debug, Clone)]
pub struct Session<G: GapSource = SeededGaps> {
    pub player: Player,
    pub barriers: [Barrier; MAX_BARRIERS],
    pub score: u64,
    /// Highest final score since this session object was created
    pub best_score: u64,
    pub phase: GamePhase,
    /// Steps simulated since the last reset
    pub frame: u64,
    /// Events from the most recent step
    pub events: Vec<GameEvent>,
    gaps: G,
}

impl Session<SeededGaps> {
    /// New session with seeded gap generation
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeededGaps::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.gaps.seed()
    }
}

impl<G: GapSource> Session<G> {
    /// Create a session and start the first round
    pub fn new(gaps: G) -> Self {
        // Placeholder pool, replaced by `reset` before anything reads it
        let mut session = Self {
            player: Player::new(),
            barriers: std::array::from_fn(|_| Barrier::new(BARRIER_RESET_Y, 0)),
            score: 0,
            best_score: 0,
            phase: GamePhase::Running,
            frame: 0,
            events: Vec::new(),
            gaps,
        };
        session.reset();
        session
    }

    fn spawn_barriers(gaps: &mut G) -> [Barrier; MAX_BARRIERS] {
        std::array::from_fn(|slot| Barrier::spawn(slot, &mut *gaps))
    }

    /// Start a new round: fresh player and barrier pool, score zeroed
    pub fn reset(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.player = Player::new();
        self.barriers = Self::spawn_barriers(&mut self.gaps);
        self.score = 0;
        self.phase = GamePhase::Running;
        self.frame = 0;
        self.events.clear();
        log::info!("Session reset (best score {})", self.best_score);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Split borrow used by the tick so barriers can draw fresh gaps
    pub(crate) fn barriers_and_gaps(&mut self) -> (&mut [Barrier; MAX_BARRIERS], &mut G) {
        (&mut self.barriers, &mut self.gaps)
    }

    pub fn gaps(&self) -> &G {
        &self.gaps
    }

    /// Debug-build check of the invariants every step must preserve
    pub fn validate(&self) {
        let half = self.player.half_size();
        debug_assert!(
            self.player.vel.y.abs() <= MAX_FALL_SPEED,
            "fall speed {} exceeds cap",
            self.player.vel.y
        );
        debug_assert!(
            self.player.pos.x >= half.x && self.player.pos.x <= SCREEN_WIDTH - half.x,
            "player x {} out of bounds",
            self.player.pos.x
        );
        debug_assert!(
            self.player.pos.y <= SCREEN_HEIGHT - half.y,
            "player y {} below floor",
            self.player.pos.y
        );
        for barrier in &self.barriers {
            debug_assert!(
                barrier.gap_offset < MAX_GAP_OFFSET,
                "gap offset {} out of range",
                barrier.gap_offset
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::gaps::ScriptedGaps;
    use glam::Vec2;

    #[test]
    fn test_new_session_initial_state() {
        let session = Session::with_seed(12345);
        assert_eq!(session.phase, GamePhase::Running);
        assert!(session.is_running());
        assert_eq!(session.score, 0);
        assert_eq!(session.frame, 0);
        assert_eq!(session.player.pos, Vec2::new(320.0, 0.0));
        assert_eq!(session.player.vel, Vec2::ZERO);

        let ys: Vec<f32> = session.barriers.iter().map(|b| b.y).collect();
        assert_eq!(ys, vec![520.0, 650.0, 780.0, 910.0, 1040.0]);
        for barrier in &session.barriers {
            assert!(barrier.gap_offset < MAX_GAP_OFFSET);
            assert!(!barrier.scored);
        }
        session.validate();
    }

    #[test]
    fn test_reset_draws_fresh_gaps() {
        let mut session = Session::new(ScriptedGaps::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        let first: Vec<u32> = session.barriers.iter().map(|b| b.gap_offset).collect();
        assert_eq!(first, vec![1, 2, 3, 4, 5]);

        session.reset();
        let second: Vec<u32> = session.barriers.iter().map(|b| b.gap_offset).collect();
        assert_eq!(second, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_new_matches_reset_session() {
        let fresh = Session::new(ScriptedGaps::new(vec![10, 20, 30, 40, 50]));

        let mut reused = Session::new(ScriptedGaps::new(vec![10, 20, 30, 40, 50]));
        for _ in 0..40 {
            reused.step(&Default::default());
        }
        reused.reset();

        assert_eq!(fresh.player, reused.player);
        assert_eq!(fresh.barriers, reused.barriers);
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.best_score, 0);
        assert_eq!(fresh.frame, reused.frame);
        assert_eq!(fresh.phase, reused.phase);
        assert!(fresh.events.is_empty());
    }

    #[test]
    fn test_reset_restores_running_and_tracks_best() {
        let mut session = Session::with_seed(1);
        session.score = 500;
        session.phase = GamePhase::GameOver;
        session.player.pos = Vec2::new(40.0, -20.0);
        session.frame = 77;

        session.reset();

        assert!(session.is_running());
        assert_eq!(session.score, 0);
        assert_eq!(session.best_score, 500);
        assert_eq!(session.frame, 0);
        assert_eq!(session.player, Player::new());
    }

    #[test]
    fn test_same_seed_same_pool() {
        let a = Session::with_seed(99);
        let b = Session::with_seed(99);
        assert_eq!(a.barriers, b.barriers);
        assert_eq!(a.seed(), 99);
    }
}
