//! The falling player box

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The player's box. `pos` is the centre of the box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, 0.0), // Top centre
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            moving_left: false,
            moving_right: false,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether a steering direction is held
    pub fn set_intent(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Left => self.moving_left = active,
            Direction::Right => self.moving_right = active,
        }
    }

    /// Advance one step: gravity, steering, integration, edge clamps.
    ///
    /// There is no top clamp. Leaving through the top ends the session.
    pub fn update(&mut self) {
        self.vel.y = (self.vel.y + GRAVITY).min(MAX_FALL_SPEED);

        // Holding both directions cancels out
        self.vel.x = 0.0;
        if self.moving_left {
            self.vel.x -= MOVE_SPEED;
        }
        if self.moving_right {
            self.vel.x += MOVE_SPEED;
        }

        self.pos += self.vel;

        let half = self.half_size();
        if self.pos.y + half.y > SCREEN_HEIGHT {
            self.pos.y = SCREEN_HEIGHT - half.y;
            self.vel.y = 0.0;
        }
        if self.pos.x + half.x > SCREEN_WIDTH {
            self.pos.x = SCREEN_WIDTH - half.x;
            self.vel.x = 0.0;
        }
        if self.pos.x < half.x {
            self.pos.x = half.x;
            self.vel.x = 0.0;
        }
    }

    /// Stop on a surface: the bottom edge snaps to `surface_y`
    pub fn land(&mut self, surface_y: f32) {
        self.vel.y = 0.0;
        self.pos.y = surface_y - self.half_size().y;
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Y of the lower edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_size().y
    }

    /// Horizontal extent used for gap tests, narrower than the drawn box
    #[inline]
    pub fn hitbox_x(&self) -> (f32, f32) {
        (self.pos.x - HITBOX_INSET, self.pos.x + HITBOX_INSET)
    }

    /// Top-left corner of the drawn box
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.pos - self.half_size()
    }
}
