//! Draw-list projection
//!
//! `render` reads a session and returns the commands a host needs to paint the
//! frame. It never mutates the session, so tests can skip it entirely.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GapSource, Session};

/// Horizontal anchoring of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    /// `x` is the left edge
    Left,
    /// `x` is the centre
    Center,
}

/// One primitive for the host renderer (y grows downward, text is vertically centred)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        align: Align,
        color: [f32; 4],
    },
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BARRIER: [f32; 4] = [0.541, 0.169, 0.886, 1.0]; // Blue violet
    pub const PLAYER: [f32; 4] = [0.373, 0.620, 0.627, 1.0]; // Cadet blue
    pub const SCORE: [f32; 4] = [1.0, 0.980, 0.941, 1.0]; // Floral white
    pub const GAME_OVER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const PROMPT: [f32; 4] = [0.0, 1.0, 1.0, 1.0]; // Aqua
}

pub const SCORE_LABEL_POS: (f32, f32) = (4.0, 16.0);
pub const SCORE_FONT_SIZE: f32 = 24.0;
pub const GAME_OVER_FONT_SIZE: f32 = 72.0;
pub const PROMPT_FONT_SIZE: f32 = 24.0;
pub const RESTART_PROMPT: &str = "Press 'Enter' to start a new game";

fn fill_rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> DrawCommand {
    DrawCommand::FillRect { x, y, w, h, color }
}

fn text(text: impl Into<String>, x: f32, y: f32, size: f32, align: Align, color: [f32; 4]) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        x,
        y,
        size,
        align,
        color,
    }
}

/// Project the session into back-to-front draw commands
pub fn render<G: GapSource>(session: &Session<G>) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(4 + session.barriers.len() * 2);

    commands.push(fill_rect(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, colors::BACKGROUND));

    for barrier in &session.barriers {
        let (left_x, left_w) = barrier.left_segment();
        let (right_x, right_w) = barrier.right_segment();
        commands.push(fill_rect(left_x, barrier.y, left_w, BAR_THICKNESS, colors::BARRIER));
        commands.push(fill_rect(right_x, barrier.y, right_w, BAR_THICKNESS, colors::BARRIER));
    }

    let player = &session.player;
    let corner = player.top_left();
    commands.push(fill_rect(
        corner.x,
        corner.y,
        player.size.x,
        player.size.y,
        colors::PLAYER,
    ));

    commands.push(text(
        format!("Score: {}", session.score),
        SCORE_LABEL_POS.0,
        SCORE_LABEL_POS.1,
        SCORE_FONT_SIZE,
        Align::Left,
        colors::SCORE,
    ));

    if !session.is_running() {
        commands.push(text(
            "Game Over",
            SCREEN_WIDTH / 2.0,
            SCREEN_HEIGHT / 2.0,
            GAME_OVER_FONT_SIZE,
            Align::Center,
            colors::GAME_OVER,
        ));
        commands.push(text(
            RESTART_PROMPT,
            SCREEN_WIDTH / 2.0,
            SCREEN_HEIGHT * 0.65,
            PROMPT_FONT_SIZE,
            Align::Center,
            colors::PROMPT,
        ));
    }

    commands
}
