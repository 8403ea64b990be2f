//! Fall Down - a falling-box arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, barriers, collisions, session state)
//! - `render`: Pure projection of a session into draw commands
//! - `driver`: Fixed-timestep host driver
//! - `autopilot`: Scripted input producer for headless runs
//! - `runner`: Headless runs with run summaries and input tapes
//! - `settings`: Runner configuration

pub mod autopilot;
pub mod driver;
pub mod render;
pub mod runner;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use driver::FrameDriver;
pub use render::{Align, DrawCommand, render};
pub use settings::Settings;
pub use sim::{GamePhase, Session, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the game was tuned at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Downward acceleration, units/step²
    pub const GRAVITY: f32 = 0.7;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const MAX_FALL_SPEED: f32 = 8.0;
    pub const MOVE_SPEED: f32 = 6.0;
    /// Hitbox inset on each side: a quarter of the width, truncated to whole units
    pub const HITBOX_INSET: f32 = 7.0;

    /// Barriers spawn this far below the bottom edge
    pub const PLATFORM_START: f32 = 40.0;
    /// Vertical spacing between barrier slots
    pub const PLATFORM_STAGGER: f32 = 130.0;
    pub const GAP_WIDTH: u32 = 150;
    pub const MAX_BARRIERS: usize = 5;
    /// Upward scroll of every barrier, units/step
    pub const RISING_SPEED: f32 = 5.0;
    /// Drawn thickness of a barrier bar
    pub const BAR_THICKNESS: f32 = 10.0;

    /// Exclusive upper bound for a barrier's gap offset
    pub const MAX_GAP_OFFSET: u32 = SCREEN_WIDTH as u32 - GAP_WIDTH;
    /// Where recycled barriers reappear
    pub const BARRIER_RESET_Y: f32 = SCREEN_HEIGHT + PLATFORM_START;
    /// Barriers above this line are recycled
    pub const RECYCLE_THRESHOLD: f32 =
        BARRIER_RESET_Y - PLATFORM_STAGGER * MAX_BARRIERS as f32;

    /// Score
    pub const PASS_BONUS: u64 = 123;
    pub const FRAME_SCORE: u64 = 1;
}
