//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per call, units per step
//! - Gap offsets only from the session's `GapSource`
//! - Stable iteration order (barrier pool order)
//! - No rendering or platform dependencies

pub mod barrier;
pub mod collision;
pub mod gaps;
pub mod player;
pub mod state;
pub mod tick;

pub use barrier::Barrier;
pub use collision::{Contact, check_barrier, fits_gap, resolve_barriers};
pub use gaps::{GapSource, ScriptedGaps, SeededGaps};
pub use player::{Direction, Player};
pub use state::{GameEvent, GamePhase, Session};
pub use tick::{TickInput, tick};
