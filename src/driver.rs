//! Fixed-timestep host driver
//!
//! Hosts call `advance` once per display frame with the real elapsed time.
//! The session only ever sees whole `SIM_DT` steps, so a 144 Hz display and a
//! 30 Hz display produce the same run.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::render::{DrawCommand, render};
use crate::sim::{GapSource, SeededGaps, Session, TickInput};

/// Owns a session plus the input and time bookkeeping between display frames
#[derive(Debug, Clone)]
pub struct FrameDriver<G: GapSource = SeededGaps> {
    session: Session<G>,
    input: TickInput,
    accumulator: f32,
}

impl FrameDriver<SeededGaps> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Session::with_seed(seed))
    }
}

impl<G: GapSource> FrameDriver<G> {
    pub fn new(session: Session<G>) -> Self {
        Self {
            session,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Latest input snapshot from the host.
    ///
    /// `restart` is latched until a step consumes it, so a press shorter than
    /// one step is not lost.
    pub fn set_input(&mut self, input: TickInput) {
        let restart = self.input.restart || input.restart;
        self.input = TickInput { restart, ..input };
    }

    /// Run as many fixed steps as `dt` seconds cover. Returns the steps run.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.session.step(&self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.restart = false;
        }

        substeps
    }

    pub fn session(&self) -> &Session<G> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<G> {
        &mut self.session
    }

    /// Draw list for the current state
    pub fn render(&self) -> Vec<DrawCommand> {
        render(&self.session)
    }

    /// Leftover time not yet simulated, as a fraction of a step
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }
}
