//! Platform abstraction layer
//!
//! Input sources that turn browser events (or a bot) into [`TickInput`]s.

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::KeyboardState;

use crate::sim::{GameState, TickInput};

/// Something that can say which keys are held this frame
pub trait InputSource {
    /// Produce the input for the next tick. Called once per frame.
    fn sample(&mut self, state: &GameState) -> TickInput;
}
