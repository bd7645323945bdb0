//! Rendering surfaces
//!
//! The simulation is turned into a flat [`Scene`] each frame; a [`Surface`]
//! draws it. In the browser that is a tree of absolutely positioned `div`s,
//! natively it is the log.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod log_surface;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
pub use log_surface::LogSurface;
pub use scene::{Scene, Sprite, SpriteKind};

/// Draws a scene. Nothing is returned to the simulation.
pub trait Surface {
    fn present(&mut self, scene: &Scene);
}
