//! Window + runtime loop.
//!
//! Owns the winit event loop and the game window, and wires them to the GPU
//! layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::dpi::LogicalSize;
