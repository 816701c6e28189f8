//! Input subsystem.
//!
//! The public API does not expose winit types; the runtime translates
//! platform events into [`InputEvent`]s.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub(crate) use state::InputState;
pub use types::{InputEvent, Key, KeyState, PointerMoveEvent};
