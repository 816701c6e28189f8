//! Contracts between the runtime loop and game code.
//!
//! The runtime calls [`App`] with a [`FrameCtx`] once per rendered frame;
//! games never see the event loop directly.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
