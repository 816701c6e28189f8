//! Color model shared between game code and renderers.
//!
//! Colors are linear, premultiplied RGBA. Geometry lives in `coords`.

mod color;

pub use color::Color;
