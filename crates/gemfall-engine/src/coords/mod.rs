//! Geometry types shared by the renderers and game code.
//!
//! Screen space used by the renderers:
//! - logical pixels (DPI-aware)
//! - origin top-left, +X right, +Y down
//!
//! `Rect` itself is orientation-agnostic (min corner + size), so game code
//! may use it in a y-up world space as well.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
