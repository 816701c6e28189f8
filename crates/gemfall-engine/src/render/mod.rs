//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue wgpu commands. Each owns
//! its GPU resources and builds them lazily on first use.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down)
//! - the vertex shader converts to NDC using a viewport uniform
//! - colors are linear premultiplied

mod ctx;
mod quad;
mod sprite;
mod text;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use sprite::SpriteRenderer;
pub use text::TextRenderer;
pub use texture::{TextureId, TextureImage};
