//! Scene (draw stream) types.
//!
//! Game code records renderer-agnostic commands into a [`DrawList`] each
//! frame; renderers pick out the commands they understand in paint order.

mod cmd;
mod layer;
mod list;

pub use cmd::{DrawCmd, SpriteCmd, TextCmd};
pub use layer::Layer;
pub use list::{DrawItem, DrawList};
