//! Gemfall engine crate.
//!
//! Owns the platform, GPU and audio pieces the sprite games are built on.
//! Game code talks to it through [`core::App`] and the per-frame
//! [`core::FrameCtx`]; winit and wgpu types stay behind those seams.

pub mod audio;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
pub mod window;
