//! Rendering module
//!
//! Frames are built as [`RenderCommand`] lists and replayed onto any
//! [`RenderSurface`]; on web that is the page's 2D canvas.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use commands::{RenderCommand, replay};
pub use shapes::{compose_frame, liquid_path};
pub use surface::RenderSurface;
