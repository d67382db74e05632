//! Inkpad Render Library
//!
//! Raster surface implementations for the Inkpad stroke engine.
//! The default implementation rasterizes on the CPU with tiny-skia.

mod pixmap;
mod renderer;

pub use pixmap::PixmapSurface;
pub use renderer::{RenderResult, RendererError, blend_mode};
