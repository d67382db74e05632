//! Inkpad Application
//!
//! The browser shell: a canvas-backed surface, DOM event wiring and the
//! palette/eraser controls around the core drawing pad.

mod style;
mod ui;

pub use style::{composite_operation, line_cap, line_join};
pub use ui::{
    ACTIVE_CLASS, ActiveControl, CANVAS_ID, CONFIG_ATTR, ERASER_ID, ERASER_MODE_CLASS, Palette,
    SWATCH_COLOR_ATTR, SWATCH_SELECTOR,
};

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
