//! Inkpad Core Library
//!
//! Platform-agnostic input normalization, tool state and stroke engine for
//! the Inkpad freehand drawing surface.

pub mod config;
pub mod error;
pub mod input;
pub mod pad;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use config::PadConfig;
pub use error::{PadError, PadResult};
pub use input::{InputEvent, InputNormalizer, MouseKind, Normalized, RawInput, TouchKind};
pub use pad::DrawingPad;
pub use stroke::{GestureState, StrokeEngine};
pub use surface::{PaintCall, PaintLog, Surface};
pub use tools::{InkColor, Tool, ToolState};
