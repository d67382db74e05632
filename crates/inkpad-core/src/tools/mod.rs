//! Tool selection for the drawing pad.

use crate::error::{PadError, PadResult};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ink color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl InkColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Parse a CSS color string (`#ff0000`, `red`, `rgb(...)`).
    pub fn parse(value: &str) -> PadResult<Self> {
        let parsed = csscolorparser::parse(value.trim())
            .map_err(|err| PadError::InvalidColor(format!("{value}: {err}")))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::new(r, g, b, a))
    }

    /// CSS `rgba()` notation, as accepted by canvas style setters.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            f64::from(self.a) / 255.0
        )
    }
}

impl Default for InkColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for InkColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<InkColor> for Color {
    fn from(color: InkColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// What painting currently does.
///
/// The eraser carries no color and solid mode always has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Paint with a solid color over existing pixels.
    Solid(InkColor),
    /// Remove existing pixels.
    Eraser,
}

impl Tool {
    /// Returns true for the eraser.
    pub fn is_eraser(&self) -> bool {
        matches!(self, Tool::Eraser)
    }

    /// The ink color, if painting in solid mode.
    pub fn color(&self) -> Option<InkColor> {
        match self {
            Tool::Solid(color) => Some(*color),
            Tool::Eraser => None,
        }
    }
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Solid(InkColor::black())
    }
}

/// Callback invoked after every selection change.
pub type SelectionListener = Box<dyn FnMut(&Tool)>;

/// Single source of truth for the active tool.
pub struct ToolState {
    current: Tool,
    listeners: Vec<SelectionListener>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolState")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ToolState {
    /// Create a tool state with solid black selected.
    pub fn new() -> Self {
        Self::with_color(InkColor::black())
    }

    /// Create a tool state with the given ink color selected.
    pub fn with_color(color: InkColor) -> Self {
        Self {
            current: Tool::Solid(color),
            listeners: Vec::new(),
        }
    }

    /// The currently selected tool.
    pub fn tool(&self) -> Tool {
        self.current
    }

    /// Switch to solid painting with `color`.
    pub fn select_color(&mut self, color: InkColor) {
        log::debug!("Selected color {}", color.to_css());
        self.set(Tool::Solid(color));
    }

    /// Switch to the eraser.
    pub fn select_eraser(&mut self) {
        log::debug!("Selected eraser");
        self.set(Tool::Eraser);
    }

    /// Register a listener notified after each selection.
    pub fn subscribe(&mut self, listener: impl FnMut(&Tool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn set(&mut self, tool: Tool) {
        self.current = tool;
        for listener in &mut self.listeners {
            listener(&tool);
        }
    }
}
