//! Palette and eraser controls.
//!
//! Deciding which control is highlighted is plain logic; applying the
//! classes to DOM elements happens in the web shell.

use inkpad_core::{InkColor, PadConfig, PadResult, Tool};

/// Class marking the highlighted control.
pub const ACTIVE_CLASS: &str = "active";
/// Class put on the canvas while erasing (eraser cursor).
pub const ERASER_MODE_CLASS: &str = "eraser-mode";
/// Selector for palette swatches.
pub const SWATCH_SELECTOR: &str = ".color-option";
/// Attribute holding a swatch's CSS color.
pub const SWATCH_COLOR_ATTR: &str = "data-color";
/// Id of the eraser button.
pub const ERASER_ID: &str = "eraser";
/// Id of the drawing canvas.
pub const CANVAS_ID: &str = "drawingCanvas";
/// Canvas attribute holding an optional JSON [`PadConfig`].
pub const CONFIG_ATTR: &str = "data-config";

/// The control that should be highlighted for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveControl {
    Swatch(usize),
    Eraser,
    /// A color with no matching swatch.
    None,
}

/// The selectable ink colors, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    swatches: Vec<InkColor>,
}

impl Palette {
    pub fn new(swatches: Vec<InkColor>) -> Self {
        Self { swatches }
    }

    pub fn from_config(config: &PadConfig) -> PadResult<Self> {
        Ok(Self::new(config.palette_colors()?))
    }

    pub fn swatches(&self) -> &[InkColor] {
        &self.swatches
    }

    pub fn color(&self, index: usize) -> Option<InkColor> {
        self.swatches.get(index).copied()
    }

    /// Which control to highlight. Duplicate colors resolve to the first swatch.
    pub fn active_control(&self, tool: &Tool) -> ActiveControl {
        match tool {
            Tool::Eraser => ActiveControl::Eraser,
            Tool::Solid(color) => self
                .swatches
                .iter()
                .position(|swatch| swatch == color)
                .map_or(ActiveControl::None, ActiveControl::Swatch),
        }
    }
}
