//! Pad configuration.

use crate::error::{PadError, PadResult};
use crate::tools::InkColor;
use serde::{Deserialize, Serialize};

/// Default palette, matching the swatches shipped with the page.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#000000", "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff", "#ffa500",
];

/// Startup configuration for a drawing pad.
///
/// Colors are CSS strings so the same config can come from JSON or from the
/// page's `data-color` attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Opaque background painted at startup.
    pub background: String,
    /// Ink selected before the user picks a color.
    pub default_color: String,
    /// Selectable ink colors.
    pub palette: Vec<String>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "#ffffff".to_string(),
            default_color: "#000000".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl PadConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> PadResult<Self> {
        let config: PadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check sizes and every color.
    pub fn validate(&self) -> PadResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PadError::InvalidConfig(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let background = self.background_color()?;
        if background.a != 255 {
            return Err(PadError::InvalidConfig(format!(
                "background must be opaque, got {}",
                self.background
            )));
        }
        self.default_ink()?;
        self.palette_colors()?;
        Ok(())
    }

    pub fn background_color(&self) -> PadResult<InkColor> {
        InkColor::parse(&self.background)
    }

    pub fn default_ink(&self) -> PadResult<InkColor> {
        InkColor::parse(&self.default_color)
    }

    /// Parsed palette, in order.
    pub fn palette_colors(&self) -> PadResult<Vec<InkColor>> {
        self.palette.iter().map(|c| InkColor::parse(c)).collect()
    }
}
