//! Renderer errors and shared helpers.

use peniko::Compose;
use thiserror::Error;
use tiny_skia::BlendMode;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Map a compositing rule onto the rasterizer's blend mode.
pub fn blend_mode(compose: Compose) -> BlendMode {
    match compose {
        Compose::Clear => BlendMode::Clear,
        Compose::Copy => BlendMode::Source,
        Compose::Dest => BlendMode::Destination,
        Compose::SrcOver => BlendMode::SourceOver,
        Compose::DestOver => BlendMode::DestinationOver,
        Compose::SrcIn => BlendMode::SourceIn,
        Compose::DestIn => BlendMode::DestinationIn,
        Compose::SrcOut => BlendMode::SourceOut,
        Compose::DestOut => BlendMode::DestinationOut,
        Compose::SrcAtop => BlendMode::SourceAtop,
        Compose::DestAtop => BlendMode::DestinationAtop,
        Compose::Xor => BlendMode::Xor,
        Compose::Plus => BlendMode::Plus,
        other => {
            log::warn!("Unsupported compose mode {other:?}, using source-over");
            BlendMode::SourceOver
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_modes_map() {
        assert_eq!(blend_mode(Compose::SrcOver), BlendMode::SourceOver);
        assert_eq!(blend_mode(Compose::DestOut), BlendMode::DestinationOut);
    }
}
