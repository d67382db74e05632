//! Raster surface abstraction the stroke engine paints onto.

use crate::tools::InkColor;
use kurbo::{Circle, Line, Rect, Size, Stroke};
use peniko::{Color, Compose};

/// A rectangular raster target.
///
/// Each paint primitive frames its own path. Compositing is whatever was
/// last passed to [`Surface::set_composite`], so callers set it immediately
/// before painting.
pub trait Surface {
    /// Size in pixels.
    fn size(&self) -> Size;

    /// Set the compositing rule for subsequent paint calls.
    fn set_composite(&mut self, compose: Compose);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a disc.
    fn fill_disc(&mut self, disc: Circle, color: Color);

    /// Stroke a single line segment using the caps, join and width of `style`.
    fn stroke_segment(&mut self, segment: Line, style: &Stroke, color: Color);
}

/// A single recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCall {
    Rect {
        rect: Rect,
        color: InkColor,
        compose: Compose,
    },
    Disc {
        disc: Circle,
        color: InkColor,
        compose: Compose,
    },
    Segment {
        segment: Line,
        width: f64,
        round: bool,
        color: InkColor,
        compose: Compose,
    },
}

impl PaintCall {
    /// The compositing rule the call was painted with.
    pub fn compose(&self) -> Compose {
        match self {
            PaintCall::Rect { compose, .. }
            | PaintCall::Disc { compose, .. }
            | PaintCall::Segment { compose, .. } => *compose,
        }
    }
}

/// A surface that records paint calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct PaintLog {
    size: Size,
    compose: Compose,
    calls: Vec<PaintCall>,
}

impl PaintLog {
    /// Create an empty log for a surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            compose: Compose::SrcOver,
            calls: Vec::new(),
        }
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> &[PaintCall] {
        &self.calls
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for PaintLog {
    fn size(&self) -> Size {
        self.size
    }

    fn set_composite(&mut self, compose: Compose) {
        self.compose = compose;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(PaintCall::Rect {
            rect,
            color: color.into(),
            compose: self.compose,
        });
    }

    fn fill_disc(&mut self, disc: Circle, color: Color) {
        self.calls.push(PaintCall::Disc {
            disc,
            color: color.into(),
            compose: self.compose,
        });
    }

    fn stroke_segment(&mut self, segment: Line, style: &Stroke, color: Color) {
        let round = style.start_cap == kurbo::Cap::Round
            && style.end_cap == kurbo::Cap::Round
            && style.join == kurbo::Join::Round;
        self.calls.push(PaintCall::Segment {
            segment,
            width: style.width,
            round,
            color: color.into(),
            compose: self.compose,
        });
    }
}
