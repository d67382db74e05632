//! In-memory raster surface backed by `tiny-skia`.

use crate::renderer::{RenderResult, RendererError, blend_mode};
use inkpad_core::Surface;
use kurbo::{Cap, Circle, Join, Line, Rect, Size, Stroke};
use peniko::{Color, Compose};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};

/// A premultiplied RGBA8 pixmap that can be painted by the stroke engine.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    compose: Compose,
}

impl PixmapSurface {
    /// Allocate a fully transparent surface.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RendererError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            compose: Compose::SrcOver,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Premultiplied RGBA of a pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // tiny-skia only bounds-checks the flattened index.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let rgba = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
        paint.anti_alias = true;
        paint.blend_mode = blend_mode(self.compose);
        paint
    }
}

fn line_cap(cap: Cap) -> LineCap {
    match cap {
        Cap::Butt => LineCap::Butt,
        Cap::Square => LineCap::Square,
        Cap::Round => LineCap::Round,
    }
}

fn line_join(join: Join) -> LineJoin {
    match join {
        Join::Bevel => LineJoin::Bevel,
        Join::Miter => LineJoin::Miter,
        Join::Round => LineJoin::Round,
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    fn set_composite(&mut self, compose: Compose) {
        self.compose = compose;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = tiny_skia::Rect::from_ltrb(
            rect.x0 as f32,
            rect.y0 as f32,
            rect.x1 as f32,
            rect.y1 as f32,
        ) else {
            log::trace!("Skipping degenerate rect {rect:?}");
            return;
        };
        let paint = self.paint(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn fill_disc(&mut self, disc: Circle, color: Color) {
        let Some(path) = PathBuilder::from_circle(
            disc.center.x as f32,
            disc.center.y as f32,
            disc.radius as f32,
        ) else {
            log::trace!("Skipping degenerate disc {disc:?}");
            return;
        };
        let paint = self.paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_segment(&mut self, segment: Line, style: &Stroke, color: Color) {
        let mut builder = PathBuilder::new();
        builder.move_to(segment.p0.x as f32, segment.p0.y as f32);
        builder.line_to(segment.p1.x as f32, segment.p1.y as f32);
        let Some(path) = builder.finish() else {
            log::trace!("Skipping degenerate segment {segment:?}");
            return;
        };

        let stroke = tiny_skia::Stroke {
            width: style.width as f32,
            line_cap: line_cap(style.start_cap),
            line_join: line_join(style.join),
            ..tiny_skia::Stroke::default()
        };
        let paint = self.paint(color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}
