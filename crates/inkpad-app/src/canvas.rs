//! `Surface` over an HTML canvas 2D context.

use crate::style::{composite_operation, line_cap, line_join};
use inkpad_core::{InkColor, Surface};
use kurbo::{Circle, Line, Rect, Size, Stroke};
use peniko::{Color, Compose};
use std::f64::consts::TAU;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Paints onto a `<canvas>` element.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        Self { canvas, ctx }
    }
}

fn css(color: Color) -> String {
    InkColor::from(color).to_css()
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn set_composite(&mut self, compose: Compose) {
        if let Err(err) = self
            .ctx
            .set_global_composite_operation(composite_operation(compose))
        {
            log::warn!("Failed to set composite operation: {err:?}");
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_disc(&mut self, disc: Circle, color: Color) {
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(disc.center.x, disc.center.y, disc.radius, 0.0, TAU)
        {
            log::warn!("Failed to trace disc: {err:?}");
            return;
        }
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.fill();
    }

    fn stroke_segment(&mut self, segment: Line, style: &Stroke, color: Color) {
        self.ctx.begin_path();
        self.ctx.move_to(segment.p0.x, segment.p0.y);
        self.ctx.line_to(segment.p1.x, segment.p1.y);
        self.ctx.set_line_width(style.width);
        self.ctx.set_line_cap(line_cap(style.start_cap));
        self.ctx.set_line_join(line_join(style.join));
        self.ctx.set_stroke_style_str(&css(color));
        self.ctx.stroke();
    }
}
