//! Incremental stroke painting.
//!
//! The engine turns a gesture (`Start`, zero or more `Move`, `End`) into
//! raster mutations on the surface it owns. Each `Move` paints exactly one
//! segment from the previous anchor, so fast gestures stay connected even
//! though samples arrive at a finite rate.

use crate::input::InputEvent;
use crate::surface::Surface;
use crate::tools::{InkColor, Tool, ToolState};
use kurbo::{Cap, Circle, Join, Line, Point, Stroke};
use peniko::{Color, Compose};

/// Radius of the dot painted when a solid stroke starts.
pub const SOLID_DOT_RADIUS: f64 = 2.5;
/// Radius of the dot erased when an eraser stroke starts.
pub const ERASER_DOT_RADIUS: f64 = 10.0;
/// Width of solid stroke segments.
pub const SOLID_LINE_WIDTH: f64 = 5.0;
/// Width of eraser stroke segments.
pub const ERASER_LINE_WIDTH: f64 = 20.0;

/// Per-gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing {
        /// Last painted point.
        anchor: Point,
    },
}

/// How a single paint call is performed for a tool.
#[derive(Debug, Clone, Copy)]
struct Brush {
    compose: Compose,
    color: Color,
    dot_radius: f64,
    line_width: f64,
}

impl Brush {
    fn for_tool(tool: Tool) -> Self {
        match tool {
            Tool::Solid(color) => Brush {
                compose: Compose::SrcOver,
                color: color.into(),
                dot_radius: SOLID_DOT_RADIUS,
                line_width: SOLID_LINE_WIDTH,
            },
            // Destination-out only reads source alpha, so any opaque ink
            // removes the full coverage.
            Tool::Eraser => Brush {
                compose: Compose::DestOut,
                color: InkColor::black().into(),
                dot_radius: ERASER_DOT_RADIUS,
                line_width: ERASER_LINE_WIDTH,
            },
        }
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.line_width)
            .with_caps(Cap::Round)
            .with_join(Join::Round)
    }
}

/// Owns the surface and paints gestures onto it.
#[derive(Debug)]
pub struct StrokeEngine<S> {
    surface: S,
    gesture: GestureState,
}

impl<S: Surface> StrokeEngine<S> {
    /// Create an idle engine painting onto `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            gesture: GestureState::Idle,
        }
    }

    /// Current gesture state.
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, GestureState::Drawing { .. })
    }

    /// Read-only access to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the surface back, dropping gesture state.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Fill the whole surface with an opaque background.
    pub fn fill_background(&mut self, color: InkColor) {
        let rect = self.surface.size().to_rect();
        self.surface.set_composite(Compose::SrcOver);
        self.surface.fill_rect(rect, color.into());
    }

    /// Apply one normalized event using the tool selected right now.
    pub fn handle(&mut self, event: InputEvent, tools: &ToolState) {
        match event {
            InputEvent::Start(point) => self.begin(point, tools.tool()),
            InputEvent::Move(point) => self.extend(point, tools.tool()),
            InputEvent::End => self.end(),
        }
    }

    /// Start a gesture at `point` and paint its initial dot.
    pub fn begin(&mut self, point: Point, tool: Tool) {
        log::debug!("Stroke started at ({}, {}) with {:?}", point.x, point.y, tool);
        self.gesture = GestureState::Drawing { anchor: point };

        let brush = Brush::for_tool(tool);
        self.surface.set_composite(brush.compose);
        self.surface
            .fill_disc(Circle::new(point, brush.dot_radius), brush.color);
    }

    /// Connect the anchor to `point`. Does nothing while idle.
    pub fn extend(&mut self, point: Point, tool: Tool) {
        let GestureState::Drawing { anchor } = self.gesture else {
            return;
        };

        let brush = Brush::for_tool(tool);
        self.surface.set_composite(brush.compose);
        self.surface
            .stroke_segment(Line::new(anchor, point), &brush.stroke(), brush.color);

        self.gesture = GestureState::Drawing { anchor: point };
    }

    /// Finish the current gesture, if any.
    pub fn end(&mut self) {
        if self.is_drawing() {
            log::debug!("Stroke ended");
        }
        self.gesture = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintCall, PaintLog};
    use kurbo::Size;

    fn engine() -> StrokeEngine<PaintLog> {
        StrokeEngine::new(PaintLog::new(Size::new(100.0, 100.0)))
    }

    #[test]
    fn test_start_paints_solid_dot() {
        let mut engine = engine();
        let tools = ToolState::new();

        engine.handle(InputEvent::Start(Point::new(10.0, 10.0)), &tools);

        assert_eq!(
            engine.surface().calls(),
            &[PaintCall::Disc {
                disc: Circle::new(Point::new(10.0, 10.0), 2.5),
                color: InkColor::black(),
                compose: Compose::SrcOver,
            }]
        );
        assert_eq!(
            engine.gesture(),
            GestureState::Drawing {
                anchor: Point::new(10.0, 10.0)
            }
        );
    }

    #[test]
    fn test_start_with_eraser_erases_larger_dot() {
        let mut engine = engine();
        let mut tools = ToolState::new();
        tools.select_eraser();

        engine.handle(InputEvent::Start(Point::new(40.0, 30.0)), &tools);

        let calls = engine.surface().calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            PaintCall::Disc { disc, compose, .. } => {
                assert_eq!(disc.center, Point::new(40.0, 30.0));
                assert_eq!(disc.radius, ERASER_DOT_RADIUS);
                assert_eq!(*compose, Compose::DestOut);
            }
            other => panic!("expected disc, got {other:?}"),
        }
    }

    #[test]
    fn test_move_paints_segment_from_anchor() {
        let mut engine = engine();
        let tools = ToolState::new();

        engine.handle(InputEvent::Start(Point::new(10.0, 10.0)), &tools);
        engine.handle(InputEvent::Move(Point::new(20.0, 10.0)), &tools);

        assert_eq!(
            engine.surface().calls()[1],
            PaintCall::Segment {
                segment: Line::new((10.0, 10.0), (20.0, 10.0)),
                width: 5.0,
                round: true,
                color: InkColor::black(),
                compose: Compose::SrcOver,
            }
        );
        assert_eq!(
            engine.gesture(),
            GestureState::Drawing {
                anchor: Point::new(20.0, 10.0)
            }
        );
    }

    #[test]
    fn test_moves_form_connected_path() {
        let mut engine = engine();
        let tools = ToolState::new();
        let points = [
            Point::new(1.0, 1.0),
            Point::new(5.0, 3.0),
            Point::new(9.0, 8.0),
            Point::new(12.5, 20.0),
        ];

        engine.handle(InputEvent::Start(Point::new(0.0, 0.0)), &tools);
        for p in points {
            engine.handle(InputEvent::Move(p), &tools);
        }

        let segments: Vec<Line> = engine
            .surface()
            .calls()
            .iter()
            .filter_map(|call| match call {
                PaintCall::Segment { segment, .. } => Some(*segment),
                _ => None,
            })
            .collect();
        assert_eq!(segments.len(), points.len());
        assert_eq!(segments[0].p0, Point::new(0.0, 0.0));
        for pair in segments.windows(2) {
            assert_eq!(pair[0].p1, pair[1].p0);
        }
        assert_eq!(segments.last().map(|s| s.p1), points.last().copied());
    }

    #[test]
    fn test_each_segment_uses_current_tool() {
        let mut engine = engine();
        let red = InkColor::rgb(255, 0, 0);
        let mut tools = ToolState::with_color(red);

        engine.handle(InputEvent::Start(Point::new(0.0, 0.0)), &tools);
        engine.handle(InputEvent::Move(Point::new(10.0, 0.0)), &tools);
        tools.select_eraser();
        engine.handle(InputEvent::Move(Point::new(20.0, 0.0)), &tools);

        let calls = engine.surface().calls();
        assert!(matches!(
            calls[1],
            PaintCall::Segment { width, color, compose: Compose::SrcOver, .. }
                if width == SOLID_LINE_WIDTH && color == red
        ));
        assert!(matches!(
            calls[2],
            PaintCall::Segment { width, compose: Compose::DestOut, .. }
                if width == ERASER_LINE_WIDTH
        ));
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let mut engine = engine();
        let tools = ToolState::new();

        engine.handle(InputEvent::Move(Point::new(5.0, 5.0)), &tools);
        assert!(engine.surface().calls().is_empty());

        engine.handle(InputEvent::Start(Point::new(0.0, 0.0)), &tools);
        engine.handle(InputEvent::End, &tools);
        engine.handle(InputEvent::Move(Point::new(5.0, 5.0)), &tools);
        assert_eq!(engine.surface().calls().len(), 1);
    }

    #[test]
    fn test_restart_reanchors() {
        let mut engine = engine();
        let tools = ToolState::new();

        engine.handle(InputEvent::Start(Point::new(0.0, 0.0)), &tools);
        engine.handle(InputEvent::Move(Point::new(50.0, 50.0)), &tools);
        engine.handle(InputEvent::End, &tools);
        assert_eq!(engine.gesture(), GestureState::Idle);

        engine.handle(InputEvent::Start(Point::new(80.0, 10.0)), &tools);
        engine.handle(InputEvent::Move(Point::new(90.0, 10.0)), &tools);

        match engine.surface().calls().last() {
            Some(PaintCall::Segment { segment, .. }) => {
                assert_eq!(segment.p0, Point::new(80.0, 10.0));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn test_background_fill_covers_surface() {
        let mut engine = engine();
        engine.fill_background(InkColor::white());

        assert_eq!(
            engine.surface().calls(),
            &[PaintCall::Rect {
                rect: kurbo::Rect::new(0.0, 0.0, 100.0, 100.0),
                color: InkColor::white(),
                compose: Compose::SrcOver,
            }]
        );
    }
}
