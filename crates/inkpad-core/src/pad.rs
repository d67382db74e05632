//! The drawing pad: input normalizer, tool state and stroke engine wired
//! together around one surface.

use crate::config::PadConfig;
use crate::error::{PadError, PadResult};
use crate::input::{InputNormalizer, Normalized, RawInput};
use crate::stroke::StrokeEngine;
use crate::surface::Surface;
use crate::tools::{InkColor, Tool, ToolState};
use kurbo::{Point, Size};

/// A freehand drawing pad over a surface `S`.
#[derive(Debug)]
pub struct DrawingPad<S> {
    normalizer: InputNormalizer,
    tools: ToolState,
    engine: StrokeEngine<S>,
}

impl<S: Surface> DrawingPad<S> {
    /// Create a pad, painting the configured background onto `surface`.
    ///
    /// The surface must already have the configured size.
    pub fn new(surface: S, config: &PadConfig) -> PadResult<Self> {
        config.validate()?;
        let expected = Size::new(f64::from(config.width), f64::from(config.height));
        if surface.size() != expected {
            return Err(PadError::InvalidConfig(format!(
                "surface is {}x{} but config asks for {}x{}",
                surface.size().width,
                surface.size().height,
                config.width,
                config.height
            )));
        }
        let mut engine = StrokeEngine::new(surface);
        engine.fill_background(config.background_color()?);

        Ok(Self {
            normalizer: InputNormalizer::new(),
            tools: ToolState::with_color(config.default_ink()?),
            engine,
        })
    }

    /// Feed a platform event. `origin` is the surface's bounding-box origin
    /// in client coordinates at the time of the event.
    ///
    /// The returned value tells the caller whether to suppress the platform
    /// default for this event.
    pub fn handle_input(&mut self, raw: &RawInput, origin: Point) -> Normalized {
        let normalized = self.normalizer.normalize(raw, origin);
        if let Some(event) = normalized.event {
            self.engine.handle(event, &self.tools);
        }
        normalized
    }

    /// Paint with a solid color from now on.
    pub fn select_color(&mut self, color: InkColor) {
        self.tools.select_color(color);
    }

    /// Erase from now on.
    pub fn select_eraser(&mut self) {
        self.tools.select_eraser();
    }

    /// Register a callback for tool selection changes.
    pub fn on_tool_change(&mut self, listener: impl FnMut(&Tool) + 'static) {
        self.tools.subscribe(listener);
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool()
    }

    pub fn is_drawing(&self) -> bool {
        self.engine.is_drawing()
    }

    pub fn surface(&self) -> &S {
        self.engine.surface()
    }

    pub fn into_surface(self) -> S {
        self.engine.into_surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseKind, TouchKind};
    use crate::surface::{PaintCall, PaintLog};
    use peniko::Compose;

    fn pad() -> DrawingPad<PaintLog> {
        let config = PadConfig {
            width: 200,
            height: 100,
            ..PadConfig::default()
        };
        DrawingPad::new(PaintLog::new(Size::new(200.0, 100.0)), &config).unwrap()
    }

    #[test]
    fn test_new_paints_background() {
        let pad = pad();
        assert!(matches!(
            pad.surface().calls(),
            [PaintCall::Rect { color, .. }] if *color == InkColor::white()
        ));
        assert_eq!(pad.tool(), Tool::Solid(InkColor::black()));
    }

    #[test]
    fn test_mouse_gesture() {
        let mut pad = pad();
        let origin = Point::new(8.0, 8.0);

        pad.handle_input(&RawInput::mouse(MouseKind::Down, 18.0, 18.0), origin);
        assert!(pad.is_drawing());
        pad.handle_input(&RawInput::mouse(MouseKind::Move, 28.0, 18.0), origin);
        pad.handle_input(&RawInput::mouse(MouseKind::Leave, 28.0, 18.0), origin);
        assert!(!pad.is_drawing());

        let calls = pad.surface().calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(
            calls[2],
            PaintCall::Segment { segment, .. }
                if segment.p0 == Point::new(10.0, 10.0) && segment.p1 == Point::new(20.0, 10.0)
        ));
    }

    #[test]
    fn test_touch_gesture_matches_mouse() {
        let origin = Point::new(3.0, 4.0);
        let mut mouse = pad();
        let mut touch = pad();

        mouse.handle_input(&RawInput::mouse(MouseKind::Down, 10.0, 10.0), origin);
        mouse.handle_input(&RawInput::mouse(MouseKind::Move, 30.0, 12.0), origin);
        mouse.handle_input(&RawInput::mouse(MouseKind::Up, 30.0, 12.0), origin);

        let start = touch.handle_input(&RawInput::touch(TouchKind::Start, 10.0, 10.0), origin);
        touch.handle_input(&RawInput::touch(TouchKind::Move, 30.0, 12.0), origin);
        touch.handle_input(
            &RawInput::Touch {
                kind: TouchKind::End,
                touches: Vec::new(),
            },
            origin,
        );

        assert!(start.prevent_default);
        assert_eq!(mouse.surface().calls(), touch.surface().calls());
        assert!(!touch.is_drawing());
    }

    #[test]
    fn test_tool_switch_between_strokes() {
        let mut pad = pad();
        let origin = Point::ZERO;

        pad.handle_input(&RawInput::mouse(MouseKind::Down, 5.0, 5.0), origin);
        pad.handle_input(&RawInput::mouse(MouseKind::Up, 5.0, 5.0), origin);
        pad.select_eraser();
        pad.handle_input(&RawInput::mouse(MouseKind::Down, 50.0, 50.0), origin);

        let calls = pad.surface().calls();
        // Background, solid dot, eraser dot: earlier calls are untouched.
        assert_eq!(calls[1].compose(), Compose::SrcOver);
        assert_eq!(calls[2].compose(), Compose::DestOut);
    }

    #[test]
    fn test_listener_sees_selection() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut pad = pad();
        let erasing = Rc::new(Cell::new(false));
        {
            let erasing = erasing.clone();
            pad.on_tool_change(move |tool| erasing.set(tool.is_eraser()));
        }

        pad.select_eraser();
        assert!(erasing.get());
        pad.select_color(InkColor::rgb(0, 128, 0));
        assert!(!erasing.get());
        assert_eq!(pad.tool().color(), Some(InkColor::rgb(0, 128, 0)));
    }

    #[test]
    fn test_surface_size_must_match_config() {
        let config = PadConfig {
            width: 10,
            height: 10,
            ..PadConfig::default()
        };
        let result = DrawingPad::new(PaintLog::new(Size::new(64.0, 48.0)), &config);
        assert!(matches!(result, Err(PadError::InvalidConfig(_))));
    }

    #[test]
    fn test_into_surface_returns_painted_log() {
        let mut pad = pad();
        pad.handle_input(&RawInput::mouse(MouseKind::Down, 5.0, 5.0), Point::ZERO);

        let mut log = pad.into_surface();
        assert_eq!(log.calls().len(), 2);
        log.clear();
        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = PadConfig {
            default_color: "nope".to_string(),
            ..PadConfig::default()
        };
        let result = DrawingPad::new(PaintLog::new(Size::new(1.0, 1.0)), &config);
        assert!(result.is_err());
    }
}
