//! Unified mouse/touch input.
//!
//! Platform events are described as [`RawInput`] in client coordinates and
//! normalized into surface-local [`InputEvent`]s that the stroke engine
//! consumes without knowing which device produced them.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse event kinds the pad listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseKind {
    Down,
    Move,
    Up,
    /// The pointer left the surface.
    Leave,
}

/// Touch event kinds the pad listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchKind {
    Start,
    Move,
    End,
    Cancel,
}

/// A platform input event in client (viewport) coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawInput {
    Mouse {
        kind: MouseKind,
        client: Option<Point>,
    },
    Touch {
        kind: TouchKind,
        /// Active contact points, primary first.
        touches: Vec<Point>,
    },
}

impl RawInput {
    /// Mouse event at a client position.
    pub fn mouse(kind: MouseKind, x: f64, y: f64) -> Self {
        RawInput::Mouse {
            kind,
            client: Some(Point::new(x, y)),
        }
    }

    /// Touch event with a single contact at a client position.
    pub fn touch(kind: TouchKind, x: f64, y: f64) -> Self {
        RawInput::Touch {
            kind,
            touches: vec![Point::new(x, y)],
        }
    }
}

/// Device-independent gesture event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Start(Point),
    Move(Point),
    End,
}

/// Result of normalizing one raw input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normalized {
    /// The event to feed the engine, if the input was usable.
    pub event: Option<InputEvent>,
    /// Whether the platform's default scroll/gesture handling must be
    /// suppressed for this input.
    pub prevent_default: bool,
}

/// Maps raw pointer sources onto the surface's local coordinate space.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputNormalizer;

impl InputNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize `raw` given the surface's bounding-box origin in client space.
    pub fn normalize(&self, raw: &RawInput, origin: Point) -> Normalized {
        match raw {
            RawInput::Mouse { kind, client } => {
                let event = match kind {
                    MouseKind::Down => to_local(*client, origin).map(InputEvent::Start),
                    MouseKind::Move => to_local(*client, origin).map(InputEvent::Move),
                    MouseKind::Up | MouseKind::Leave => Some(InputEvent::End),
                };
                Normalized {
                    event,
                    prevent_default: false,
                }
            }
            RawInput::Touch { kind, touches } => {
                let primary = touches.first().copied();
                match kind {
                    TouchKind::Start => Normalized {
                        event: to_local(primary, origin).map(InputEvent::Start),
                        prevent_default: true,
                    },
                    TouchKind::Move => Normalized {
                        event: to_local(primary, origin).map(InputEvent::Move),
                        prevent_default: true,
                    },
                    TouchKind::End | TouchKind::Cancel => Normalized {
                        event: Some(InputEvent::End),
                        prevent_default: false,
                    },
                }
            }
        }
    }
}

fn to_local(client: Option<Point>, origin: Point) -> Option<Point> {
    let Some(client) = client else {
        log::trace!("Dropping input without coordinates");
        return None;
    };
    if !client.is_finite() || !origin.is_finite() {
        log::trace!("Dropping input with non-finite coordinates {client:?}");
        return None;
    }
    Some(client - Vec2::new(origin.x, origin.y))
}
