//! Canvas 2D style keywords.

use kurbo::{Cap, Join};
use peniko::Compose;

/// `globalCompositeOperation` keyword for a compositing rule.
pub fn composite_operation(compose: Compose) -> &'static str {
    match compose {
        Compose::Clear => "clear",
        Compose::Copy => "copy",
        Compose::Dest => "destination",
        Compose::SrcOver => "source-over",
        Compose::DestOver => "destination-over",
        Compose::SrcIn => "source-in",
        Compose::DestIn => "destination-in",
        Compose::SrcOut => "source-out",
        Compose::DestOut => "destination-out",
        Compose::SrcAtop => "source-atop",
        Compose::DestAtop => "destination-atop",
        Compose::Xor => "xor",
        Compose::Plus => "lighter",
        _ => "source-over",
    }
}

/// `lineCap` keyword.
pub fn line_cap(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Square => "square",
        Cap::Round => "round",
    }
}

/// `lineJoin` keyword.
pub fn line_join(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}
