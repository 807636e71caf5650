//! Host-facing UV data model. Field names follow the host's JSON (`uvA`/`uvB`).

use crate::constants::{UV_MAX, UV_MIN};
use crate::coords::clamp;
use crate::handle::HandleType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn clamped(self) -> Self {
        Self::new(clamp(self.x, UV_MIN, UV_MAX), clamp(self.y, UV_MIN, UV_MAX))
    }
}

/// Rectangle in UV space. `corner_a` is nominally top-left and `corner_b`
/// bottom-right; nothing enforces that ordering on input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    #[serde(rename = "uvA")]
    pub corner_a: NormalizedPoint,
    #[serde(rename = "uvB")]
    pub corner_b: NormalizedPoint,
}

impl Default for UvRect {
    fn default() -> Self {
        Self::new(NormalizedPoint::new(0.0, 0.0), NormalizedPoint::new(1.0, 1.0))
    }
}

impl UvRect {
    pub fn new(corner_a: NormalizedPoint, corner_b: NormalizedPoint) -> Self {
        Self { corner_a, corner_b }
    }

    pub fn is_inverted(&self) -> bool {
        self.corner_a.x > self.corner_b.x || self.corner_a.y > self.corner_b.y
    }

    /// Per-axis min/max so that `corner_a` is top-left and `corner_b` bottom-right.
    pub fn normalized(&self) -> Self {
        let (a, b) = (self.corner_a, self.corner_b);
        Self::new(
            NormalizedPoint::new(a.x.min(b.x), a.y.min(b.y)),
            NormalizedPoint::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    pub fn width(&self) -> f64 {
        self.corner_b.x - self.corner_a.x
    }

    pub fn height(&self) -> f64 {
        self.corner_b.y - self.corner_a.y
    }

    /// Fold a single-corner update into the rectangle, the way the host
    /// reconciles `notifyUV`: the point is clamped into \[0, 1\], written to
    /// the axes that corner owns, and the result is min/max normalized.
    pub fn with_corner(&self, kind: HandleType, point: NormalizedPoint) -> Self {
        let point = point.clamped();
        let mut next = *self;
        match kind {
            HandleType::TopLeft => {
                next.corner_a.x = point.x;
                next.corner_a.y = point.y;
            }
            HandleType::TopRight => {
                next.corner_b.x = point.x;
                next.corner_a.y = point.y;
            }
            HandleType::BottomLeft => {
                next.corner_a.x = point.x;
                next.corner_b.y = point.y;
            }
            HandleType::BottomRight => {
                next.corner_b.x = point.x;
                next.corner_b.y = point.y;
            }
        }
        next.normalized()
    }
}

/// A light's projection area as handed over by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightRegion {
    pub name: String,
    pub uvs: UvRect,
}

impl LightRegion {
    pub fn new(name: impl Into<String>, uvs: UvRect) -> Self {
        Self {
            name: name.into(),
            uvs,
        }
    }
}
