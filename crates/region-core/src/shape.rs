//! UV model -> visual state: handle positions, overlay geometry and the
//! size readout.

use crate::constants::{PERCENT_SCALE, SIZE_READOUT_DECIMALS};
use crate::coords::{round_to, to_pixel, ScreenDimensions};
use crate::handle::{HandleSet, HandleType};
use crate::uv::UvRect;
use glam::DVec2;
use std::fmt;

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectGeometry {
    pub origin: DVec2,
    pub size: DVec2,
}

impl RectGeometry {
    pub fn new(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self::new(a, b - a)
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }
}

/// Region extent as a percentage of the screen, for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeReadout {
    pub width_pct: f64,
    pub height_pct: f64,
}

impl SizeReadout {
    pub fn from_uvs(uvs: &UvRect) -> Self {
        Self {
            width_pct: round_to(uvs.width() * PERCENT_SCALE, SIZE_READOUT_DECIMALS),
            height_pct: round_to(uvs.height() * PERCENT_SCALE, SIZE_READOUT_DECIMALS),
        }
    }
}

impl fmt::Display for SizeReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% x {}%", self.width_pct, self.height_pct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncedShape {
    pub overlay: RectGeometry,
    pub readout: SizeReadout,
}

pub struct ShapeSynchronizer;

impl ShapeSynchronizer {
    /// Reposition all four handles from `uvs` without notifying anyone and
    /// derive the overlay geometry. Corners are clamped into \[0, 1\] and
    /// inverted rectangles normalized first, so the overlay never gets a
    /// negative size nor leaves the screen the handles are clamped to.
    pub fn apply(uvs: &UvRect, screen: ScreenDimensions, handles: &mut HandleSet) -> SyncedShape {
        let uvs = UvRect::new(uvs.corner_a.clamped(), uvs.corner_b.clamped()).normalized();
        let a = to_pixel(uvs.corner_a, screen);
        let b = to_pixel(uvs.corner_b, screen);

        for kind in HandleType::ALL {
            handles.get_mut(kind).set_position(kind.corner(a, b), screen, None);
        }

        SyncedShape {
            overlay: RectGeometry::from_corners(a, b),
            readout: SizeReadout::from_uvs(&uvs),
        }
    }
}
