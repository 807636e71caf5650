//! Pixel <-> normalized conversion for the screen surface.
//!
//! Pixel points are surface-local (origin at the top-left corner of the
//! screen area, y growing downwards). Normalized points live in \[0, 1\] on
//! both axes once clamped.

use crate::error::RegionError;
use crate::uv::NormalizedPoint;
use glam::DVec2;

/// Current pixel extent of the screen surface. Queried live, never cached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenDimensions {
    pub width: f64,
    pub height: f64,
}

impl ScreenDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either axis has no positive extent (normalizing would divide by zero).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Clamp a pixel point into `[0, width] x [0, height]`.
    #[inline]
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            clamp(point.x, 0.0, self.width.max(0.0)),
            clamp(point.y, 0.0, self.height.max(0.0)),
        )
    }
}

/// `min(max(value, min), max)` without the panics of `f64::clamp` on odd bounds.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Clamp `pixel` into the screen and divide by its extent.
///
/// Requires `screen.width > 0 && screen.height > 0`; a degenerate screen is
/// reported as [`RegionError::DegenerateScreen`] instead of producing NaN.
pub fn to_normalized(
    pixel: DVec2,
    screen: ScreenDimensions,
) -> Result<NormalizedPoint, RegionError> {
    if screen.is_degenerate() {
        return Err(RegionError::DegenerateScreen {
            width: screen.width,
            height: screen.height,
        });
    }
    let clamped = screen.clamp(pixel);
    Ok(NormalizedPoint::new(
        clamped.x / screen.width,
        clamped.y / screen.height,
    ))
}

#[inline]
pub fn to_pixel(uv: NormalizedPoint, screen: ScreenDimensions) -> DVec2 {
    DVec2::new(uv.x * screen.width, uv.y * screen.height)
}

/// Round to `decimals` places, ties away from zero. Display only.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let exp = 10f64.powi(decimals);
    (value * exp).round() / exp
}

/// Affine client -> surface mapping taken from the surface's screen matrix
/// (scale `a`/`d`, offset `e`/`f`; no rotation or skew).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    pub a: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl SurfaceTransform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, d, e, f }
    }

    pub fn client_to_local(&self, client: DVec2) -> Result<DVec2, RegionError> {
        if self.a == 0.0 || self.d == 0.0 {
            return Err(RegionError::DegenerateTransform);
        }
        Ok(DVec2::new(
            (client.x - self.e) / self.a,
            (client.y - self.f) / self.d,
        ))
    }
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
