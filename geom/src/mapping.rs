use serde::{Deserialize, Serialize};

use crate::{Bounds, GPSBounds, LonLat, Pt2D};

/// Maps `value` from `[low1, high1]` to `[low2, high2]` with an affine transform. A degenerate
/// source range divides by zero; the result is NaN or infinite rather than an error.
pub fn map_value(value: f64, low1: f64, high1: f64, low2: f64, high2: f64) -> f64 {
    low2 + (high2 - low2) * (value - low1) / (high1 - low1)
}

/// How geographic coordinates land on the canvas. This is a plain min-max rescaling per axis,
/// not a real map projection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    pub gps: GPSBounds,
    pub canvas: Bounds,
}

impl Geometry {
    pub fn new(gps: GPSBounds, canvas: Bounds) -> Geometry {
        Geometry { gps, canvas }
    }

    pub fn convert(&self, pt: LonLat) -> Pt2D {
        Pt2D::new(
            map_value(
                pt.longitude,
                self.gps.min_lon,
                self.gps.max_lon,
                self.canvas.min_x,
                self.canvas.max_x,
            ),
            map_value(
                pt.latitude,
                self.gps.min_lat,
                self.gps.max_lat,
                self.canvas.min_y,
                self.canvas.max_y,
            ),
        )
    }

    /// Order- and length-preserving; nothing is filtered here.
    pub fn convert_all(&self, pts: &[LonLat]) -> Vec<Pt2D> {
        pts.iter().map(|pt| self.convert(*pt)).collect()
    }

    /// Replaces the geographic window with the extrema of the data itself.
    pub fn fit_to(&mut self, pts: &[LonLat]) {
        self.gps = GPSBounds::from(pts);
    }
}
