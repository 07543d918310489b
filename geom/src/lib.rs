//! Geometric primitives for placing geographic data on a slide canvas. Longitude is x and
//! latitude is y throughout.

pub use crate::bounds::Bounds;
pub use crate::gps::{GPSBounds, LonLat};
pub use crate::mapping::{map_value, Geometry};
pub use crate::pt::Pt2D;

mod bounds;
mod gps;
mod mapping;
mod pt;

/// Don't compare floats directly in tests; mapping goes through a division.
pub const EPSILON_DIST: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON_DIST
}
