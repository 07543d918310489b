use serde::{Deserialize, Serialize};

/// A position on the canvas. Nothing stops it from being non-finite; mapping through a degenerate
/// range produces NaN or infinity, and callers decide what to do with that.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pt2D {
    x: f64,
    y: f64,
}

impl Pt2D {
    pub fn new(x: f64, y: f64) -> Pt2D {
        Pt2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}
