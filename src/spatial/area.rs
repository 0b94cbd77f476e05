//! Axis-aligned areas of the party floor plan

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::spatial::vector::Vector;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive on all edges
    pub fn contains(&self, p: Vector) -> bool {
        !self.outside_horizontally(p.i) && !self.outside_vertically(p.j)
    }

    pub fn outside_horizontally(&self, i: f64) -> bool {
        i < self.x || i > self.right()
    }

    pub fn outside_vertically(&self, j: f64) -> bool {
        j < self.y || j > self.bottom()
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
        Vector::random_in_rect(rng, self.origin(), self.width, self.height)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Where guests roam and the stations they walk to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Bounds guests bounce off
    pub play_area: Rect,
    pub food_station: Rect,
    pub drink_station: Rect,
    pub door: Rect,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            play_area: Rect::new(184.0, 140.0, 593.0, 436.0),
            food_station: Rect::new(280.0, 280.0, 40.0, 200.0),
            drink_station: Rect::new(640.0, 200.0, 40.0, 200.0),
            door: Rect::new(420.0, 540.0, 115.0, 35.0),
        }
    }
}
