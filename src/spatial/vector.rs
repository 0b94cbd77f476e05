//! 2D vector primitive used for guest positions, velocities and targets

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// 2D vector in play-area units (`i` grows right, `j` grows down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub i: f64,
    pub j: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { i: 0.0, j: 0.0 };

    pub fn new(i: f64, j: f64) -> Self {
        Self { i, j }
    }

    pub fn length(&self) -> f64 {
        (self.i * self.i + self.j * self.j).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector has no direction; it normalizes to [`Vector::ZERO`]
    /// instead of producing NaN components.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self { i: self.i / len, j: self.j / len }
        } else {
            Self::ZERO
        }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    /// Sample a point around `center` with uniform angle and uniform radius.
    ///
    /// Not area-uniform: samples cluster toward the center.
    pub fn random_in_circle<R: Rng + ?Sized>(rng: &mut R, center: Vector, radius: f64) -> Self {
        let angle = uniform(rng, 0.0, TAU);
        let r = uniform(rng, 0.0, radius);
        Self {
            i: center.i + angle.cos() * r,
            j: center.j - angle.sin() * r,
        }
    }

    /// Sample a point uniformly inside the rectangle spanning `origin` to
    /// `origin + (width, height)`.
    pub fn random_in_rect<R: Rng + ?Sized>(
        rng: &mut R,
        origin: Vector,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            i: uniform(rng, origin.i, origin.i + width),
            j: uniform(rng, origin.j, origin.j + height),
        }
    }
}

/// Uniform draw from `[low, high)`, collapsing to `low` for an empty range.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

impl std::ops::AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.j += rhs.j;
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { i: self.i - rhs.i, j: self.j - rhs.j }
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { i: self.i * rhs, j: self.j * rhs }
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self * (1.0 / rhs)
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}
