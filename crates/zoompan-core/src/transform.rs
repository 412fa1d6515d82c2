//! 2×3 affine matrix used as the pan/zoom view transform.
//!
//! The matrix maps image coordinates to viewport coordinates:
//!
//! ```text
//! x' = m00 * x + m01 * y + m02
//! y' = m10 * x + m11 * y + m12
//! ```
//!
//! `translate` and `scale` concatenate on the image side, so a translation
//! is expressed in the current (possibly scaled) image units.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m11: f64,
    pub m02: f64,
    pub m12: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            m00: 1.0,
            m10: 0.0,
            m01: 0.0,
            m11: 1.0,
            m02: 0.0,
            m12: 0.0,
        }
    }

    /// Build from the six coefficients in `[m00, m10, m01, m11, m02, m12]` order.
    pub fn from_array(m: [f64; 6]) -> Self {
        Self {
            m00: m[0],
            m10: m[1],
            m01: m[2],
            m11: m[3],
            m02: m[4],
            m12: m[5],
        }
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.m00, self.m10, self.m01, self.m11, self.m02, self.m12]
    }

    /// Concatenate a translation: `self = self * Translate(tx, ty)`.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.m02 += tx * self.m00 + ty * self.m01;
        self.m12 += tx * self.m10 + ty * self.m11;
    }

    /// Concatenate a scale: `self = self * Scale(sx, sy)`.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.m00 *= sx;
        self.m10 *= sx;
        self.m01 *= sy;
        self.m11 *= sy;
    }

    pub fn determinant(&self) -> f64 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Matrix inverse, or `None` when the transform is singular.
    pub fn inverse(&self) -> Option<AffineTransform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = Self {
            m00: self.m11 / det,
            m10: -self.m10 / det,
            m01: -self.m01 / det,
            m11: self.m00 / det,
            m02: (self.m01 * self.m12 - self.m11 * self.m02) / det,
            m12: (self.m10 * self.m02 - self.m00 * self.m12) / det,
        };
        inv.is_finite().then_some(inv)
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m00 * p.x + self.m01 * p.y + self.m02,
            self.m10 * p.x + self.m11 * p.y + self.m12,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Coefficient-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &AffineTransform, eps: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl std::fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[[{:.6}, {:.6}, {:.6}], [{:.6}, {:.6}, {:.6}]]",
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12
        )
    }
}
