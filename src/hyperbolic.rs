//! Hyperbolic functions and hyperbolic rotations
//!
//! ch(t) = (eᵗ + e⁻ᵗ)/2, sh(t) = (eᵗ − e⁻ᵗ)/2 satisfy ch² − sh² = 1, so the
//! point (ch t, sh t) lies on the unit hyperbola x² − y² = 1. The matrix
//! [[ch t, sh t], [sh t, ch t]] moves points along that hyperbola the way a
//! rotation matrix moves points along the unit circle.

use crate::complex::{TOLERANCE, approx_eq};
use num_complex::Complex64;

/// Row-major 2×2 matrix
pub type Matrix2 = [[f64; 2]; 2];

/// A point of the plane as `[x, y]`
pub type Point = [f64; 2];

/// ch²(t) − sh²(t), which is 1 up to rounding
pub fn hyperbolic_identity(t: f64) -> f64 {
    t.cosh().powi(2) - t.sinh().powi(2)
}

/// One identity linking circular and hyperbolic functions, evaluated at a
/// real argument
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub label: &'static str,
    pub lhs: Complex64,
    pub rhs: Complex64,
}

impl Relation {
    /// `true` if both sides agree within tolerance
    pub fn holds(&self) -> bool {
        approx_eq(self.lhs, self.rhs)
    }
}

/// ch(it) = cos t, sh(it) = i·sin t, cos(it) = ch t, sin(it) = i·sh t
pub fn circular_relations(t: f64) -> [Relation; 4] {
    let it = Complex64::new(0.0, t);
    let i = Complex64::i();
    [
        Relation {
            label: "ch(it) = cos(t)",
            lhs: it.cosh(),
            rhs: Complex64::new(t.cos(), 0.0),
        },
        Relation {
            label: "sh(it) = i·sin(t)",
            lhs: it.sinh(),
            rhs: i * t.sin(),
        },
        Relation {
            label: "cos(it) = ch(t)",
            lhs: it.cos(),
            rhs: Complex64::new(t.cosh(), 0.0),
        },
        Relation {
            label: "sin(it) = i·sh(t)",
            lhs: it.sin(),
            rhs: i * t.sinh(),
        },
    ]
}

/// The hyperbolic rotation [[ch t, sh t], [sh t, ch t]]
pub fn hyperbolic_rotation(t: f64) -> Matrix2 {
    let (ch, sh) = (t.cosh(), t.sinh());
    [[ch, sh], [sh, ch]]
}

/// Matrix–vector product `m · p`
pub fn apply(m: &Matrix2, p: Point) -> Point {
    [
        m[0][0] * p[0] + m[0][1] * p[1],
        m[1][0] * p[0] + m[1][1] * p[1],
    ]
}

/// Matrix product `a · b`
pub fn compose(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut out = [[0.0; 2]; 2];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c];
        }
    }
    out
}

/// The point (ch s, sh s) of the unit hyperbola
pub fn hyperbola_point(s: f64) -> Point {
    [s.cosh(), s.sinh()]
}

/// x² − y²
pub fn hyperbolic_norm(p: Point) -> f64 {
    p[0] * p[0] - p[1] * p[1]
}

/// `true` if `p` lies on x² − y² = 1 within tolerance
pub fn on_unit_hyperbola(p: Point) -> bool {
    (hyperbolic_norm(p) - 1.0).abs() < TOLERANCE
}
