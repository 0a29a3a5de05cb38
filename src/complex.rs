//! Rotations of plane figures as complex multiplication
//!
//! A point (x, y) is the complex number x + iy; rotating by θ is
//! multiplication by e^{iθ}. Comparisons use an absolute tolerance of
//! `TOLERANCE` on each component.

use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// Componentwise tolerance used by `approx_eq`
pub const TOLERANCE: f64 = 1e-10;

/// `true` if both components differ by less than `TOLERANCE`
pub fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a.re - b.re).abs() < TOLERANCE && (a.im - b.im).abs() < TOLERANCE
}

/// Unit complex number e^{iθ}
pub fn rotation(theta: f64) -> Complex64 {
    Complex64::from_polar(1.0, theta)
}

/// Unit complex number for a rotation given in degrees
pub fn rotation_degrees(degrees: f64) -> Complex64 {
    rotation(degrees.to_radians())
}

/// The square with vertices 1+i, −1+i, −1−i, 1−i (counter-clockwise)
pub fn unit_square() -> [Complex64; 4] {
    [
        Complex64::new(1.0, 1.0),
        Complex64::new(-1.0, 1.0),
        Complex64::new(-1.0, -1.0),
        Complex64::new(1.0, -1.0),
    ]
}

/// Multiplies every point of `shape` by `rotation`, keeping the order
pub fn rotate_shape(shape: &[Complex64], rotation: Complex64) -> Vec<Complex64> {
    shape.iter().map(|z| z * rotation).collect()
}

/// `true` if `R(α)·R(β) = R(α+β)` within tolerance (angles in degrees)
pub fn rotations_compose(alpha: f64, beta: f64) -> bool {
    approx_eq(
        rotation_degrees(alpha) * rotation_degrees(beta),
        rotation_degrees(alpha + beta),
    )
}

/// The classroom formula `(r·sin θ, −r·cos θ)` for the conjugate of z = r·e^{iθ}
///
/// This is −i·z, not z̄; the two agree only when Re z = Im z.
pub fn polar_swap_conjugate(z: Complex64) -> Complex64 {
    let (r, theta) = z.to_polar();
    Complex64::new(r * theta.sin(), -r * theta.cos())
}

/// `sin²θ − cos²θ` and `−cos 2θ` for `θ = arg z`
pub fn squares_difference(z: Complex64) -> (f64, f64) {
    let theta = z.arg();
    let diff = theta.sin().powi(2) - theta.cos().powi(2);
    (diff, -(2.0 * theta).cos())
}

/// Formats a complex number as `a + bi` / `a - bi` with three decimals
#[derive(Debug, Clone, Copy)]
pub struct FmtComplex(pub Complex64);

impl fmt::Display for FmtComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let z = self.0;
        // print -0.000 as 0.000
        let re = if z.re.abs() < 5e-4 { 0.0 } else { z.re };
        if z.im >= 0.0 || z.im.abs() < 5e-4 {
            write!(f, "{:.3} + {:.3}i", re, z.im.abs())
        } else {
            write!(f, "{:.3} - {:.3}i", re, z.im.abs())
        }
    }
}

/// Angles (degrees) of the rotation homomorphism demo: R30 · R60 = R90
pub const HOMOMORPHISM_ANGLES: (f64, f64) = (30.0, 60.0);

/// A quarter turn, e^{iπ/2} = i
pub fn quarter_turn() -> Complex64 {
    rotation(PI / 2.0)
}
