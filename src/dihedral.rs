//! The dihedral group D4: symmetries of a square
//!
//! Every symmetry acts on the complex plane as z ↦ iᵏ·z (rotation by k
//! quarter turns) or z ↦ iᵏ·z̄ (a reflection). Composition follows from
//! conj(iᵏ·w) = i⁻ᵏ·conj(w).

use crate::complex::unit_square;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One of the eight symmetries of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    R0,
    R90,
    R180,
    R270,
    /// reflection in the x axis
    Sx,
    /// reflection in the y axis
    Sy,
    /// reflection in the diagonal y = x
    Sd1,
    /// reflection in the anti-diagonal y = −x
    Sd2,
}

impl Symmetry {
    /// All elements, rotations first
    pub fn all() -> [Symmetry; 8] {
        use Symmetry::*;
        [R0, R90, R180, R270, Sx, Sy, Sd1, Sd2]
    }

    /// The group as a set, for the generic property checks
    pub fn group() -> BTreeSet<Symmetry> {
        Self::all().into_iter().collect()
    }

    /// `(k, reflect)` such that the symmetry is z ↦ iᵏ·z or z ↦ iᵏ·z̄
    fn parts(self) -> (u8, bool) {
        match self {
            Symmetry::R0 => (0, false),
            Symmetry::R90 => (1, false),
            Symmetry::R180 => (2, false),
            Symmetry::R270 => (3, false),
            Symmetry::Sx => (0, true),
            Symmetry::Sd1 => (1, true),
            Symmetry::Sy => (2, true),
            Symmetry::Sd2 => (3, true),
        }
    }

    fn from_parts(k: u8, reflect: bool) -> Self {
        match (k % 4, reflect) {
            (0, false) => Symmetry::R0,
            (1, false) => Symmetry::R90,
            (2, false) => Symmetry::R180,
            (3, false) => Symmetry::R270,
            (0, true) => Symmetry::Sx,
            (1, true) => Symmetry::Sd1,
            (2, true) => Symmetry::Sy,
            _ => Symmetry::Sd2,
        }
    }

    /// `true` for R0, R90, R180 and R270
    pub fn is_rotation(self) -> bool {
        !self.parts().1
    }

    /// `self ∘ other`: apply `other` first, then `self`
    pub fn compose(self, other: Symmetry) -> Symmetry {
        let (k1, f1) = self.parts();
        let (k2, f2) = other.parts();
        let k = if f1 { k1 + 4 - k2 } else { k1 + k2 };
        Symmetry::from_parts(k, f1 ^ f2)
    }

    /// Reflections are their own inverse; R(k)⁻¹ = R(4 − k)
    pub fn inverse(self) -> Symmetry {
        let (k, reflect) = self.parts();
        if reflect {
            self
        } else {
            Symmetry::from_parts(4 - k, false)
        }
    }

    /// Smallest n ≥ 1 with selfⁿ = R0
    pub fn order(self) -> usize {
        let mut power = self;
        let mut n = 1;
        while power != Symmetry::R0 {
            power = self.compose(power);
            n += 1;
        }
        n
    }

    /// Image of a point of the plane
    pub fn apply(self, z: Complex64) -> Complex64 {
        let (k, reflect) = self.parts();
        let w = if reflect { z.conj() } else { z };
        w * Complex64::i().powu(u32::from(k))
    }

    /// Where each vertex of the unit square goes: entry `v` is the index of
    /// the image of vertex `v`
    pub fn permutation(self) -> [usize; 4] {
        let square = unit_square();
        let mut images = [0; 4];
        for (v, image) in images.iter_mut().enumerate() {
            let moved = self.apply(square[v]);
            // images of ±1±i are again ±1±i up to rounding
            *image = square
                .iter()
                .position(|p| (p - moved).norm() < 1e-9)
                .unwrap_or(v);
        }
        images
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binop::{has_inverses, identity_element, is_associative, is_closed, is_commutative};
    use crate::complex::approx_eq;

    fn op(a: &Symmetry, b: &Symmetry) -> Symmetry {
        a.compose(*b)
    }

    #[test]
    fn test_group_axioms() {
        let d4 = Symmetry::group();
        assert_eq!(d4.len(), 8);
        assert!(is_closed(&d4, &op));
        assert!(is_associative(&d4, &op));
        assert_eq!(identity_element(&d4, &op), Some(Symmetry::R0));
        assert!(has_inverses(&d4, &op, &Symmetry::R0));
        assert!(!is_commutative(&d4, &op));
    }

    #[test]
    fn test_compose_matches_action() {
        let z = Complex64::new(2.0, 0.5);
        for a in Symmetry::all() {
            for b in Symmetry::all() {
                assert!(approx_eq(a.compose(b).apply(z), a.apply(b.apply(z))));
            }
        }
    }

    #[test]
    fn test_inverse() {
        for s in Symmetry::all() {
            assert_eq!(s.compose(s.inverse()), Symmetry::R0);
            assert_eq!(s.inverse().compose(s), Symmetry::R0);
        }
    }

    #[test]
    fn test_element_orders() {
        assert_eq!(Symmetry::R0.order(), 1);
        assert_eq!(Symmetry::R90.order(), 4);
        assert_eq!(Symmetry::R180.order(), 2);
        for s in [Symmetry::Sx, Symmetry::Sy, Symmetry::Sd1, Symmetry::Sd2] {
            assert_eq!(s.order(), 2);
        }
    }

    #[test]
    fn test_reflection_axes() {
        let p = Complex64::new(2.0, 1.0);
        assert!(approx_eq(Symmetry::Sx.apply(p), Complex64::new(2.0, -1.0)));
        assert!(approx_eq(Symmetry::Sy.apply(p), Complex64::new(-2.0, 1.0)));
        assert!(approx_eq(Symmetry::Sd1.apply(p), Complex64::new(1.0, 2.0)));
        assert!(approx_eq(Symmetry::Sd2.apply(p), Complex64::new(-1.0, -2.0)));
    }

    #[test]
    fn test_permutations_are_distinct() {
        let perms: BTreeSet<[usize; 4]> = Symmetry::all().iter().map(|s| s.permutation()).collect();
        assert_eq!(perms.len(), 8);
        assert_eq!(Symmetry::R90.permutation(), [1, 2, 3, 0]);
        assert_eq!(Symmetry::R0.permutation(), [0, 1, 2, 3]);
    }
}
