//! Finite rings, their ideals and quotients
//!
//! - `FiniteRing`: a finite set with addition and multiplication, checked
//!   against the ring axioms by exhaustive search
//! - ideal generation by fixed-point absorption, ideal/prime/maximal checks
//! - additive cosets of an ideal (the elements of the quotient ring)
//!
//! The constructor `FiniteRing::integers_mod(n)` builds Z/nZ, the only ring
//! family the demonstrations use.

pub mod finite;
pub mod ideal;
pub mod quotient;

pub use finite::{FiniteRing, ZMod};
pub use ideal::{is_maximal_in_zn, is_prime};
