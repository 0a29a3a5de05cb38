//! Algebraic Structures Laboratory
//!
//! This library provides generic binary operations on finite sets, a ring
//! axiom verifier with ideal and quotient computations, complex and
//! hyperbolic rotation helpers, the dihedral group D4 and a demonstration
//! runner that ties them together.

/// Binary operations on finite sets and their algebraic properties
pub mod binop;
/// Complex numbers as plane rotations
pub mod complex;
/// Demonstration parameters and JSON config loading
pub mod config;
/// Section runner and JSON report
pub mod demo;
/// Symmetry group of the square
pub mod dihedral;
/// Text formatting for sets, banners, matrices and Cayley tables
pub mod display;
/// Error types
pub mod error;
/// Hyperbolic functions and hyperbolic rotations
pub mod hyperbolic;
/// Seeded random exercises
pub mod random_examples;
/// Finite rings, ideals and quotient rings
pub mod ring;
/// Small algebra problems and their solutions
pub mod solver;

pub use binop::{BinaryOperation, IntOperation, apply_binary_operation};
pub use config::DemoConfig;
pub use demo::{DemoRunner, Report, Section};
pub use error::{AlgebraError, DemoError, RingAxiomError};
pub use ring::{FiniteRing, ZMod};
