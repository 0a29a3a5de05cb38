//! Random exercise generator
//!
//! Draws a ring Z/nZ with 6 ≤ n ≤ 10 plus two small operand sets and an
//! operation from the catalogue. With a seed the draw is reproducible.

use crate::binop::{IntOperation, apply_binary_operation};
use crate::error::AlgebraError;
use crate::ring::ZMod;
use crate::solver::{IdealSummary, classify_ideals};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeSet;

/// Range of the random modulus
pub const MODULUS_RANGE: std::ops::RangeInclusive<u64> = 6..=10;

/// Operand sets are drawn from 0..ELEMENT_BOUND
pub const ELEMENT_BOUND: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomExample {
    pub modulus: u64,
    pub is_ring: bool,
    pub ideals: Vec<IdealSummary>,
    pub left: BTreeSet<u64>,
    pub right: BTreeSet<u64>,
    pub operation: IntOperation,
    pub result: BTreeSet<u64>,
}

/// The configured seed, or a fresh one from the thread RNG
///
/// The resolved seed goes into the report so any run can be replayed.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

pub fn rng_from_seed(seed: u64) -> StdRng {
    log::debug!("random examples use seed {}", seed);
    StdRng::seed_from_u64(seed)
}

fn random_set<R: Rng>(rng: &mut R) -> BTreeSet<u64> {
    let size = rng.random_range(2..=4);
    (0..size).map(|_| rng.random_range(0..ELEMENT_BOUND)).collect()
}

/// Draws one example and solves it
pub fn generate<R: Rng>(rng: &mut R) -> Result<RandomExample, AlgebraError> {
    let modulus = rng.random_range(MODULUS_RANGE);
    let ring = ZMod::integers_mod(modulus)?;

    let left = random_set(rng);
    let right = random_set(rng);
    let catalogue = IntOperation::catalogue();
    let operation = catalogue[rng.random_range(0..catalogue.len())];

    Ok(RandomExample {
        modulus,
        is_ring: ring.is_ring(),
        ideals: classify_ideals(&ring),
        result: apply_binary_operation(&left, &right, &operation),
        left,
        right,
        operation,
    })
}
