use algebra_lab::binop::IntOperation;
use algebra_lab::ring::{FiniteRing, ZMod, is_maximal_in_zn, is_prime};
use algebra_lab::{AlgebraError, RingAxiomError};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn set(values: &[u64]) -> BTreeSet<u64> {
    values.iter().copied().collect()
}

#[test]
fn test_z12_is_a_ring() {
    let z12 = ZMod::integers_mod(12).unwrap();
    assert_eq!(z12.verify(), Ok(0));
    assert_eq!(z12.order(), 12);
    assert_eq!(z12.generate_ideal(&3), set(&[0, 3, 6, 9]));
}

#[test]
fn test_zero_modulus_rejected() {
    assert_eq!(
        ZMod::integers_mod(0).err(),
        Some(AlgebraError::InvalidModulus(0))
    );
}

#[test]
fn test_trivial_ring() {
    // Z/1Z = {0} satisfies every axiom
    let z1 = ZMod::integers_mod(1).unwrap();
    assert!(z1.is_ring());
    assert_eq!(z1.cyclic_ideals(), vec![(0, set(&[0]))]);
}

#[test]
fn test_subtraction_as_multiplication_rejected() {
    let ring = FiniteRing::new(set(&[0, 1, 2, 3]), IntOperation::AddMod(4), |a: &u64, b: &u64| {
        (a + 4 - b) % 4
    });
    let err = ring.verify().unwrap_err();
    assert!(matches!(err, RingAxiomError::MultiplicationNotAssociative { .. }));
    assert_eq!(err.axiom(), "multiplicative associativity");
}

#[test]
fn test_open_addition_rejected() {
    // plain a+b leaves {0, 1, 2}
    let ring = FiniteRing::new(set(&[0, 1, 2]), IntOperation::Add, IntOperation::MulMod(3));
    assert_eq!(ring.verify(), Err(RingAxiomError::NotClosed { a: 1, b: 2 }));
}

#[test]
fn test_maximal_and_prime_ideals_of_z12() {
    let z12 = ZMod::integers_mod(12).unwrap();
    let ideals = z12.cyclic_ideals();

    let maximal: Vec<u64> = ideals
        .iter()
        .filter(|(_, i)| is_maximal_in_zn(12, i))
        .map(|(g, _)| *g)
        .collect();
    assert_eq!(maximal, vec![2, 3]);

    assert!(z12.is_prime_ideal(&z12.generate_ideal(&2)));
    assert!(z12.is_prime_ideal(&z12.generate_ideal(&3)));
    assert!(!z12.is_prime_ideal(&z12.generate_ideal(&4)));
    assert!(!z12.is_prime_ideal(&z12.generate_ideal(&6)));
}

#[test]
fn test_quotient_z8_by_four() {
    let z8 = ZMod::integers_mod(8).unwrap();
    let ideal = z8.generate_ideal(&4);
    assert_eq!(ideal, set(&[0, 4]));
    assert_eq!(z8.quotient_order(&ideal), 4);
    assert_eq!(z8.coset(&3, &ideal), set(&[3, 7]));
}

#[test]
fn test_is_prime() {
    let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

proptest! {
    #[test]
    fn prop_ideal_closure_is_idempotent(
        n in 1u64..16,
        seed in prop::collection::btree_set(0u64..16, 1..4),
    ) {
        let ring = ZMod::integers_mod(n).unwrap();
        let seed: BTreeSet<u64> = seed.into_iter().map(|x| x % n).collect();
        let ideal = ring.close_ideal(&seed);
        prop_assert!(seed.is_subset(&ideal));
        prop_assert!(ring.is_ideal(&ideal));
        prop_assert_eq!(ring.close_ideal(&ideal), ideal);
    }

    #[test]
    fn prop_zn_is_a_ring(n in 1u64..10) {
        prop_assert!(ZMod::integers_mod(n).unwrap().is_ring());
    }

    #[test]
    fn prop_cosets_partition_zn(n in 1u64..20, g in 0u64..20) {
        let ring = ZMod::integers_mod(n).unwrap();
        let ideal = ring.generate_ideal(&(g % n));
        let cosets = ring.cosets(&ideal);
        let union: BTreeSet<u64> = cosets.iter().flatten().copied().collect();
        prop_assert_eq!(union.len(), n as usize);
        prop_assert_eq!(cosets.len() * ideal.len(), n as usize);
    }
}
