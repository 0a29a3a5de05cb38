//! Ring axiom verification over a finite carrier set

use crate::binop::{
    BinaryOperation, IntOperation, associativity_counterexample, commutativity_counterexample,
    element_without_inverse,
};
use crate::error::{AlgebraError, RingAxiomError};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// A candidate ring `(R, +, ×)` over a finite set of elements
///
/// Nothing is assumed about the operations; `verify` decides whether the
/// triple actually is a ring.
///
/// # Type Parameters
/// - `T`: element type
/// - `A`: addition
/// - `M`: multiplication
#[derive(Debug, Clone)]
pub struct FiniteRing<T, A, M> {
    elements: BTreeSet<T>,
    add: A,
    mul: M,
}

/// The ring of integers modulo n
pub type ZMod = FiniteRing<u64, IntOperation, IntOperation>;

impl ZMod {
    /// Builds Z/nZ = {0, …, n−1} with `(a+b) mod n` and `(a·b) mod n`
    ///
    /// # Errors
    /// `AlgebraError::InvalidModulus` if `n == 0`
    pub fn integers_mod(n: u64) -> Result<Self, AlgebraError> {
        if n == 0 {
            return Err(AlgebraError::InvalidModulus(n));
        }
        Ok(FiniteRing::new(
            (0..n).collect(),
            IntOperation::AddMod(n),
            IntOperation::MulMod(n),
        ))
    }

    /// The modulus n, if this really is Z/nZ
    ///
    /// `None` when the operations are not `(a+b) mod n` and `(a·b) mod n`
    /// for one n, or the elements are not exactly {0, …, n−1}.
    pub fn modulus(&self) -> Option<u64> {
        match (self.add, self.mul) {
            (IntOperation::AddMod(n), IntOperation::MulMod(m))
                if n == m && self.elements.iter().copied().eq(0..n) =>
            {
                Some(n)
            }
            _ => None,
        }
    }
}

impl<T, A, M> FiniteRing<T, A, M>
where
    T: Ord + Clone + Debug,
    A: BinaryOperation<T>,
    M: BinaryOperation<T>,
{
    /// Creates a candidate ring from its elements and operations
    pub fn new(elements: BTreeSet<T>, add: A, mul: M) -> Self {
        Self { elements, add, mul }
    }

    /// The carrier set, in sorted order
    pub fn elements(&self) -> &BTreeSet<T> {
        &self.elements
    }

    /// Number of elements
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// `a + b` in this ring
    pub fn add(&self, a: &T, b: &T) -> T {
        self.add.apply(a, b)
    }

    /// `a × b` in this ring
    pub fn mul(&self, a: &T, b: &T) -> T {
        self.mul.apply(a, b)
    }

    /// The element `e` with `x + e = x` for every `x`, if any
    pub fn additive_identity(&self) -> Option<T> {
        self.elements
            .iter()
            .find(|e| self.elements.iter().all(|x| self.add(x, e) == *x))
            .cloned()
    }

    /// Checks every ring axiom and returns the additive identity
    ///
    /// Checks run in this order and stop at the first failure: closure of
    /// both operations, additive identity, additive associativity and
    /// commutativity, additive inverses, multiplicative associativity,
    /// left and right distributivity.
    ///
    /// # Complexity
    /// O(|R|³) operation applications.
    ///
    /// # Errors
    /// The violated axiom together with the witnesses.
    pub fn verify(&self) -> Result<T, RingAxiomError<T>> {
        let result = self.check_axioms();
        match &result {
            Ok(_) => log::debug!("ring of order {} satisfies all axioms", self.order()),
            Err(e) => log::warn!("ring of order {} rejected: {}", self.order(), e),
        }
        result
    }

    /// `true` if `verify` succeeds
    pub fn is_ring(&self) -> bool {
        self.verify().is_ok()
    }

    fn check_axioms(&self) -> Result<T, RingAxiomError<T>> {
        let elems = &self.elements;

        for a in elems {
            for b in elems {
                if !elems.contains(&self.add(a, b)) || !elems.contains(&self.mul(a, b)) {
                    return Err(RingAxiomError::NotClosed {
                        a: a.clone(),
                        b: b.clone(),
                    });
                }
            }
        }

        let zero = self
            .additive_identity()
            .ok_or(RingAxiomError::NoAdditiveIdentity)?;
        log::debug!("additive identity: {:?}", zero);

        if let Some((a, b, c)) = associativity_counterexample(elems, &self.add) {
            return Err(RingAxiomError::AdditionNotAssociative { a, b, c });
        }
        if let Some((a, b)) = commutativity_counterexample(elems, &self.add) {
            return Err(RingAxiomError::AdditionNotCommutative { a, b });
        }
        if let Some(element) = element_without_inverse(elems, &self.add, &zero) {
            return Err(RingAxiomError::MissingAdditiveInverse { element });
        }
        if let Some((a, b, c)) = associativity_counterexample(elems, &self.mul) {
            return Err(RingAxiomError::MultiplicationNotAssociative { a, b, c });
        }

        for a in elems {
            for b in elems {
                for c in elems {
                    let left = self.mul(a, &self.add(b, c));
                    if left != self.add(&self.mul(a, b), &self.mul(a, c)) {
                        return Err(RingAxiomError::NotLeftDistributive {
                            a: a.clone(),
                            b: b.clone(),
                            c: c.clone(),
                        });
                    }
                    let right = self.mul(&self.add(a, b), c);
                    if right != self.add(&self.mul(a, c), &self.mul(b, c)) {
                        return Err(RingAxiomError::NotRightDistributive {
                            a: a.clone(),
                            b: b.clone(),
                            c: c.clone(),
                        });
                    }
                }
            }
        }

        Ok(zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z12_is_ring() {
        let ring = ZMod::integers_mod(12).unwrap();
        assert_eq!(ring.order(), 12);
        assert_eq!(ring.modulus(), Some(12));
        assert_eq!(ring.verify(), Ok(0));
        assert!(ring.is_ring());
    }

    #[test]
    fn test_small_moduli_are_rings() {
        for n in 1..=12 {
            let ring = ZMod::integers_mod(n).unwrap();
            assert!(ring.is_ring(), "Z/{}Z should be a ring", n);
        }
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert_eq!(
            ZMod::integers_mod(0).unwrap_err(),
            AlgebraError::InvalidModulus(0)
        );
    }

    #[test]
    fn test_not_closed() {
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1, 2]),
            |a: &u64, b: &u64| a + b,
            |a: &u64, b: &u64| a * b,
        );
        assert_eq!(ring.verify(), Err(RingAxiomError::NotClosed { a: 1, b: 2 }));
    }

    #[test]
    fn test_no_additive_identity() {
        // (max(a, b) + 1) mod 3 fixes no x for any choice of e
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1, 2]),
            |a: &u64, b: &u64| (a.max(b) + 1) % 3,
            |a: &u64, b: &u64| (a * b) % 3,
        );
        assert_eq!(ring.verify(), Err(RingAxiomError::NoAdditiveIdentity));
    }

    #[test]
    fn test_addition_not_commutative() {
        // a + b = a has every element as a right identity but is not commutative
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1]),
            |a: &u64, _b: &u64| *a,
            |a: &u64, b: &u64| a * b,
        );
        let err = ring.verify().unwrap_err();
        assert_eq!(err.axiom(), "additive commutativity");
    }

    #[test]
    fn test_missing_additive_inverse() {
        // max is associative and commutative with identity 0, but 1 has no inverse
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1]),
            |a: &u64, b: &u64| *a.max(b),
            |a: &u64, b: &u64| a * b,
        );
        assert_eq!(
            ring.verify(),
            Err(RingAxiomError::MissingAdditiveInverse { element: 1 })
        );
    }

    #[test]
    fn test_modulus_of_other_carrier() {
        let ring: ZMod = FiniteRing::new(
            BTreeSet::from([0, 1, 2]),
            IntOperation::AddMod(12),
            IntOperation::MulMod(12),
        );
        assert_eq!(ring.modulus(), None);
        let ring: ZMod = FiniteRing::new(
            BTreeSet::from([0, 2, 4, 6]),
            IntOperation::AddMod(4),
            IntOperation::MulMod(4),
        );
        assert_eq!(ring.modulus(), None);
        assert_eq!(ZMod::integers_mod(1).unwrap().modulus(), Some(1));
    }

    #[test]
    fn test_addition_not_associative() {
        // commutative with identity 0, but 1+1 = 1, 2+2 = 2 and 1+2 = 0
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1, 2]),
            |a: &u64, b: &u64| match (*a, *b) {
                (0, x) | (x, 0) => x,
                (x, y) if x == y => x,
                _ => 0,
            },
            IntOperation::MulMod(3),
        );
        let err = ring.verify().unwrap_err();
        assert!(matches!(err, RingAxiomError::AdditionNotAssociative { .. }));
        assert_eq!(err.axiom(), "additive associativity");
    }

    #[test]
    fn test_not_left_distributive() {
        // left projection a ∘ b = a: 1 ∘ (0 + 0) = 1 but 1 ∘ 0 + 1 ∘ 0 = 2
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1, 2]),
            IntOperation::AddMod(3),
            |a: &u64, _b: &u64| *a,
        );
        assert_eq!(
            ring.verify(),
            Err(RingAxiomError::NotLeftDistributive { a: 1, b: 0, c: 0 })
        );
    }

    #[test]
    fn test_multiplication_not_associative() {
        // a ∘ b = (a - b) mod 3 is not associative
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1, 2]),
            IntOperation::AddMod(3),
            |a: &u64, b: &u64| (a + 3 - b) % 3,
        );
        let err = ring.verify().unwrap_err();
        assert_eq!(err.axiom(), "multiplicative associativity");
    }

    #[test]
    fn test_not_distributive() {
        // addition used as multiplication: (0 + 0) + 1 != (0 + 1) + (0 + 1)
        let ring = FiniteRing::new(
            BTreeSet::from([0u64, 1, 2]),
            IntOperation::AddMod(3),
            IntOperation::AddMod(3),
        );
        assert_eq!(
            ring.verify(),
            Err(RingAxiomError::NotRightDistributive { a: 0, b: 0, c: 1 })
        );
    }
}
