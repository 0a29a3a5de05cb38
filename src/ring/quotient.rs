//! Additive cosets r + I, the elements of the quotient ring R / I

use super::finite::FiniteRing;
use crate::binop::BinaryOperation;
use std::collections::BTreeSet;
use std::fmt::Debug;

impl<T, A, M> FiniteRing<T, A, M>
where
    T: Ord + Clone + Debug,
    A: BinaryOperation<T>,
    M: BinaryOperation<T>,
{
    /// The coset `r + I`
    pub fn coset(&self, r: &T, ideal: &BTreeSet<T>) -> BTreeSet<T> {
        ideal.iter().map(|i| self.add(r, i)).collect()
    }

    /// All distinct cosets of `ideal`, ordered by their least element
    pub fn cosets(&self, ideal: &BTreeSet<T>) -> Vec<BTreeSet<T>> {
        let distinct: BTreeSet<BTreeSet<T>> = self
            .elements()
            .iter()
            .map(|r| self.coset(r, ideal))
            .collect();
        distinct.into_iter().collect()
    }

    /// `|R / I| = |R| / |I|`, or 0 for an empty ideal
    pub fn quotient_order(&self, ideal: &BTreeSet<T>) -> usize {
        if ideal.is_empty() {
            return 0;
        }
        self.order() / ideal.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::ring::ZMod;
    use std::collections::BTreeSet;

    #[test]
    fn test_z6_mod_two() {
        // Z/6Z / (2) ≅ Z/2Z
        let z6 = ZMod::integers_mod(6).unwrap();
        let ideal = z6.generate_ideal(&2);
        let cosets = z6.cosets(&ideal);
        assert_eq!(z6.quotient_order(&ideal), 2);
        assert_eq!(
            cosets,
            vec![BTreeSet::from([0, 2, 4]), BTreeSet::from([1, 3, 5])]
        );
    }

    #[test]
    fn test_cosets_partition_ring() {
        let z12 = ZMod::integers_mod(12).unwrap();
        let ideal = z12.generate_ideal(&4);
        let cosets = z12.cosets(&ideal);
        assert_eq!(cosets.len(), z12.quotient_order(&ideal));
        let union: BTreeSet<u64> = cosets.iter().flatten().copied().collect();
        assert_eq!(&union, z12.elements());
        assert_eq!(cosets.iter().map(BTreeSet::len).sum::<usize>(), 12);
    }

    #[test]
    fn test_empty_ideal() {
        let z4 = ZMod::integers_mod(4).unwrap();
        assert_eq!(z4.quotient_order(&BTreeSet::new()), 0);
    }
}
