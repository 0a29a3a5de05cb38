//! Ideals of a finite ring
//!
//! Ideals are generated by closing a seed set under absorption: every
//! product `x × r` and `r × x` with `x` in the set and `r` in the ring is
//! added until nothing new appears. Since the ring is finite the iteration
//! always reaches a fixed point.

use super::finite::FiniteRing;
use crate::binop::{BinaryOperation, is_closed};
use std::collections::BTreeSet;
use std::fmt::Debug;

impl<T, A, M> FiniteRing<T, A, M>
where
    T: Ord + Clone + Debug,
    A: BinaryOperation<T>,
    M: BinaryOperation<T>,
{
    /// Closes `seed` under left and right multiplication by ring elements
    ///
    /// Running this on a set that is already closed returns it unchanged.
    pub fn close_ideal(&self, seed: &BTreeSet<T>) -> BTreeSet<T> {
        let mut ideal = seed.clone();
        let mut rounds = 0usize;
        loop {
            let mut fresh = BTreeSet::new();
            for x in &ideal {
                for r in self.elements() {
                    for product in [self.mul(x, r), self.mul(r, x)] {
                        if !ideal.contains(&product) {
                            fresh.insert(product);
                        }
                    }
                }
            }
            rounds += 1;
            if fresh.is_empty() {
                log::debug!(
                    "ideal closure reached a fixed point of {} elements after {} rounds",
                    ideal.len(),
                    rounds
                );
                return ideal;
            }
            ideal.extend(fresh);
        }
    }

    /// The ideal generated by a single element
    ///
    /// # Example
    /// ```
    /// use algebra_lab::ring::ZMod;
    /// use std::collections::BTreeSet;
    ///
    /// let z12 = ZMod::integers_mod(12).unwrap();
    /// assert_eq!(z12.generate_ideal(&3), BTreeSet::from([0, 3, 6, 9]));
    /// ```
    pub fn generate_ideal(&self, generator: &T) -> BTreeSet<T> {
        self.close_ideal(&BTreeSet::from([generator.clone()]))
    }

    /// `true` if `candidate ⊆ R` and `a × r`, `r × a` stay in `candidate`
    /// for every member `a` and every ring element `r`
    pub fn is_ideal(&self, candidate: &BTreeSet<T>) -> bool {
        candidate.is_subset(self.elements())
            && candidate.iter().all(|a| {
                self.elements().iter().all(|r| {
                    candidate.contains(&self.mul(a, r)) && candidate.contains(&self.mul(r, a))
                })
            })
    }

    /// `true` if `candidate` contains zero and is closed under addition
    ///
    /// For a finite set this makes it an additive subgroup.
    pub fn is_additive_subgroup(&self, candidate: &BTreeSet<T>) -> bool {
        match self.additive_identity() {
            Some(zero) => {
                candidate.contains(&zero)
                    && is_closed(candidate, &|a: &T, b: &T| self.add(a, b))
            }
            None => false,
        }
    }

    /// Prime-ideal test: `a × b ∈ I` implies `a ∈ I` or `b ∈ I` for all `a, b ∈ R`
    ///
    /// Properness is not required, so the whole ring passes.
    pub fn is_prime_ideal(&self, ideal: &BTreeSet<T>) -> bool {
        self.elements().iter().all(|a| {
            self.elements().iter().all(|b| {
                !ideal.contains(&self.mul(a, b)) || ideal.contains(a) || ideal.contains(b)
            })
        })
    }

    /// Every distinct ideal generated by one element
    ///
    /// Generators are tried in ascending order; each ideal is listed once,
    /// under the first element that generates it.
    pub fn cyclic_ideals(&self) -> Vec<(T, BTreeSet<T>)> {
        let mut found: Vec<(T, BTreeSet<T>)> = Vec::new();
        for g in self.elements() {
            let ideal = self.generate_ideal(g);
            if !found.iter().any(|(_, known)| *known == ideal) {
                found.push((g.clone(), ideal));
            }
        }
        log::debug!("found {} cyclic ideals", found.len());
        found
    }
}

/// Trial-division primality test
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    first_odd_divisor(n, 3).is_none()
}

/// Smallest odd divisor `d` of `n` with `from ≤ d ≤ √n`
fn first_odd_divisor(n: u64, from: u64) -> Option<u64> {
    let mut d = from;
    // d ≤ n / d instead of d * d ≤ n, which overflows past 2³²
    while d <= n / d {
        if n % d == 0 {
            return Some(d);
        }
        d += 2;
    }
    None
}

/// Maximal-ideal heuristic for Z/nZ
///
/// An ideal of size `k` is reported maximal when `k > 1` and `n / k` is
/// prime. This only makes sense for the cyclic rings Z/nZ, where the ideal
/// generated by a divisor `d` has `n / d` elements and is maximal exactly
/// when `d` is prime. The zero ideal is never reported, even in a field.
pub fn is_maximal_in_zn<T>(n: u64, ideal: &BTreeSet<T>) -> bool {
    let size = ideal.len() as u64;
    size > 1 && is_prime(n / size)
}
