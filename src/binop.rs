//! Binary operations over finite sets
//!
//! This module provides the generic Cartesian applicator
//! `{ f(a, b) : a ∈ A, b ∈ B }` together with brute-force property checks
//! (closure, commutativity, associativity, identity, inverses) over a
//! single finite set. The ring verifier and the D4 group checks are built
//! on these.

use crate::error::AlgebraError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A pure binary operation `T × T → T`
///
/// Implemented for every closure `Fn(&T, &T) -> T`, so call sites can pass
/// either a named operation or an ad-hoc lambda.
///
/// # Examples
/// ```
/// use algebra_lab::binop::BinaryOperation;
///
/// let add = |a: &u64, b: &u64| a + b;
/// assert_eq!(add.apply(&2, &3), 5);
/// ```
pub trait BinaryOperation<T> {
    /// Applies the operation to `(a, b)`
    fn apply(&self, a: &T, b: &T) -> T;
}

impl<T, F> BinaryOperation<T> for F
where
    F: Fn(&T, &T) -> T,
{
    fn apply(&self, a: &T, b: &T) -> T {
        self(a, b)
    }
}

/// Applies `op` to every pair of the Cartesian product `A × B`
///
/// Duplicates collapse, so the result has at most `|A|·|B|` elements. If
/// either input is empty the result is empty.
///
/// # Examples
/// ```
/// use algebra_lab::binop::apply_binary_operation;
/// use std::collections::BTreeSet;
///
/// let a = BTreeSet::from([1u64, 2]);
/// let b = BTreeSet::from([2u64, 3]);
/// let sums = apply_binary_operation(&a, &b, &|x: &u64, y: &u64| x + y);
/// assert_eq!(sums, BTreeSet::from([3, 4, 5]));
/// ```
pub fn apply_binary_operation<T, O>(set_a: &BTreeSet<T>, set_b: &BTreeSet<T>, op: &O) -> BTreeSet<T>
where
    T: Ord,
    O: BinaryOperation<T> + ?Sized,
{
    let mut result = BTreeSet::new();
    for a in set_a {
        for b in set_b {
            result.insert(op.apply(a, b));
        }
    }
    result
}

/// Returns `true` if `op(a, b) ∈ set` for all `a, b ∈ set`
pub fn is_closed<T, O>(set: &BTreeSet<T>, op: &O) -> bool
where
    T: Ord,
    O: BinaryOperation<T> + ?Sized,
{
    set.iter()
        .all(|a| set.iter().all(|b| set.contains(&op.apply(a, b))))
}

/// First pair `(a, b)` with `a·b ≠ b·a`, if any
pub fn commutativity_counterexample<T, O>(set: &BTreeSet<T>, op: &O) -> Option<(T, T)>
where
    T: Ord + Clone,
    O: BinaryOperation<T> + ?Sized,
{
    for (i, a) in set.iter().enumerate() {
        for b in set.iter().skip(i + 1) {
            if op.apply(a, b) != op.apply(b, a) {
                return Some((a.clone(), b.clone()));
            }
        }
    }
    None
}

/// Returns `true` if `a·b = b·a` for all `a, b ∈ set`
pub fn is_commutative<T, O>(set: &BTreeSet<T>, op: &O) -> bool
where
    T: Ord + Clone,
    O: BinaryOperation<T> + ?Sized,
{
    commutativity_counterexample(set, op).is_none()
}

/// First triple `(a, b, c)` with `(a·b)·c ≠ a·(b·c)`, if any
///
/// # Complexity
/// O(|S|³) applications of each side.
pub fn associativity_counterexample<T, O>(set: &BTreeSet<T>, op: &O) -> Option<(T, T, T)>
where
    T: Ord + Clone,
    O: BinaryOperation<T> + ?Sized,
{
    for a in set {
        for b in set {
            let ab = op.apply(a, b);
            for c in set {
                if op.apply(&ab, c) != op.apply(a, &op.apply(b, c)) {
                    return Some((a.clone(), b.clone(), c.clone()));
                }
            }
        }
    }
    None
}

/// Returns `true` if `(a·b)·c = a·(b·c)` for all `a, b, c ∈ set`
pub fn is_associative<T, O>(set: &BTreeSet<T>, op: &O) -> bool
where
    T: Ord + Clone,
    O: BinaryOperation<T> + ?Sized,
{
    associativity_counterexample(set, op).is_none()
}

/// The two-sided identity `e` with `e·x = x·e = x` for every `x`, if one exists
///
/// The smallest such element is returned (there is at most one anyway).
pub fn identity_element<T, O>(set: &BTreeSet<T>, op: &O) -> Option<T>
where
    T: Ord + Clone,
    O: BinaryOperation<T> + ?Sized,
{
    set.iter()
        .find(|e| set.iter().all(|x| op.apply(x, e) == *x && op.apply(e, x) == *x))
        .cloned()
}

/// First element without an inverse relative to `identity`, if any
pub fn element_without_inverse<T, O>(set: &BTreeSet<T>, op: &O, identity: &T) -> Option<T>
where
    T: Ord + Clone,
    O: BinaryOperation<T> + ?Sized,
{
    set.iter()
        .find(|x| {
            !set.iter()
                .any(|y| op.apply(x, y) == *identity && op.apply(y, x) == *identity)
        })
        .cloned()
}

/// Returns `true` if every element has a two-sided inverse relative to `identity`
pub fn has_inverses<T, O>(set: &BTreeSet<T>, op: &O, identity: &T) -> bool
where
    T: Ord + Clone,
    O: BinaryOperation<T> + ?Sized,
{
    element_without_inverse(set, op, identity).is_none()
}

/// Cayley table of `op` over `set`: row `i`, column `j` holds `s_i · s_j`
/// with the elements in sorted order
pub fn operation_table<T, O>(set: &BTreeSet<T>, op: &O) -> Vec<Vec<T>>
where
    T: Ord,
    O: BinaryOperation<T> + ?Sized,
{
    set.iter()
        .map(|a| set.iter().map(|b| op.apply(a, b)).collect())
        .collect()
}

/// Named integer operations used by the demonstrations and the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntOperation {
    /// `a * b + 1`
    MulPlusOne,
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `(a + b) mod m`
    AddMod(u64),
    /// `(a * b) mod m`
    MulMod(u64),
    /// bitwise `a AND b`
    BitAnd,
}

impl IntOperation {
    /// Every operation the random example generator may pick from
    pub fn catalogue() -> [IntOperation; 5] {
        [
            IntOperation::MulPlusOne,
            IntOperation::Add,
            IntOperation::Mul,
            IntOperation::AddMod(5),
            IntOperation::BitAnd,
        ]
    }

    /// Rejects the modular operations with modulus 0
    ///
    /// Values parsed with `FromStr` are always valid; deserialized ones are not.
    pub fn validate(self) -> Result<Self, AlgebraError> {
        match self {
            IntOperation::AddMod(0) | IntOperation::MulMod(0) => Err(AlgebraError::InvalidModulus(0)),
            op => Ok(op),
        }
    }
}

impl BinaryOperation<u64> for IntOperation {
    fn apply(&self, a: &u64, b: &u64) -> u64 {
        match *self {
            IntOperation::MulPlusOne => a.wrapping_mul(*b).wrapping_add(1),
            IntOperation::Add => a.wrapping_add(*b),
            IntOperation::Mul => a.wrapping_mul(*b),
            IntOperation::AddMod(m) => (a % m + b % m) % m,
            IntOperation::MulMod(m) => ((a % m) as u128 * (b % m) as u128 % m as u128) as u64,
            IntOperation::BitAnd => a & b,
        }
    }
}

impl fmt::Display for IntOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntOperation::MulPlusOne => write!(f, "a*b+1"),
            IntOperation::Add => write!(f, "a+b"),
            IntOperation::Mul => write!(f, "a*b"),
            IntOperation::AddMod(m) => write!(f, "(a+b) mod {}", m),
            IntOperation::MulMod(m) => write!(f, "(a*b) mod {}", m),
            IntOperation::BitAnd => write!(f, "a AND b"),
        }
    }
}

impl FromStr for IntOperation {
    type Err = AlgebraError;

    /// Parses the same notation `Display` produces (whitespace-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let lower = compact.to_ascii_lowercase();
        match lower.as_str() {
            "a*b+1" => return Ok(IntOperation::MulPlusOne),
            "a+b" => return Ok(IntOperation::Add),
            "a*b" => return Ok(IntOperation::Mul),
            "aandb" | "a&b" => return Ok(IntOperation::BitAnd),
            _ => {}
        }

        let parse_modulus = |rest: &str| -> Result<u64, AlgebraError> {
            match rest.parse::<u64>() {
                Ok(0) => Err(AlgebraError::InvalidModulus(0)),
                Ok(m) => Ok(m),
                Err(_) => Err(AlgebraError::UnknownOperation(s.to_string())),
            }
        };
        if let Some(rest) = lower.strip_prefix("(a+b)mod") {
            return Ok(IntOperation::AddMod(parse_modulus(rest)?));
        }
        if let Some(rest) = lower.strip_prefix("(a*b)mod") {
            return Ok(IntOperation::MulMod(parse_modulus(rest)?));
        }
        Err(AlgebraError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u64]) -> BTreeSet<u64> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_sum_of_two_sets() {
        let result = apply_binary_operation(&set(&[1, 2]), &set(&[2, 3]), &IntOperation::Add);
        assert_eq!(result, set(&[3, 4, 5]));
    }

    #[test]
    fn test_set_with_itself() {
        let a = set(&[1, 2]);
        let result = apply_binary_operation(&a, &a, &IntOperation::Add);
        assert_eq!(result, set(&[2, 3, 4]));
    }

    #[test]
    fn test_empty_input_gives_empty_result() {
        let empty = BTreeSet::new();
        let a = set(&[1, 2, 3]);
        assert!(apply_binary_operation(&empty, &a, &IntOperation::Mul).is_empty());
        assert!(apply_binary_operation(&a, &empty, &IntOperation::Mul).is_empty());
    }

    #[test]
    fn test_mul_plus_one() {
        // A = {1..5}, B = {3..7}
        let a = set(&[1, 2, 3, 4, 5]);
        let b = set(&[3, 4, 5, 6, 7]);
        let result = apply_binary_operation(&a, &b, &IntOperation::MulPlusOne);
        assert!(result.contains(&4)); // 1*3+1
        assert!(result.contains(&36)); // 5*7+1
        assert!(result.len() <= a.len() * b.len());
    }

    #[test]
    fn test_extended_operations() {
        let x = set(&[1, 2, 3]);
        let y = set(&[2, 3, 4]);
        assert_eq!(
            apply_binary_operation(&x, &y, &IntOperation::AddMod(5)),
            set(&[0, 1, 2, 3, 4])
        );
        assert_eq!(
            apply_binary_operation(&x, &y, &IntOperation::BitAnd),
            set(&[0, 1, 2, 3])
        );
    }

    #[test]
    fn test_closure_commutativity_associativity() {
        let z5 = set(&[0, 1, 2, 3, 4]);
        let add5 = IntOperation::AddMod(5);
        assert!(is_closed(&z5, &add5));
        assert!(is_commutative(&z5, &add5));
        assert!(is_associative(&z5, &add5));
        assert_eq!(identity_element(&z5, &add5), Some(0));
        assert!(has_inverses(&z5, &add5, &0));

        let sub = |a: &u64, b: &u64| a.saturating_sub(*b);
        assert!(!is_commutative(&z5, &sub));
        assert!(associativity_counterexample(&z5, &sub).is_some());
    }

    #[test]
    fn test_not_closed() {
        let s = set(&[1, 2, 3]);
        assert!(!is_closed(&s, &IntOperation::Add));
    }

    #[test]
    fn test_multiplicative_inverses_mod_6() {
        let z6 = set(&[0, 1, 2, 3, 4, 5]);
        let mul6 = IntOperation::MulMod(6);
        assert_eq!(identity_element(&z6, &mul6), Some(1));
        assert_eq!(element_without_inverse(&z6, &mul6, &1), Some(0));
    }

    #[test]
    fn test_operation_table() {
        let z3 = set(&[0, 1, 2]);
        let table = operation_table(&z3, &IntOperation::AddMod(3));
        assert_eq!(table, vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
    }

    #[test]
    fn test_validate_rejects_zero_modulus() {
        assert_eq!(IntOperation::AddMod(0).validate(), Err(AlgebraError::InvalidModulus(0)));
        assert_eq!(IntOperation::MulMod(0).validate(), Err(AlgebraError::InvalidModulus(0)));
        assert_eq!(IntOperation::MulMod(7).validate(), Ok(IntOperation::MulMod(7)));
        assert_eq!(IntOperation::BitAnd.validate(), Ok(IntOperation::BitAnd));
    }

    #[test]
    fn test_parse_operations() {
        assert_eq!("a*b+1".parse::<IntOperation>(), Ok(IntOperation::MulPlusOne));
        assert_eq!("(a + b) mod 5".parse::<IntOperation>(), Ok(IntOperation::AddMod(5)));
        assert_eq!("a AND b".parse::<IntOperation>(), Ok(IntOperation::BitAnd));
        assert_eq!(
            "(a+b) mod 0".parse::<IntOperation>(),
            Err(AlgebraError::InvalidModulus(0))
        );
        assert!(matches!(
            "a^b".parse::<IntOperation>(),
            Err(AlgebraError::UnknownOperation(_))
        ));
        for op in IntOperation::catalogue() {
            assert_eq!(op.to_string().parse::<IntOperation>(), Ok(op));
        }
    }
}
