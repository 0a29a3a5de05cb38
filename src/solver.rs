//! Small algebra problems over Z/nZ and integer sets
//!
//! A `Problem` is plain data (it can come from the configuration file);
//! `solve` turns it into a `Solution` that the demo prints and the JSON
//! report records.

use crate::binop::{IntOperation, apply_binary_operation};
use crate::error::AlgebraError;
use crate::ring::{ZMod, is_maximal_in_zn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// Is `subset` an ideal of Z/nZ, and is it prime or maximal?
    IdealCheck { modulus: u64, subset: BTreeSet<u64> },
    /// All cyclic ideals of Z/nZ
    ListIdeals { modulus: u64 },
    /// Cosets of the ideal (generator) in Z/nZ
    Quotient { modulus: u64, generator: u64 },
    /// `{ a ∘ b : a ∈ left, b ∈ right }`
    Cartesian {
        left: BTreeSet<u64>,
        right: BTreeSet<u64>,
        operation: IntOperation,
    },
}

/// One cyclic ideal of Z/nZ with its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdealSummary {
    pub generator: u64,
    pub elements: BTreeSet<u64>,
    pub prime: bool,
    pub maximal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    IdealCheck {
        modulus: u64,
        subset: BTreeSet<u64>,
        is_ideal: bool,
        is_additive_subgroup: bool,
        prime: bool,
        maximal: bool,
    },
    ListIdeals {
        modulus: u64,
        ideals: Vec<IdealSummary>,
    },
    Quotient {
        modulus: u64,
        generator: u64,
        ideal: BTreeSet<u64>,
        cosets: Vec<BTreeSet<u64>>,
        order: usize,
    },
    Cartesian {
        operation: String,
        result: BTreeSet<u64>,
    },
}

/// Cyclic ideals of Z/nZ, each marked prime and/or maximal
///
/// `maximal` is only computed when the ring really is Z/nZ for some n.
pub fn classify_ideals(ring: &ZMod) -> Vec<IdealSummary> {
    let n = ring.modulus();
    ring.cyclic_ideals()
        .into_iter()
        .map(|(generator, elements)| IdealSummary {
            generator,
            prime: ring.is_prime_ideal(&elements),
            maximal: n.is_some_and(|n| is_maximal_in_zn(n, &elements)),
            elements,
        })
        .collect()
}

fn check_member(element: u64, modulus: u64) -> Result<(), AlgebraError> {
    if element >= modulus {
        return Err(AlgebraError::ElementOutsideRing { element, modulus });
    }
    Ok(())
}

/// Solves one problem
///
/// # Errors
/// `InvalidModulus` for n = 0, `ElementOutsideRing` when a given element is
/// not in {0, …, n−1}.
pub fn solve(problem: &Problem) -> Result<Solution, AlgebraError> {
    log::debug!("solving {:?}", problem);
    match problem {
        Problem::IdealCheck { modulus, subset } => {
            let ring = ZMod::integers_mod(*modulus)?;
            for &element in subset {
                check_member(element, *modulus)?;
            }
            // absorption alone holds vacuously for the empty set
            let is_ideal = subset.contains(&0) && ring.is_ideal(subset);
            Ok(Solution::IdealCheck {
                modulus: *modulus,
                subset: subset.clone(),
                is_ideal,
                is_additive_subgroup: ring.is_additive_subgroup(subset),
                prime: is_ideal && ring.is_prime_ideal(subset),
                maximal: is_ideal && is_maximal_in_zn(*modulus, subset),
            })
        }
        Problem::ListIdeals { modulus } => {
            let ring = ZMod::integers_mod(*modulus)?;
            Ok(Solution::ListIdeals {
                modulus: *modulus,
                ideals: classify_ideals(&ring),
            })
        }
        Problem::Quotient { modulus, generator } => {
            let ring = ZMod::integers_mod(*modulus)?;
            check_member(*generator, *modulus)?;
            let ideal = ring.generate_ideal(generator);
            Ok(Solution::Quotient {
                modulus: *modulus,
                generator: *generator,
                cosets: ring.cosets(&ideal),
                order: ring.quotient_order(&ideal),
                ideal,
            })
        }
        Problem::Cartesian {
            left,
            right,
            operation,
        } => {
            operation.validate()?;
            Ok(Solution::Cartesian {
                operation: operation.to_string(),
                result: apply_binary_operation(left, right, operation),
            })
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::IdealCheck { modulus, subset } => {
                write!(f, "Is {} an ideal of Z/{}Z?", crate::display::fmt_set(subset), modulus)
            }
            Problem::ListIdeals { modulus } => write!(f, "List the cyclic ideals of Z/{}Z", modulus),
            Problem::Quotient { modulus, generator } => {
                write!(f, "Describe Z/{}Z / ({})", modulus, generator)
            }
            Problem::Cartesian {
                left,
                right,
                operation,
            } => write!(
                f,
                "Apply {} to {} × {}",
                operation,
                crate::display::fmt_set(left),
                crate::display::fmt_set(right)
            ),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::display::fmt_set;
        match self {
            Solution::IdealCheck {
                is_ideal,
                is_additive_subgroup,
                prime,
                maximal,
                ..
            } => write!(
                f,
                "ideal: {}, additive subgroup: {}, prime: {}, maximal: {}",
                yes_no(*is_ideal),
                yes_no(*is_additive_subgroup),
                yes_no(*prime),
                yes_no(*maximal)
            ),
            Solution::ListIdeals { ideals, .. } => {
                for (i, ideal) in ideals.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "({}) = {}", ideal.generator, fmt_set(&ideal.elements))?;
                    if ideal.prime {
                        write!(f, "  prime")?;
                    }
                    if ideal.maximal {
                        write!(f, "  maximal")?;
                    }
                }
                Ok(())
            }
            Solution::Quotient {
                modulus,
                generator,
                cosets,
                order,
                ..
            } => {
                let listed: Vec<String> = cosets.iter().map(fmt_set).collect();
                write!(
                    f,
                    "Z/{}Z / ({}) has {} cosets {} ≅ Z/{}Z",
                    modulus,
                    generator,
                    order,
                    listed.join(" "),
                    order
                )
            }
            Solution::Cartesian { operation, result } => {
                write!(f, "{} → {}", operation, fmt_set(result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_check() {
        let solution = solve(&Problem::IdealCheck {
            modulus: 12,
            subset: BTreeSet::from([0, 4, 8]),
        })
        .unwrap();
        assert_eq!(
            solution,
            Solution::IdealCheck {
                modulus: 12,
                subset: BTreeSet::from([0, 4, 8]),
                is_ideal: true,
                is_additive_subgroup: true,
                prime: false,
                maximal: false,
            }
        );
    }

    #[test]
    fn test_not_an_ideal() {
        let solution = solve(&Problem::IdealCheck {
            modulus: 12,
            subset: BTreeSet::from([0, 3]),
        })
        .unwrap();
        assert!(matches!(
            solution,
            Solution::IdealCheck {
                is_ideal: false,
                prime: false,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_subset_is_not_an_ideal() {
        let solution = solve(&Problem::IdealCheck {
            modulus: 12,
            subset: BTreeSet::new(),
        })
        .unwrap();
        assert_eq!(
            solution,
            Solution::IdealCheck {
                modulus: 12,
                subset: BTreeSet::new(),
                is_ideal: false,
                is_additive_subgroup: false,
                prime: false,
                maximal: false,
            }
        );
    }

    #[test]
    fn test_element_outside_ring() {
        let err = solve(&Problem::IdealCheck {
            modulus: 6,
            subset: BTreeSet::from([0, 7]),
        })
        .unwrap_err();
        assert_eq!(
            err,
            AlgebraError::ElementOutsideRing {
                element: 7,
                modulus: 6
            }
        );
    }

    #[test]
    fn test_zero_modulus() {
        assert_eq!(
            solve(&Problem::ListIdeals { modulus: 0 }),
            Err(AlgebraError::InvalidModulus(0))
        );
        assert_eq!(
            solve(&Problem::Cartesian {
                left: BTreeSet::from([1]),
                right: BTreeSet::from([1]),
                operation: IntOperation::AddMod(0),
            }),
            Err(AlgebraError::InvalidModulus(0))
        );
    }

    #[test]
    fn test_list_ideals_marks_maximal() {
        let Solution::ListIdeals { ideals, .. } = solve(&Problem::ListIdeals { modulus: 12 }).unwrap()
        else {
            panic!("expected ListIdeals");
        };
        let maximal: Vec<u64> = ideals.iter().filter(|i| i.maximal).map(|i| i.generator).collect();
        assert_eq!(maximal, vec![2, 3]);
    }

    #[test]
    fn test_quotient() {
        let solution = solve(&Problem::Quotient {
            modulus: 6,
            generator: 2,
        })
        .unwrap();
        assert_eq!(
            solution.to_string(),
            "Z/6Z / (2) has 2 cosets {0, 2, 4} {1, 3, 5} ≅ Z/2Z"
        );
    }

    #[test]
    fn test_cartesian() {
        let solution = solve(&Problem::Cartesian {
            left: BTreeSet::from([1, 2]),
            right: BTreeSet::from([2, 3]),
            operation: IntOperation::Add,
        })
        .unwrap();
        assert_eq!(solution.to_string(), "a+b → {3, 4, 5}");
    }

    #[test]
    fn test_problem_from_json() {
        let problem: Problem =
            serde_json::from_str(r#"{ "kind": "quotient", "modulus": 8, "generator": 4 }"#).unwrap();
        assert_eq!(
            problem,
            Problem::Quotient {
                modulus: 8,
                generator: 4
            }
        );
    }
}
