//! Demonstration parameters
//!
//! `DemoConfig` carries every value the demonstrations used to hard-code.
//! It can be read from a JSON file; missing fields fall back to the
//! defaults, and command-line flags override individual fields afterwards.

use crate::binop::IntOperation;
use crate::demo::Section;
use crate::error::DemoError;
use crate::solver::Problem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Ring verification is O(n³); larger moduli work but are slow
pub const LARGE_MODULUS: u64 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Moduli n whose rings Z/nZ are verified and searched for ideals
    pub moduli: Vec<u64>,
    /// Left operand set of the Cartesian demo
    pub set_a: BTreeSet<u64>,
    /// Right operand set of the Cartesian demo
    pub set_b: BTreeSet<u64>,
    /// Operation applied to `set_a × set_b`
    pub operation: IntOperation,
    /// Seed for the random example generator; `None` draws a fresh one
    pub seed: Option<u64>,
    /// Angle of the square rotation demo
    pub rotation_degrees: f64,
    /// Parameter t of the hyperbolic rotation
    pub hyperbolic_t: f64,
    /// Parameter s of the point (ch s, sh s) being rotated
    pub hyperbola_point: f64,
    /// Sections to run, in order
    pub sections: Vec<Section>,
    /// Problems handed to the solver section
    pub problems: Vec<Problem>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            moduli: vec![12, 8],
            set_a: BTreeSet::from([1, 2, 3, 4, 5]),
            set_b: BTreeSet::from([3, 4, 5, 6, 7]),
            operation: IntOperation::MulPlusOne,
            seed: None,
            rotation_degrees: 90.0,
            hyperbolic_t: 0.3,
            hyperbola_point: 0.2,
            sections: Section::all().to_vec(),
            problems: default_problems(),
        }
    }
}

fn default_problems() -> Vec<Problem> {
    vec![
        Problem::IdealCheck {
            modulus: 12,
            subset: BTreeSet::from([0, 4, 8]),
        },
        Problem::IdealCheck {
            modulus: 12,
            subset: BTreeSet::from([0, 3]),
        },
        Problem::ListIdeals { modulus: 12 },
        Problem::Quotient {
            modulus: 6,
            generator: 2,
        },
        Problem::Cartesian {
            left: BTreeSet::from([1, 2]),
            right: BTreeSet::from([2, 3]),
            operation: IntOperation::Add,
        },
    ]
}

impl DemoConfig {
    /// Reads a JSON configuration file
    ///
    /// # Errors
    /// I/O errors, malformed JSON, or a configuration rejected by `validate`.
    pub fn from_file(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path)?;
        let config: DemoConfig = serde_json::from_str(&content)?;
        log::info!("loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the demonstrations cannot run with
    pub fn validate(&self) -> Result<(), DemoError> {
        if self.sections.is_empty() {
            return Err(DemoError::Config("no sections selected".to_string()));
        }
        if self.moduli.is_empty() {
            return Err(DemoError::Config("at least one modulus is required".to_string()));
        }
        if let Some(&n) = self.moduli.iter().find(|&&n| n == 0) {
            return Err(DemoError::Config(format!("modulus must be at least 1, got {}", n)));
        }
        for &n in &self.moduli {
            if n > LARGE_MODULUS {
                log::warn!("modulus {} is large; the O(n³) ring check will be slow", n);
            }
        }
        self.operation
            .validate()
            .map_err(|e| DemoError::Config(format!("operation {}: {}", self.operation, e)))?;
        for problem in &self.problems {
            if let Problem::Cartesian { operation, .. } = problem {
                operation
                    .validate()
                    .map_err(|e| DemoError::Config(format!("problem \"{}\": {}", problem, e)))?;
            }
        }
        for value in [self.rotation_degrees, self.hyperbolic_t, self.hyperbola_point] {
            if !value.is_finite() {
                return Err(DemoError::Config(format!("{} is not a finite number", value)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.moduli, vec![12, 8]);
        assert_eq!(config.sections.len(), 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{ "moduli": [6], "seed": 7, "sections": ["rings-and-ideals"] }"#)
                .unwrap();
        assert_eq!(config.moduli, vec![6]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sections, vec![Section::RingsAndIdeals]);
        assert_eq!(config.set_a, DemoConfig::default().set_a);
    }

    #[test]
    fn test_rejects_zero_modulus() {
        let config = DemoConfig {
            moduli: vec![12, 0],
            ..DemoConfig::default()
        };
        assert!(matches!(config.validate(), Err(DemoError::Config(_))));
    }

    #[test]
    fn test_rejects_operation_mod_zero() {
        let config: DemoConfig = serde_json::from_str(
            r#"{ "operation": { "add_mod": 0 }, "sections": ["set-operations"] }"#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(DemoError::Config(_))));

        let config = DemoConfig {
            operation: IntOperation::MulMod(0),
            ..DemoConfig::default()
        };
        assert!(matches!(config.validate(), Err(DemoError::Config(_))));
    }

    #[test]
    fn test_rejects_cartesian_problem_mod_zero() {
        let config = DemoConfig {
            problems: vec![Problem::Cartesian {
                left: BTreeSet::from([1]),
                right: BTreeSet::from([2]),
                operation: IntOperation::AddMod(0),
            }],
            ..DemoConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("(a+b) mod 0"));
    }

    #[test]
    fn test_rejects_empty_sections() {
        let config = DemoConfig {
            sections: Vec::new(),
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let config = DemoConfig {
            hyperbolic_t: f64::NAN,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = DemoConfig {
            seed: Some(42),
            ..DemoConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: DemoConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
