//! Demonstration runner
//!
//! `DemoRunner` runs the selected sections in order, writes their text to
//! any `io::Write`, and collects a serializable `Report` with the outcome
//! of every self-check along the way.

mod sections;

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::random_examples::{RandomExample, resolve_seed, rng_from_seed};
use crate::solver::{IdealSummary, Solution};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// The demonstration sections, in their canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    SetOperations,
    RingsAndIdeals,
    ComplexRotations,
    PolarConjugate,
    Hyperbolic,
    Dihedral,
    Quotients,
    Applications,
    RandomExamples,
    Solver,
}

impl Section {
    pub fn all() -> [Section; 10] {
        use Section::*;
        [
            SetOperations,
            RingsAndIdeals,
            ComplexRotations,
            PolarConjugate,
            Hyperbolic,
            Dihedral,
            Quotients,
            Applications,
            RandomExamples,
            Solver,
        ]
    }

    /// 1-based position in the canonical order
    pub fn number(self) -> usize {
        Self::all()
            .iter()
            .position(|s| *s == self)
            .map_or(0, |i| i + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::SetOperations => "OPERATIONS ON SETS",
            Section::RingsAndIdeals => "RINGS AND CYCLIC IDEALS",
            Section::ComplexRotations => "COMPLEX REPRESENTATION OF ROTATIONS",
            Section::PolarConjugate => "POLAR FORMULA FOR THE CONJUGATE",
            Section::Hyperbolic => "CONNECTION WITH HYPERBOLIC FUNCTIONS",
            Section::Dihedral => "SYMMETRY GROUP OF THE SQUARE",
            Section::Quotients => "QUOTIENT RINGS AND HOMOMORPHISMS",
            Section::Applications => "PRACTICAL APPLICATIONS",
            Section::RandomExamples => "RANDOM EXAMPLE GENERATOR",
            Section::Solver => "ALGEBRA PROBLEM SOLVER",
        }
    }
}

/// Outcome of one self-check printed by a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub section: Section,
    pub name: String,
    pub passed: bool,
}

/// Ring verification result for one modulus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingReport {
    pub modulus: u64,
    pub is_ring: bool,
    pub failed_axiom: Option<String>,
    pub ideals: Vec<IdealSummary>,
}

/// Everything a run computed, in serializable form
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub seed: u64,
    pub sections: Vec<Section>,
    pub rings: Vec<RingReport>,
    pub checks: Vec<CheckOutcome>,
    pub solutions: Vec<Solution>,
    pub random_example: Option<RandomExample>,
}

impl Report {
    /// `true` if every recorded self-check passed
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub fn to_json(&self) -> Result<String, DemoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct DemoRunner {
    config: DemoConfig,
    rng: StdRng,
    report: Report,
}

impl DemoRunner {
    /// Validates the configuration and seeds the random generator
    pub fn new(config: DemoConfig) -> Result<Self, DemoError> {
        config.validate()?;
        let seed = resolve_seed(config.seed);
        let report = Report {
            generated_at: chrono::Local::now().to_rfc3339(),
            seed,
            sections: config.sections.clone(),
            rings: Vec::new(),
            checks: Vec::new(),
            solutions: Vec::new(),
            random_example: None,
        };
        Ok(Self {
            rng: rng_from_seed(seed),
            config,
            report,
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Writes every selected section to `out` and returns the report
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<Report, DemoError> {
        writeln!(out, "Exploring algebraic structures")?;
        writeln!(out, "==============================")?;

        let sections = self.config.sections.clone();
        for section in sections {
            log::info!("running section {}: {}", section.number(), section.title());
            writeln!(out)?;
            writeln!(out, "{}", crate::display::banner(section.number(), section.title()))?;
            match section {
                Section::SetOperations => self.set_operations(out)?,
                Section::RingsAndIdeals => self.rings_and_ideals(out)?,
                Section::ComplexRotations => self.complex_rotations(out)?,
                Section::PolarConjugate => self.polar_conjugate(out)?,
                Section::Hyperbolic => self.hyperbolic(out)?,
                Section::Dihedral => self.dihedral(out)?,
                Section::Quotients => self.quotients(out)?,
                Section::Applications => self.applications(out)?,
                Section::RandomExamples => self.random_examples(out)?,
                Section::Solver => self.solver(out)?,
            }
        }

        let failed = self.report.failed_checks().count();
        writeln!(out)?;
        if failed == 0 {
            writeln!(out, "All {} checks passed ✓", self.report.checks.len())?;
        } else {
            log::warn!("{} of {} checks failed", failed, self.report.checks.len());
            writeln!(
                out,
                "{} of {} checks FAILED ✗",
                failed,
                self.report.checks.len()
            )?;
        }
        Ok(self.report)
    }

    /// Records a check and returns the mark to print next to it
    fn check(&mut self, section: Section, name: impl Into<String>, passed: bool) -> &'static str {
        let name = name.into();
        if !passed {
            log::warn!("check failed: {}", name);
        }
        self.report.checks.push(CheckOutcome {
            section,
            name,
            passed,
        });
        mark(passed)
    }
}

fn mark(passed: bool) -> &'static str {
    if passed { "✓" } else { "✗" }
}
