//! Bodies of the ten demonstration sections

use super::{DemoRunner, RingReport, Section, mark};
use crate::binop::{
    BinaryOperation, IntOperation, apply_binary_operation, commutativity_counterexample,
    has_inverses, identity_element, is_associative, is_closed, operation_table,
};
use crate::complex::{
    FmtComplex, HOMOMORPHISM_ANGLES, approx_eq, polar_swap_conjugate, quarter_turn, rotate_shape,
    rotation_degrees, rotations_compose, squares_difference, unit_square,
};
use crate::dihedral::Symmetry;
use crate::display::{fmt_matrix, fmt_set, fmt_table};
use crate::error::DemoError;
use crate::hyperbolic::{
    apply, circular_relations, compose, hyperbola_point, hyperbolic_identity, hyperbolic_norm,
    hyperbolic_rotation, on_unit_hyperbola,
};
use crate::random_examples;
use crate::ring::{FiniteRing, ZMod};
use crate::solver::{Problem, Solution, classify_ideals, solve};
use num_complex::Complex64;
use std::collections::BTreeSet;
use std::io::Write;

/// Parameter of the worked ch/sh example
const EXAMPLE_T: f64 = 0.5;

fn print_points<W: Write>(out: &mut W, points: &[Complex64]) -> Result<(), DemoError> {
    let listed: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, z)| format!("z{} = {}", i + 1, FmtComplex(*z)))
        .collect();
    writeln!(out, "{}", listed.join("  "))?;
    Ok(())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl DemoRunner {
    pub(super) fn set_operations<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::SetOperations;
        let a = self.config.set_a.clone();
        let b = self.config.set_b.clone();
        let op = self.config.operation;

        writeln!(out, "Set A: {}", fmt_set(&a))?;
        writeln!(out, "Set B: {}", fmt_set(&b))?;
        let result = apply_binary_operation(&a, &b, &op);
        writeln!(out, "A ⊗ B ({}): {}", op, fmt_set(&result))?;
        let m = self.check(
            section,
            "|A ⊗ B| ≤ |A|·|B|",
            result.len() <= a.len() * b.len(),
        );
        writeln!(out, "  {} pairs give {} distinct results {}", a.len() * b.len(), result.len(), m)?;

        let x = BTreeSet::from([1u64, 2, 3]);
        let y = BTreeSet::from([2u64, 3, 4]);
        writeln!(out, "\nExtended operations on X = {}, Y = {}:", fmt_set(&x), fmt_set(&y))?;
        for op in [IntOperation::AddMod(5), IntOperation::BitAnd] {
            writeln!(out, "  {}: {}", op, fmt_set(&apply_binary_operation(&x, &y, &op)))?;
        }

        let z5: BTreeSet<u64> = (0..5).collect();
        let add5 = IntOperation::AddMod(5);
        let closed = is_closed(&z5, &add5);
        let associative = is_associative(&z5, &add5);
        let identity = identity_element(&z5, &add5);
        let inverses = identity
            .map(|e| has_inverses(&z5, &add5, &e))
            .unwrap_or(false);
        writeln!(out, "\nProperties of {} on {}:", add5, fmt_set(&z5))?;
        writeln!(out, "  closed: {}  associative: {}", mark(closed), mark(associative))?;
        match identity {
            Some(e) => writeln!(out, "  identity: {}  inverses: {}", e, mark(inverses))?,
            None => writeln!(out, "  identity: none")?,
        }
        let m = self.check(
            section,
            "(a+b) mod 5 makes Z/5Z a group",
            closed && associative && inverses,
        );
        writeln!(out, "  group: {}", m)?;
        Ok(())
    }

    pub(super) fn rings_and_ideals<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::RingsAndIdeals;
        for n in self.config.moduli.clone() {
            let ring = ZMod::integers_mod(n)?;
            writeln!(out, "\nRing Z/{}Z:", n)?;
            writeln!(out, "Elements: {}", fmt_set(ring.elements()))?;

            let verdict = ring.verify();
            let is_ring = verdict.is_ok();
            let m = self.check(section, format!("Z/{}Z satisfies the ring axioms", n), is_ring);
            match &verdict {
                Ok(zero) => writeln!(out, "Ring axioms: {} all satisfied (additive identity {})", m, zero)?,
                Err(e) => writeln!(out, "Ring axioms: {} {}", m, e)?,
            }

            let ideals = classify_ideals(&ring);
            writeln!(out, "Cyclic ideals:")?;
            for ideal in &ideals {
                let mut tags = Vec::new();
                if ideal.prime {
                    tags.push("prime");
                }
                if ideal.maximal {
                    tags.push("maximal");
                }
                writeln!(
                    out,
                    "  ({}) = {}{}{}",
                    ideal.generator,
                    fmt_set(&ideal.elements),
                    if tags.is_empty() { "" } else { "  " },
                    tags.join(", ")
                )?;
            }

            let absorbing = ideals.iter().all(|i| ring.is_ideal(&i.elements));
            let m = self.check(section, format!("cyclic ideals of Z/{}Z absorb multiplication", n), absorbing);
            writeln!(out, "Every listed set is an ideal: {}", m)?;
            let stable = ideals
                .iter()
                .all(|i| ring.close_ideal(&i.elements) == i.elements);
            let m = self.check(section, format!("ideal closure in Z/{}Z is idempotent", n), stable);
            writeln!(out, "Closing an ideal again changes nothing: {}", m)?;

            self.report.rings.push(RingReport {
                modulus: n,
                is_ring,
                failed_axiom: verdict.err().map(|e| e.axiom().to_string()),
                ideals,
            });
        }

        // a structure the verifier has to reject
        let subtraction = FiniteRing::new(
            (0..4u64).collect(),
            IntOperation::AddMod(4),
            |a: &u64, b: &u64| (a + 4 - b) % 4,
        );
        let rejected = subtraction.verify();
        let m = self.check(section, "Z/4Z with a∘b = a − b is rejected", rejected.is_err());
        writeln!(out, "\nCounterexample: Z/4Z with a∘b = a − b as multiplication")?;
        match rejected {
            Ok(_) => writeln!(out, "  accepted as a ring {}", m)?,
            Err(e) => writeln!(out, "  not a ring: {} {}", e, m)?,
        }
        Ok(())
    }

    pub(super) fn complex_rotations<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::ComplexRotations;
        let square = unit_square();
        writeln!(out, "Square as complex numbers:")?;
        print_points(out, &square)?;

        let degrees = self.config.rotation_degrees;
        let rotation = rotation_degrees(degrees);
        writeln!(out, "\nRotation by {}° = multiplication by {}", degrees, FmtComplex(rotation))?;
        let rotated = rotate_shape(&square, rotation);
        writeln!(out, "After the rotation:")?;
        print_points(out, &rotated)?;

        let lengths_kept = square
            .iter()
            .zip(&rotated)
            .all(|(before, after)| (before.norm() - after.norm()).abs() < 1e-10);
        let m = self.check(section, "rotation preserves |z|", lengths_kept);
        writeln!(out, "Distances to the origin unchanged: {}", m)?;

        let one_turned = rotate_shape(&[Complex64::new(1.0, 0.0)], quarter_turn());
        let m = self.check(
            section,
            "1 rotated by 90° is i",
            approx_eq(one_turned[0], Complex64::i()),
        );
        writeln!(out, "1 · i = {} {}", FmtComplex(one_turned[0]), m)?;

        let (alpha, beta) = HOMOMORPHISM_ANGLES;
        writeln!(out, "\nHomomorphism of rotations:")?;
        writeln!(
            out,
            "R{} · R{} = {}",
            alpha,
            beta,
            FmtComplex(rotation_degrees(alpha) * rotation_degrees(beta))
        )?;
        writeln!(out, "R{} = {}", alpha + beta, FmtComplex(rotation_degrees(alpha + beta)))?;
        let m = self.check(
            section,
            format!("R{} · R{} = R{}", alpha, beta, alpha + beta),
            rotations_compose(alpha, beta),
        );
        writeln!(out, "Composition matches: {}", m)?;
        Ok(())
    }

    pub(super) fn polar_conjugate<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::PolarConjugate;
        let z = Complex64::new(3.0, 4.0);
        writeln!(out, "Number: z = {}", FmtComplex(z))?;
        let standard = z.conj();
        writeln!(out, "Standard conjugate: z̄ = {}", FmtComplex(standard))?;
        let formula = polar_swap_conjugate(z);
        writeln!(out, "Formula (r·sin θ, −r·cos θ): {}", FmtComplex(formula))?;
        let agree = approx_eq(standard, formula);
        writeln!(
            out,
            "Results agree: {}{}",
            if agree { "yes" } else { "no" },
            if agree { "" } else { " (the formula computes −i·z)" }
        )?;

        let theta = z.arg();
        let (diff, expected) = squares_difference(z);
        writeln!(
            out,
            "\nDifference of squares: sin²θ − cos²θ = {:.3} − {:.3} = {:.3}",
            theta.sin().powi(2),
            theta.cos().powi(2),
            diff
        )?;
        let m = self.check(
            section,
            "sin²θ − cos²θ = −cos 2θ",
            (diff - expected).abs() < 1e-10,
        );
        writeln!(out, "This equals −cos(2θ) = {:.3} {}", expected, m)?;
        Ok(())
    }

    pub(super) fn hyperbolic<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::Hyperbolic;
        writeln!(out, "Euler-style formulas for the hyperbolic functions:")?;
        writeln!(out, "ch(t) = (eᵗ + e⁻ᵗ)/2")?;
        writeln!(out, "sh(t) = (eᵗ − e⁻ᵗ)/2")?;
        writeln!(out, "ch²(t) − sh²(t) = 1  ← the equation of a hyperbola")?;

        let t = EXAMPLE_T;
        let (ch, sh) = (t.cosh(), t.sinh());
        writeln!(out, "\nExample for t = {:.2}:", t)?;
        writeln!(out, "ch({:.2}) = {:.3}", t, ch)?;
        writeln!(out, "sh({:.2}) = {:.3}", t, sh)?;
        let m = self.check(
            section,
            "ch² − sh² = 1",
            (hyperbolic_identity(t) - 1.0).abs() < 1e-10,
        );
        writeln!(
            out,
            "ch² − sh² = {:.3} − {:.3} = {:.3} {}",
            ch * ch,
            sh * sh,
            hyperbolic_identity(t),
            m
        )?;

        writeln!(out, "\nRelation with the circular functions:")?;
        for relation in circular_relations(t) {
            let m = self.check(section, relation.label, relation.holds());
            writeln!(out, "  {:<20} {}", relation.label, m)?;
        }

        let rt = self.config.hyperbolic_t;
        let matrix = hyperbolic_rotation(rt);
        writeln!(out, "\nHyperbolic rotation by t = {:.2}:", rt)?;
        writeln!(out, "{}", fmt_matrix(["[ch(t)  sh(t)]", "[sh(t)  ch(t)]"], &matrix))?;

        let s = self.config.hyperbola_point;
        let point = hyperbola_point(s);
        let moved = apply(&matrix, point);
        writeln!(
            out,
            "\nPoint on the hyperbola: (ch({:.2}), sh({:.2})) = ({:.3}, {:.3})",
            s, s, point[0], point[1]
        )?;
        writeln!(out, "After the hyperbolic rotation: ({:.3}, {:.3})", moved[0], moved[1])?;
        let m = self.check(
            section,
            "hyperbolic rotation keeps x² − y² = 1",
            on_unit_hyperbola(moved),
        );
        writeln!(
            out,
            "x² − y² = {:.3} − {:.3} = {:.3} {}",
            moved[0] * moved[0],
            moved[1] * moved[1],
            hyperbolic_norm(moved),
            m
        )?;

        let combined = compose(&matrix, &hyperbolic_rotation(s));
        let adds = combined
            .iter()
            .flatten()
            .zip(hyperbolic_rotation(rt + s).iter().flatten())
            .all(|(x, y)| (x - y).abs() < 1e-10);
        let m = self.check(section, "H(t)·H(s) = H(t + s)", adds);
        writeln!(out, "H({:.2})·H({:.2}) = H({:.2}): {}", rt, s, rt + s, m)?;
        Ok(())
    }

    pub(super) fn dihedral<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::Dihedral;
        let elements = Symmetry::all();
        let group = Symmetry::group();
        let names: Vec<String> = elements.iter().map(Symmetry::to_string).collect();
        writeln!(out, "D4 = {{{}}}", names.join(", "))?;
        writeln!(out, "Order of the group: {}", group.len())?;

        let op = |a: &Symmetry, b: &Symmetry| a.compose(*b);
        writeln!(out, "\nCayley table (row ∘ column):")?;
        writeln!(out, "{}", fmt_table("∘", &elements, &operation_table(&group, &op)))?;

        let closed = is_closed(&group, &op);
        let associative = is_associative(&group, &op);
        let identity = identity_element(&group, &op);
        let inverses = has_inverses(&group, &op, &Symmetry::R0);
        let is_group = closed && associative && identity == Some(Symmetry::R0) && inverses;
        let m = self.check(section, "D4 satisfies the group axioms", is_group);
        writeln!(
            out,
            "\nclosed: {}  associative: {}  identity: {}  inverses: {}  group: {}",
            mark(closed),
            mark(associative),
            identity.map_or_else(|| "none".to_string(), |e| e.to_string()),
            mark(inverses),
            m
        )?;

        let witness = commutativity_counterexample(&group, &op);
        let m = self.check(section, "D4 is not commutative", witness.is_some());
        if let Some((a, b)) = witness {
            writeln!(
                out,
                "Not commutative: {} ∘ {} = {} but {} ∘ {} = {} {}",
                a,
                b,
                op.apply(&a, &b),
                b,
                a,
                op.apply(&b, &a),
                m
            )?;
        }

        writeln!(out, "\nElement orders and vertex permutations:")?;
        for s in elements {
            let perm = s.permutation().map(|v| (v + 1).to_string());
            writeln!(
                out,
                "  {:<4} order {}  {} → ({})",
                s.to_string(),
                s.order(),
                if s.is_rotation() { "rotation  " } else { "reflection" },
                perm.join(" ")
            )?;
        }
        Ok(())
    }

    pub(super) fn quotients<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::Quotients;
        let mut problems = vec![(6, 2)];
        for n in self.config.moduli.clone() {
            let ring = ZMod::integers_mod(n)?;
            for (g, ideal) in ring.cyclic_ideals() {
                // skip the trivial quotients by (0) and by R itself
                if ideal.len() > 1 && ideal.len() < ring.order() && !problems.contains(&(n, g)) {
                    problems.push((n, g));
                }
            }
        }

        for (modulus, generator) in problems {
            let solution = solve(&Problem::Quotient { modulus, generator })?;
            if let Solution::Quotient {
                ideal,
                cosets,
                order,
                ..
            } = &solution
            {
                let partitions = cosets.len() == *order
                    && cosets.iter().map(BTreeSet::len).sum::<usize>() as u64 == modulus
                    && cosets.iter().all(|c| c.len() == ideal.len());
                let m = self.check(
                    section,
                    format!("cosets of ({}) partition Z/{}Z", generator, modulus),
                    partitions,
                );
                writeln!(out, "{} {}", solution, m)?;
            }
        }

        let z6 = ZMod::integers_mod(6)?;
        let reduce = |a: &u64| a % 2;
        let hom = z6.elements().iter().all(|a| {
            z6.elements().iter().all(|b| {
                reduce(&z6.add(a, b)) == (reduce(a) + reduce(b)) % 2
                    && reduce(&z6.mul(a, b)) == (reduce(a) * reduce(b)) % 2
            })
        });
        let m = self.check(section, "a ↦ a mod 2 is a ring homomorphism Z/6Z → Z/2Z", hom);
        writeln!(out, "\nφ: Z/6Z → Z/2Z, a ↦ a mod 2 respects + and ·: {}", m)?;
        let kernel: BTreeSet<u64> = z6.elements().iter().copied().filter(|a| reduce(a) == 0).collect();
        writeln!(out, "ker φ = {} = (2)", fmt_set(&kernel))?;
        Ok(())
    }

    pub(super) fn applications<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        writeln!(out, "Hyperbolic geometry:")?;
        writeln!(out, "- Lobachevsky geometry")?;
        writeln!(out, "- Special relativity: Lorentz boosts are hyperbolic rotations")?;
        writeln!(out, "Modular arithmetic:")?;
        writeln!(out, "- Check digits and hashing")?;
        writeln!(out, "- Public-key cryptography over Z/nZ")?;
        writeln!(out, "Symmetry groups:")?;
        writeln!(out, "- Image transformations (D4 acts on square pixel grids)")?;
        writeln!(out, "- Crystallography")?;
        Ok(())
    }

    pub(super) fn random_examples<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::RandomExamples;
        let example = random_examples::generate(&mut self.rng)?;
        writeln!(out, "Seed: {}", self.report.seed)?;
        writeln!(out, "Random ring: Z/{}Z", example.modulus)?;
        let m = self.check(
            section,
            format!("random ring Z/{}Z satisfies the ring axioms", example.modulus),
            example.is_ring,
        );
        writeln!(out, "Ring axioms: {}", m)?;
        let listed: Vec<String> = example
            .ideals
            .iter()
            .map(|i| format!("({})", i.generator))
            .collect();
        writeln!(out, "Cyclic ideals: {}", listed.join(" "))?;
        writeln!(
            out,
            "Random sets: A = {}, B = {}",
            fmt_set(&example.left),
            fmt_set(&example.right)
        )?;
        writeln!(out, "A ⊗ B ({}): {}", example.operation, fmt_set(&example.result))?;
        self.report.random_example = Some(example);
        Ok(())
    }

    pub(super) fn solver<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        let section = Section::Solver;
        for problem in self.config.problems.clone() {
            writeln!(out, "Problem: {}", problem)?;
            match solve(&problem) {
                Ok(solution) => {
                    writeln!(out, "{}", indent(&solution.to_string()))?;
                    self.report.solutions.push(solution);
                }
                Err(e) => {
                    let m = self.check(section, format!("solve: {}", problem), false);
                    writeln!(out, "  cannot solve: {} {}", e, m)?;
                }
            }
        }
        Ok(())
    }
}
