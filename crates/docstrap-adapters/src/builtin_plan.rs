//! The compiled-in template table.
//!
//! [`builtin_plan`] is the single entry-point for the template set Docstrap
//! ships. The table is declarative data — a flat ordered mapping from
//! relative path to fixed content — with no content literals interleaved
//! with control flow. Parent directories are derived by the plan builder,
//! so the directory set can never drift out of sync with the file set.
//!
//! # Layout produced (relative to the target root)
//!
//! ```text
//! README.md
//! case-studies/
//!   spray-on-dress.md
//!   gospel-propagation.md
//! tools-and-frameworks/
//!   innovation-calculator.py    (executable)
//! applications/
//!   research-validation.md
//! ```

use docstrap_core::domain::{DomainError, ScaffoldPlan};

/// Build the built-in documentation plan.
///
/// Constructed fresh on every call; a plan is consumed within a single run
/// and nothing persists between runs.
pub fn builtin_plan() -> Result<ScaffoldPlan, DomainError> {
    ScaffoldPlan::builder()
        .file("README.md", README)
        .file("case-studies/spray-on-dress.md", CASE_STUDY_SPRAY_ON_DRESS)
        .file(
            "case-studies/gospel-propagation.md",
            CASE_STUDY_GOSPEL_PROPAGATION,
        )
        .file(
            "tools-and-frameworks/innovation-calculator.py",
            INNOVATION_CALCULATOR,
        )
        .file("applications/research-validation.md", APPLICATION_NOTE)
        .build()
}

// ── Template content ──────────────────────────────────────────────────────────
//
// Fixed at build time. A scaffold run is a pure overwrite: re-running against
// the same tree produces byte-identical files.

const README: &str = r#"# Innovation Science

A documentation collection exploring how breakthrough innovations succeed:
constraint optimization, credibility propagation, and validation of research
claims.

## Structure

- `case-studies/` — analyses of real innovations through this lens
- `tools-and-frameworks/` — runnable analysis tools
- `applications/` — application notes for applying the framework

## Contributing

Each case study follows the same shape: the constraint set, the paradox the
innovation resolved, and how credibility propagated to adoption.
"#;

const CASE_STUDY_SPRAY_ON_DRESS: &str = r#"# Case Study: The Spray-On Dress

## Constraint set

Three simultaneous constraints defined the problem space:

1. Mass producible
2. Unique per garment
3. Perceived as luxury

## The paradox

Mass production and uniqueness are normally opposites. Spray-on fabric
resolves the paradox: the process is industrial, the outcome is singular.

## Credibility propagation

A single high-visibility demonstration carried the claim further than any
specification sheet could. See `tools-and-frameworks/innovation-calculator.py`
for the constraint-complexity model this case is scored against.
"#;

const CASE_STUDY_GOSPEL_PROPAGATION: &str = r#"# Case Study: Gospel Propagation

## Model

Innovation adoption follows a propagation pattern: a demonstrated result
(the "miracle"), peer credibility (the "witnesses"), and audience readiness.

Adoption value is modeled as the product of demonstration impact, witness
credibility squared, and readiness — a deliberately skeptical weighting:
second-hand credibility decays fast.

## Application

Score a candidate innovation with the calculator's gospel-value function and
compare against the case baseline of 0.8 / 0.9 / 0.7.
"#;

const INNOVATION_CALCULATOR: &str = r#"#!/usr/bin/env python3
"""
Innovation Science Calculator
Mathematical tools for analyzing breakthrough innovation viability
"""

def innovation_success_curve(constraint_complexity):
    """
    Model innovation success as function of constraint complexity
    Similar to bias-variance tradeoff in machine learning
    """
    # Underfitting region: too simple, no clear value
    if constraint_complexity < 2:
        underfitting_penalty = (2 - constraint_complexity) ** 2
        return max(0, 0.3 - underfitting_penalty * 0.15)

    # Overfitting region: too complex, becomes traditional solution
    elif constraint_complexity > 5:
        overfitting_penalty = (constraint_complexity - 5) ** 2
        return max(0, 0.2 - overfitting_penalty * 0.05)

    # Optimal zone: balanced complexity captures innovation value
    else:
        optimal_distance = abs(constraint_complexity - 3.5)
        return 0.9 - (optimal_distance ** 2 * 0.1)

def calculate_innovation_gospel_value(paradox_strength, peer_credibility, customer_readiness):
    """
    Calculate innovation success based on Gospel propagation model
    """
    miracle_impact = paradox_strength ** 1.5
    gospel_credibility = peer_credibility ** 2
    adoption_rate = customer_readiness ** 0.5

    gospel_value = miracle_impact * gospel_credibility * adoption_rate
    return min(1.0, gospel_value)

if __name__ == "__main__":
    print("Innovation Science Calculator")
    print("=" * 40)

    # Example: Spray-on dress analysis
    constraint_complexity = 3  # Mass producible + Unique + Luxury
    success_prob = innovation_success_curve(constraint_complexity)
    print(f"Spray-on dress constraint optimization: {success_prob:.2f}")

    # Example: Gospel value calculation
    gospel_value = calculate_innovation_gospel_value(0.8, 0.9, 0.7)
    print(f"Innovation gospel value: {gospel_value:.2f}")
"#;

const APPLICATION_NOTE: &str = r#"# Application Note: Research Claim Validation

## Problem

Universities need to validate research claims publicly without disclosing the
patentable core of the work.

## Approach

Publish the claim and its validation evidence as attestations against a
stable name, keeping the underlying artifacts in content-addressed storage
under the claimant's control. Validators attest to what they verified, not
to the artifact itself.

## Open items

- Selecting the attestation schema per discipline
- Revocation policy when a claim is withdrawn
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_plan_is_valid() {
        let plan = builtin_plan().unwrap();
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn builtin_plan_has_expected_areas() {
        let plan = builtin_plan().unwrap();
        let dirs: Vec<_> = plan.directories().iter().map(|d| d.as_str()).collect();
        assert_eq!(
            dirs,
            vec!["case-studies", "tools-and-frameworks", "applications"]
        );
    }

    #[test]
    fn builtin_plan_has_expected_files() {
        let plan = builtin_plan().unwrap();
        let paths: Vec<_> = plan.templates().iter().map(|t| t.path().as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "README.md",
                "case-studies/spray-on-dress.md",
                "case-studies/gospel-propagation.md",
                "tools-and-frameworks/innovation-calculator.py",
                "applications/research-validation.md",
            ]
        );
    }

    #[test]
    fn calculator_script_is_executable() {
        let plan = builtin_plan().unwrap();
        let calc = plan
            .templates()
            .iter()
            .find(|t| t.path().as_str().ends_with(".py"))
            .unwrap();
        assert!(calc.permissions().executable_flag());
        assert!(calc.content().starts_with("#!"));
    }

    #[test]
    fn markdown_templates_are_not_executable() {
        let plan = builtin_plan().unwrap();
        for t in plan.templates().iter().filter(|t| t.path().as_str().ends_with(".md")) {
            assert!(!t.permissions().executable_flag(), "{} executable", t.path());
        }
    }

    #[test]
    fn two_plan_constructions_are_identical() {
        let a = builtin_plan().unwrap();
        let b = builtin_plan().unwrap();
        assert_eq!(a.commit_message(), b.commit_message());
        for (x, y) in a.templates().iter().zip(b.templates()) {
            assert_eq!(x.content(), y.content());
        }
    }
}
