//! Walk through every effect size with the default demo inputs
//!
//! Run with `RUST_LOG=debug` to see the library's own tracing output.

use anyhow::Result;
use effectsize::effectsize_core::math::distributions::normal::{comparison_curves, CurveParameters};
use effectsize::effectsize_measures::*;
use effectsize::effectsize_sampling::CorrelatedPairs;
use effectsize::{ContingencyTable, GroupStats, Measure};
use std::fmt::Display;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn show<T: Display>(label: &str, measure: &Measure<T>) {
    println!("  {label:<28} {measure}");
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Comparing two means ===");
    let control = GroupStats::new(100.0, 15.0, 20);
    let treatment = GroupStats::new(108.0, 15.0, 20);
    let comparison = compare_groups(&control, &treatment)?;
    show("Cohen's d", &comparison.cohens_d);
    show("Hedges' g", &comparison.hedges_g);
    show("SMD (control - treatment)", &comparison.smd);

    let params = CurveParameters::default();
    let curves = comparison_curves(control.mean, treatment.mean, control.sd, &params)?;
    if let Some(curves) = curves.value() {
        info!(samples = curves.first.len(), "Sampled overlapping density curves");
    }

    println!("\n=== Significance vs effect size ===");
    for n in [4, 10, 100, 1000] {
        let result = two_sample_z_test(0.2, 1.0, n);
        let p_value = match result.test {
            Measure::Value(test) => format!("p = {:.4}", test.p_value),
            Measure::Undefined(reason) => reason.to_string(),
        };
        println!("  n = {n:<5} d = {}  {p_value}", result.cohens_d);
    }

    println!("\n=== Variance explained ===");
    let params = EtaSquaredParameters::default();
    match eta_squared_with(&[10.0, 12.0, 14.0], 3.0, &params)? {
        Measure::Value(decomposition) => println!(
            "  eta-squared                  {:.3} ({:.1}% unexplained)",
            decomposition.eta_squared,
            decomposition.unexplained() * 100.0
        ),
        Measure::Undefined(reason) => println!("  eta-squared                  {reason}"),
    }

    println!("\n=== 2x2 tables ===");
    let table = ContingencyTable::new(30, 70, 10, 90);
    for measure in table_measures() {
        show(measure.name(), &measure.compute(&table));
    }
    let sparse = ContingencyTable::new(10, 5, 0, 20);
    show("Odds ratio (zero cell)", &odds_ratio(&sparse));
    println!("  {:<28} {}", "Haldane-corrected OR", odds_ratio_haldane(&sparse));

    println!("\n=== Number needed to treat / harm ===");
    for (label, result) in [
        ("NNT (CER 20%, EER 10%)", number_needed_to_treat(0.20, 0.10)?),
        ("NNH (CER 5%, EER 15%)", number_needed_to_harm(0.05, 0.15)?),
    ] {
        match result {
            Measure::Value(number) => println!(
                "  {label:<28} {:.1} ({:?}, {} patients)",
                number.value,
                number.direction,
                number.whole_patients()
            ),
            Measure::Undefined(reason) => println!("  {label:<28} {reason}"),
        }
    }

    println!("\n=== Correlation and R² ===");
    let points = CorrelatedPairs::new(0.7)?.with_seed(42).generate(100);
    println!("  {:<28} {:.3}", "Pearson r", pearson_r(&points));
    show("R²", &r_squared(&points));
    if let Measure::Value(fit) = fit_line(&points) {
        println!(
            "  {:<28} y = {:.3}x + {:.3}",
            "Least-squares line", fit.slope, fit.intercept
        );
    }

    Ok(())
}
