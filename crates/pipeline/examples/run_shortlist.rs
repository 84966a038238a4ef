//! Evaluate the builtin catalog and print the refined candidates as CSV
//!
//! Usage: cargo run -p pipeline --example run_shortlist
//!
//! Output: one row per stage-2 evaluated candidate

use catalog::{Catalog, CatalogError};
use pipeline::{Engine, ViewKind};

fn main() -> Result<(), CatalogError> {
    tracing_subscriber::fmt().with_target(false).init();

    let engine = Engine::new(Catalog::builtin()?);

    println!("name,esi,signal,earth_similarity,habitability,shortlisted");
    for row in engine.view_rows(ViewKind::Stage2Evaluated) {
        if let Some(analysis) = row.outcome.analysis() {
            if let Some(stage2) = analysis.stage2.result() {
                println!(
                    "{},{:.4},{:.4},{:.4},{:.4},{}",
                    row.record.name,
                    analysis.stage1.esi.aggregate,
                    analysis.stage1.signal_score,
                    stage2.earth_similarity,
                    stage2.habitability_likelihood,
                    stage2.passed,
                );
            }
        }
    }

    let status = engine.status();
    eprintln!(
        "{} candidates, {} passed screening, {} shortlisted",
        status.total, status.stage1_passed_count, status.shortlist_count
    );
    Ok(())
}
