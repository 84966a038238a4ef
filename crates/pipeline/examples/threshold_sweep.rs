//! Sweep the habitability gate and print shortlist sizes
//!
//! Usage: cargo run -p pipeline --example threshold_sweep
//!
//! The shortlist can only shrink as the gate tightens.

use catalog::{Catalog, CatalogError};
use pipeline::Engine;

fn main() -> Result<(), CatalogError> {
    let mut engine = Engine::new(Catalog::builtin()?);

    println!("habitability_threshold,stage1_passed,shortlist");
    for step in 0..=20 {
        let threshold = step as f64 / 20.0;
        engine.set_habitability_threshold(threshold);
        engine.commit();
        let status = engine.status();
        println!(
            "{:.2},{},{}",
            threshold, status.stage1_passed_count, status.shortlist_count
        );
    }
    Ok(())
}
