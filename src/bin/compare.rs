//! Side-by-side demo of the two engine variants
//!
//! Runs the conventional and chaotic optimizers on the sphere function with
//! the same configuration and prints per-iteration progress.

use greywolf::prelude::*;

fn report(label: &str, result: &HuntResult) {
    println!("\n{label} best fitness: {:.6}", result.best_fitness);
    println!("{label} best position: {:?}", result.best_position);
    println!("{label} evaluations:   {}", result.evaluations);
}

fn main() -> Result<(), GwoError> {
    let config = GwoConfig::default();
    let objective = Sphere::new(config.vector_size);

    println!("=== Conventional GWO ({}) ===", objective.name());
    let mut conventional = ConventionalGwo::seeded(config.clone(), objective.clone(), 7)?;
    let result = conventional.hunt_with_progress(|p| {
        println!(
            "[GWO]  iteration {:2}, best fitness {:.6}",
            p.iteration, p.best_fitness
        );
    })?;
    report("[GWO] ", &result);

    println!("\n=== Chaotic GWO ({}) ===", objective.name());
    let mut chaotic = ChaoticGwo::seeded(config, objective, 7)?;
    let result = chaotic.hunt_with_progress(|p| {
        println!(
            "[CGWO] iteration {:2}, best fitness {:.6}",
            p.iteration, p.best_fitness
        );
    })?;
    report("[CGWO]", &result);

    Ok(())
}
