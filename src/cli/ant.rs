//! Ant command implementation.

use super::{load_config, save_best, CliError};
use arbor::ant::{AntEvaluator, AntGrammar, Trail};
use std::path::Path;

/// Execute the ant command.
///
/// # Errors
///
/// Returns an error if the trail or configuration cannot be loaded, or the
/// best program cannot be saved.
pub(crate) fn execute(
    trail: &Path,
    config: Option<&Path>,
    seed: Option<u64>,
    moves: Option<usize>,
    save: Option<&Path>,
    verbose: bool,
) -> Result<(), CliError> {
    let trail = Trail::parse(trail)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", trail.display())))?;

    let mut config = load_config(config)?;
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.verbose = verbose;

    let mut evaluator = match moves {
        Some(moves) => AntEvaluator::with_max_moves(trail, moves),
        None => AntEvaluator::new(trail),
    };
    let max_score = evaluator.max_score();

    let (best, stats) = super::evolve(config, AntGrammar, &mut evaluator)?;

    println!(
        "Best program collected {:.0} of {max_score} food (found in generation {}):",
        best.fitness(),
        stats.best_generation
    );
    let rendered = best.root().to_string();
    println!("{rendered}");

    if let Some(save_path) = save {
        save_best(save_path, &rendered)?;
        println!("Best program saved to: {}", save_path.display());
    }
    Ok(())
}
