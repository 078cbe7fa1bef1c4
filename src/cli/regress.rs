//! Regress command implementation.

use super::{load_config, save_best, CliError};
use arbor::symbolic::{Dataset, MathGrammar, MathSymbol, SymbolicEvaluator};
use std::path::Path;

/// Execute the regress command.
///
/// # Errors
///
/// Returns an error if the dataset or configuration cannot be loaded, a
/// function name is unknown, or the best expression cannot be saved.
pub(crate) fn execute(
    dataset: &Path,
    config: Option<&Path>,
    seed: Option<u64>,
    functions: &[String],
    constants: Option<&[f64]>,
    save: Option<&Path>,
    verbose: bool,
) -> Result<(), CliError> {
    let dataset = Dataset::parse(dataset)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", dataset.display())))?;

    let mut config = load_config(config)?;
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.verbose = verbose;

    let mut grammar = MathGrammar::new(dataset.num_inputs());
    if !functions.is_empty() {
        let mut allowed = Vec::with_capacity(functions.len());
        for name in functions {
            allowed.push(
                MathSymbol::function(name)
                    .ok_or_else(|| CliError::new(format!("Unknown function {name:?}")))?,
            );
        }
        grammar = grammar.with_functions(allowed);
    }
    if let Some(&[min, max]) = constants {
        if min > max {
            return Err(CliError::new(format!(
                "Invalid constant range {min}..={max}"
            )));
        }
        grammar = grammar.with_constants(min, max);
    }

    let mut evaluator = SymbolicEvaluator::new(dataset);
    let (best, stats) = super::evolve(config, grammar, &mut evaluator)?;

    println!(
        "Best expression with squared error {:.6} (found in generation {}):",
        best.value(),
        stats.best_generation
    );
    let rendered = best.root().to_string();
    println!("{rendered}");

    if let Some(save_path) = save {
        save_best(save_path, &rendered)?;
        println!("Best expression saved to: {}", save_path.display());
    }
    Ok(())
}
