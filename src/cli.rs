//! CLI command implementations for Arbor.

pub(crate) mod ant;
pub(crate) mod regress;

use arbor::gp::{Engine, EngineConfig, Evaluator, EvolutionStats, Grammar, Symbol, TreeSolution};
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<arbor::ant::TrailError> for CliError {
    fn from(e: arbor::ant::TrailError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<arbor::symbolic::DatasetError> for CliError {
    fn from(e: arbor::symbolic::DatasetError) -> Self {
        Self::new(e.to_string())
    }
}

/// Load an engine configuration from a JSON file, or fall back to defaults.
fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                CliError::new(format!("Failed to read {}: {e}", path.display()))
            })?;
            serde_json::from_str(&text).map_err(|e| {
                CliError::new(format!("Invalid configuration {}: {e}", path.display()))
            })
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Drive an engine to termination behind a generation progress bar.
fn evolve<S, G, E>(
    config: EngineConfig,
    grammar: G,
    evaluator: &mut E,
) -> Result<(TreeSolution<S>, EvolutionStats), CliError>
where
    S: Symbol,
    G: Grammar<S>,
    E: Evaluator<S>,
{
    let generations = u64::try_from(config.max_generations).unwrap_or(u64::MAX);
    let pb = ProgressBar::new(generations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} generations {msg}",
            )
            .expect("valid template")
            .progress_chars("=>-"),
    );

    let mut engine = Engine::new(config, grammar, evaluator);
    while let Some(stats) = engine.step() {
        pb.set_message(format!("best {:.4}", stats.best_fitness));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stats = engine.stats();
    let best = engine.best().cloned().ok_or_else(|| {
        CliError::new("No generations were evaluated; check max_generations in the configuration")
    })?;
    Ok((best, stats))
}

/// Write the rendered best individual to a file.
fn save_best(path: &Path, rendered: &str) -> Result<(), CliError> {
    fs::write(path, format!("{rendered}\n"))
        .map_err(|e| CliError::new(format!("Failed to write {}: {e}", path.display())))
}
