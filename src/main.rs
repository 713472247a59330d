//! Phrase-solver demo binary.
//!
//! Loads a JSON configuration (if given), applies CLI overrides, runs the
//! genetic algorithm until the phrase is solved or the generation bound is
//! hit, and optionally exports the normalized fitness history for
//! plotting.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use evosolve::{phrase, EvolveError, SolverConfig};

/// Genetic algorithm phrase solver.
#[derive(Parser)]
#[command(name = "evosolve")]
#[command(version)]
#[command(about = "Evolve a population of random strings toward a target phrase")]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of members in the population
    #[arg(long)]
    population_size: Option<usize>,

    /// Per-gene mutation probability, integer percent in [0, 100]
    #[arg(long)]
    mutation_rate: Option<u8>,

    /// Phrase to solve
    #[arg(long)]
    phrase: Option<String>,

    /// Characters the members may use as genes
    #[arg(long)]
    gene_pool: Option<String>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations even if unsolved
    #[arg(long)]
    max_generations: Option<u64>,

    /// Write the normalized best/average fitness history as JSON
    #[arg(long)]
    history_out: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<(SolverConfig, Option<PathBuf>), EvolveError> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_file(path)?,
            None => SolverConfig::default(),
        };
        if let Some(n) = self.population_size {
            config.population_size = n;
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(phrase) = self.phrase {
            config.phrase = phrase;
        }
        if let Some(pool) = self.gene_pool {
            config.gene_pool = pool;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(limit) = self.max_generations {
            config.max_generations = Some(limit);
        }
        Ok((config, self.history_out))
    }
}

fn run(cli: Cli) -> Result<bool, EvolveError> {
    let (config, history_out) = cli.into_config()?;

    let mut ga = phrase::solver_from_config(&config)?;
    info!("population size: {}", config.population_size);
    info!("mutation rate: {}", config.mutation_rate);
    info!("population phrase: {}", ga.task().target());
    info!("member genes: {}", config.gene_pool);
    info!(
        "random guessing would take on average {:.0} generations",
        ga.task().random_guess_generations(config.population_size)
    );

    let report = ga.run()?;

    if let Some(path) = history_out {
        ga.history().write_json(&path)?;
        info!("fitness history written to {}", path.display());
    }

    if report.solved {
        info!(
            "solved {:?} in {} generations (fitness {})",
            report.best, report.generations, report.best_fitness
        );
    } else {
        error!(
            "unsolved after {} generations; best candidate {:?} (fitness {})",
            report.generations, report.best, report.best_fitness
        );
    }
    Ok(report.solved)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
