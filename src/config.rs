//! Run configuration.
//!
//! [`SolverConfig`] holds everything a phrase-solving run needs. It loads
//! from a JSON file, every field can be overridden individually (the demo
//! binary maps CLI flags onto the setters), and [`SolverConfig::validate`]
//! rejects malformed input before any member is constructed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EvolveError, Result};

/// Configuration for a phrase-solving run.
///
/// # Defaults
///
/// ```
/// use evosolve::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.mutation_rate, 5);
/// ```
///
/// # Builder pattern
///
/// ```
/// use evosolve::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_phrase("hello world")
///     .with_population_size(100)
///     .with_mutation_rate(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of members in the population. Must be positive.
    pub population_size: usize,

    /// Per-gene mutation probability as an integer percentage in `[0, 100]`.
    pub mutation_rate: u8,

    /// The target phrase members evolve toward.
    pub phrase: String,

    /// The gene alphabet, one character per gene. Must cover every
    /// character of the phrase.
    pub gene_pool: String,

    /// Random seed for reproducible runs. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Optional bound on the number of generations. `None` runs until the
    /// phrase is solved.
    pub max_generations: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            mutation_rate: 5,
            phrase: "To be or not to be.".to_string(),
            gene_pool: concat!(
                "abcdefghijklmnopqrstuvwxyz",
                "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
                "0123456789 .,!?'",
            )
            .to_string(),
            seed: None,
            max_generations: None,
        }
    }
}

impl SolverConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields take their defaults, so a file may specify only the
    /// values it cares about.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate (integer percent).
    pub fn with_mutation_rate(mut self, rate: u8) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the target phrase.
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = phrase.into();
        self
    }

    /// Sets the gene alphabet.
    pub fn with_gene_pool(mut self, pool: impl Into<String>) -> Self {
        self.gene_pool = pool.into();
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the generation bound.
    pub fn with_max_generations(mut self, generations: u64) -> Self {
        self.max_generations = Some(generations);
        self
    }

    /// Validates the configuration.
    ///
    /// Fails with [`EvolveError::InvalidConfiguration`] on a zero
    /// population, a mutation rate above 100, an empty phrase or gene
    /// pool, a phrase using characters outside the gene pool, or a zero
    /// generation bound.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvolveError::InvalidConfiguration(
                "population_size must be positive".into(),
            ));
        }
        if self.mutation_rate > 100 {
            return Err(EvolveError::InvalidConfiguration(format!(
                "mutation_rate must be in [0, 100], got {}",
                self.mutation_rate
            )));
        }
        if self.phrase.is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "phrase must not be empty".into(),
            ));
        }
        if self.gene_pool.is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "gene_pool must not be empty".into(),
            ));
        }
        // A phrase character missing from the pool can never be evolved,
        // so the run would loop forever.
        if let Some(c) = self.phrase.chars().find(|c| !self.gene_pool.contains(*c)) {
            return Err(EvolveError::InvalidConfiguration(format!(
                "phrase character {c:?} is not in the gene pool"
            )));
        }
        if self.max_generations == Some(0) {
            return Err(EvolveError::InvalidConfiguration(
                "max_generations must be positive or unset".into(),
            ));
        }
        Ok(())
    }
}
