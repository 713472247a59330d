//! The phrase-solving task.
//!
//! Chromosomes are character sequences drawn from a gene pool; fitness is
//! the squared count of positions matching the target phrase. Squaring
//! sharpens the selection pressure toward near-matches without changing
//! the ordering of candidates.

use crate::config::SolverConfig;
use crate::error::{EvolveError, Result};
use crate::ga::GeneticAlgorithm;
use crate::member::EvolutionTask;

/// Guess a target phrase from a finite character alphabet.
pub struct PhraseTask {
    target: Vec<char>,
    alphabet: Vec<char>,
}

impl PhraseTask {
    /// Creates a phrase task.
    ///
    /// Fails with [`EvolveError::InvalidConfiguration`] on an empty phrase
    /// or gene pool.
    pub fn new(phrase: &str, gene_pool: &str) -> Result<Self> {
        if phrase.is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "phrase must not be empty".into(),
            ));
        }
        if gene_pool.is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "gene_pool must not be empty".into(),
            ));
        }
        Ok(Self {
            target: phrase.chars().collect(),
            alphabet: gene_pool.chars().collect(),
        })
    }

    /// The target phrase.
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// The fitness of an exact match: target length squared.
    pub fn max_fitness(&self) -> f64 {
        let len = self.target.len() as f64;
        len * len
    }

    /// Expected generations to solve by blind uniform guessing; printed at
    /// startup to put the evolutionary search into perspective.
    pub fn random_guess_generations(&self, population_size: usize) -> f64 {
        (self.alphabet.len() as f64).powi(self.target.len() as i32) / population_size as f64
    }
}

impl EvolutionTask for PhraseTask {
    type Gene = char;

    fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    fn chromosome_length(&self) -> usize {
        self.target.len()
    }

    fn evaluate(&self, chromosome: &[char]) -> Result<f64> {
        if chromosome.len() != self.target.len() {
            return Err(EvolveError::InvalidTargetLength {
                expected: self.target.len(),
                actual: chromosome.len(),
            });
        }
        let matches = chromosome
            .iter()
            .zip(&self.target)
            .filter(|(a, b)| a == b)
            .count();
        Ok((matches * matches) as f64)
    }

    fn solved(&self, chromosome: &[char]) -> bool {
        chromosome == self.target.as_slice()
    }

    fn render(&self, chromosome: &[char]) -> String {
        chromosome.iter().collect()
    }
}

/// Builds a phrase-solving driver from a validated configuration.
pub fn solver_from_config(config: &SolverConfig) -> Result<GeneticAlgorithm<PhraseTask>> {
    config.validate()?;
    let task = PhraseTask::new(&config.phrase, &config.gene_pool)?;
    let mut ga = GeneticAlgorithm::new(
        task,
        config.population_size,
        config.mutation_rate,
        config.seed,
    )?;
    if let Some(limit) = config.max_generations {
        ga = ga.with_max_generations(limit);
    }
    Ok(ga)
}
