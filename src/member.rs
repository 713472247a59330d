//! Members and the task abstraction.
//!
//! A [`Member`] owns one candidate solution's chromosome and knows how to
//! stage a new chromosome via crossover and commit it atomically. It is
//! generic over the gene type: the engine never assumes characters.
//!
//! The domain plugs in through [`EvolutionTask`], which supplies the gene
//! alphabet, the fitness function, and the termination test. This mirrors
//! how different tasks need different chromosome representations and
//! scoring without the engine changing.

use rand::Rng;

use crate::error::Result;

/// Defines an evolutionary search task.
///
/// Implementations provide everything domain-specific: the gene alphabet,
/// chromosome length, fitness scoring, and the success condition. The
/// engine owns the evolutionary mechanics (selection, crossover, commit).
///
/// Fitness values are maximized and must be non-negative.
pub trait EvolutionTask: Send + Sync {
    /// The gene (symbol) type chromosomes are built from.
    type Gene: Clone + PartialEq + Send + Sync;

    /// The finite, non-empty alphabet genes are drawn from.
    fn alphabet(&self) -> &[Self::Gene];

    /// The chromosome length every member of this task uses.
    fn chromosome_length(&self) -> usize;

    /// Scores a chromosome. Non-negative; higher is better.
    ///
    /// Fails with [`EvolveError::InvalidTargetLength`] when the chromosome
    /// length does not match the task's target.
    ///
    /// [`EvolveError::InvalidTargetLength`]: crate::EvolveError::InvalidTargetLength
    fn evaluate(&self, chromosome: &[Self::Gene]) -> Result<f64>;

    /// Returns true when this chromosome satisfies the task exactly.
    fn solved(&self, chromosome: &[Self::Gene]) -> bool;

    /// Renders a chromosome for reporting.
    fn render(&self, chromosome: &[Self::Gene]) -> String;
}

/// One candidate solution in a population.
///
/// The active `chromosome` is only ever replaced through the two-phase
/// evolve step: [`crossover`](Member::crossover) stages a new chromosome
/// without touching the active one, and [`commit`](Member::commit) swaps
/// it in. Fitness is a cached score, recomputed every generation.
#[derive(Debug, Clone)]
pub struct Member<G> {
    chromosome: Vec<G>,
    pending: Option<Vec<G>>,
    fitness: f64,
}

impl<G: Clone + PartialEq> Member<G> {
    /// Creates a member with a chromosome of `length` genes, each drawn
    /// independently and uniformly from `alphabet`.
    ///
    /// Fitness is undefined (zero) until the first evaluation.
    ///
    /// # Panics
    /// Panics if `alphabet` is empty. Configuration validation rejects an
    /// empty alphabet before any member is constructed.
    pub fn random<R: Rng>(length: usize, alphabet: &[G], rng: &mut R) -> Self {
        assert!(!alphabet.is_empty(), "gene alphabet must not be empty");
        let chromosome = (0..length).map(|_| random_gene(alphabet, rng)).collect();
        Self {
            chromosome,
            pending: None,
            fitness: 0.0,
        }
    }

    /// Creates a member from an explicit chromosome.
    pub fn with_chromosome(chromosome: Vec<G>) -> Self {
        Self {
            chromosome,
            pending: None,
            fitness: 0.0,
        }
    }

    /// The active chromosome.
    pub fn chromosome(&self) -> &[G] {
        &self.chromosome
    }

    /// The cached fitness from the most recent evaluation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Computes and caches this member's fitness via the task.
    pub fn evaluate_with<T>(&mut self, task: &T) -> Result<f64>
    where
        T: EvolutionTask<Gene = G>,
    {
        let fitness = task.evaluate(&self.chromosome)?;
        self.fitness = fitness;
        Ok(fitness)
    }

    /// Stages a new chromosome combined from two parents.
    ///
    /// For each gene position an integer percentage `p` is drawn uniformly
    /// from `[0, 100)`. The first `(100 - mutation_rate) / 2` share takes
    /// parent A's gene, the next equal share takes parent B's gene, and the
    /// remaining `mutation_rate` share draws a fresh random gene from the
    /// alphabet.
    ///
    /// Writes only the pending chromosome; the active chromosome is
    /// untouched until [`commit`](Member::commit).
    pub fn crossover<R: Rng>(
        &mut self,
        parent_a: &[G],
        parent_b: &[G],
        mutation_rate: u8,
        alphabet: &[G],
        rng: &mut R,
    ) {
        debug_assert_eq!(parent_a.len(), self.chromosome.len());
        debug_assert_eq!(parent_b.len(), self.chromosome.len());

        let rate = mutation_rate.min(100);
        let cut_a = f64::from(100 - rate) / 2.0;
        let cut_b = cut_a * 2.0;

        let pending = (0..self.chromosome.len())
            .map(|i| {
                let p = f64::from(rng.random_range(0..100u8));
                if p < cut_a {
                    parent_a[i].clone()
                } else if p < cut_b {
                    parent_b[i].clone()
                } else {
                    random_gene(alphabet, rng)
                }
            })
            .collect();

        self.pending = Some(pending);
    }

    /// Atomically replaces the chromosome with the staged one.
    ///
    /// No-op when nothing is staged, so calling it twice is harmless.
    pub fn commit(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.chromosome = pending;
        }
    }

    /// The staged chromosome, if a crossover has run since the last commit.
    pub(crate) fn pending(&self) -> Option<&[G]> {
        self.pending.as_deref()
    }
}

/// Uniform draw of one gene from the alphabet.
fn random_gene<G: Clone, R: Rng>(alphabet: &[G], rng: &mut R) -> G {
    alphabet[rng.random_range(0..alphabet.len())].clone()
}
