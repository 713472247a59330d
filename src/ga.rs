//! The genetic-algorithm driver.
//!
//! [`GeneticAlgorithm`] owns one population and a mutation rate, and runs
//! the generation loop: evaluate, check termination, report, evolve. The
//! evolve step is two-phase — every member's offspring chromosome is
//! computed from the *current* generation before any member commits — so
//! partially-evolved parents never contaminate sibling crossovers.

use log::{info, warn};
use rand::rngs::StdRng;

use crate::error::{EvolveError, Result};
use crate::history::FitnessHistory;
use crate::member::{EvolutionTask, Member};
use crate::population::Population;
use crate::random::create_rng_opt;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Whether the task's success condition was met.
    pub solved: bool,

    /// Generation the run stopped on. Counting starts at 1.
    pub generations: u64,

    /// Best fitness in the final generation.
    pub best_fitness: f64,

    /// The final best candidate, rendered by the task.
    pub best: String,
}

/// Drives the generational evolution loop for one task.
///
/// The driver exclusively owns its population and its RNG; all randomness
/// in the run (member initialization, parent sampling, gene mutation) is
/// drawn from that single seeded source.
///
/// A driver runs once: after [`run`](GeneticAlgorithm::run) returns, a
/// fresh run needs a fresh driver.
pub struct GeneticAlgorithm<T: EvolutionTask> {
    task: T,
    population: Population<T::Gene>,
    mutation_rate: u8,
    max_generations: Option<u64>,
    generation: u64,
    running: bool,
    history: FitnessHistory,
    rng: StdRng,
}

impl<T: EvolutionTask> GeneticAlgorithm<T> {
    /// Creates a driver with a randomly initialized population.
    ///
    /// Fails with [`EvolveError::InvalidConfiguration`] on a zero
    /// population size, a mutation rate above 100, or an empty task
    /// alphabet — all rejected before any member is constructed.
    pub fn new(
        task: T,
        population_size: usize,
        mutation_rate: u8,
        seed: Option<u64>,
    ) -> Result<Self> {
        if population_size == 0 {
            return Err(EvolveError::InvalidConfiguration(
                "population_size must be positive".into(),
            ));
        }
        if mutation_rate > 100 {
            return Err(EvolveError::InvalidConfiguration(format!(
                "mutation_rate must be in [0, 100], got {mutation_rate}"
            )));
        }
        if task.alphabet().is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "gene alphabet must not be empty".into(),
            ));
        }

        let mut rng = create_rng_opt(seed);
        info!("creating population of {population_size} members");
        let members = (0..population_size)
            .map(|_| Member::random(task.chromosome_length(), task.alphabet(), &mut rng))
            .collect();

        Ok(Self {
            task,
            population: Population::new(members)?,
            mutation_rate,
            max_generations: None,
            generation: 1,
            running: false,
            history: FitnessHistory::new(),
            rng,
        })
    }

    /// Bounds the run to at most `generations` generations.
    pub fn with_max_generations(mut self, generations: u64) -> Self {
        self.max_generations = Some(generations);
        self
    }

    /// The task being solved.
    pub fn task(&self) -> &T {
        &self.task
    }

    /// Read-only view of the population.
    pub fn population(&self) -> &Population<T::Gene> {
        &self.population
    }

    /// Current generation number. Starts at 1 and increments once per
    /// completed evolve step.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Per-generation best/average fitness history.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// Runs the evolution loop until the task is solved or the generation
    /// bound is hit.
    ///
    /// Every iteration evaluates the population, records and reports the
    /// fitness statistics, and evolves. The generation that solves the
    /// task does not evolve.
    pub fn run(&mut self) -> Result<RunReport> {
        info!("running algorithm...");
        self.running = true;

        loop {
            self.population.evaluate(&self.task)?;

            let best_fitness = self.population.best_fitness()?;
            let average_fitness = self.population.average_fitness()?;
            self.history.record(best_fitness, average_fitness);

            let best = self.task.render(self.population.best_member()?.chromosome());

            if self.task.solved(self.population.best_member()?.chromosome()) {
                info!("generation {:>4}: {best} \t|| solved", self.generation);
                self.running = false;
                return Ok(RunReport {
                    solved: true,
                    generations: self.generation,
                    best_fitness,
                    best,
                });
            }

            info!(
                "generation {:>4}: {best} \t|| best fitness: {best_fitness} \t|| average fitness: {average_fitness:.2}",
                self.generation
            );

            if let Some(limit) = self.max_generations {
                if self.generation >= limit {
                    warn!("generation limit {limit} reached before solving");
                    self.running = false;
                    return Ok(RunReport {
                        solved: false,
                        generations: self.generation,
                        best_fitness,
                        best,
                    });
                }
            }

            self.evolve()?;
            self.generation += 1;
        }
    }

    /// One two-phase evolve step.
    ///
    /// Phase 1 stages an offspring chromosome for every member, selecting
    /// both parents from the current generation (the second draw excludes
    /// the first parent). Phase 2 commits all members at once.
    fn evolve(&mut self) -> Result<()> {
        for i in 0..self.population.size() {
            let a = self.population.select_parent(None, &mut self.rng)?;
            let b = self.population.select_parent(Some(a), &mut self.rng)?;

            let parent_a = self.population.members()[a].chromosome().to_vec();
            let parent_b = self.population.members()[b].chromosome().to_vec();

            self.population.member_mut(i).crossover(
                &parent_a,
                &parent_b,
                self.mutation_rate,
                self.task.alphabet(),
                &mut self.rng,
            );
        }

        self.population.commit_all();
        Ok(())
    }
}
