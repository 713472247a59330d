//! Generational genetic-algorithm engine.
//!
//! Evolves a fixed-size population of candidate solutions ("members")
//! across generations toward a fitness objective, using
//! fitness-proportionate parent selection, uniform per-gene crossover, and
//! per-gene mutation.
//!
//! # Core types
//!
//! - [`Member`]: one candidate's chromosome, with two-phase
//!   crossover-then-commit replacement
//! - [`Population`]: fitness aggregation and rejection-sampling parent
//!   selection
//! - [`GeneticAlgorithm`]: the generation loop and termination
//! - [`EvolutionTask`]: the trait a domain implements — alphabet, fitness,
//!   success condition
//!
//! The engine is generic over the gene type; [`phrase::PhraseTask`] is the
//! bundled demonstration task (guess a target phrase from a character
//! alphabet, fitness = squared match count).
//!
//! # Example
//!
//! ```
//! use evosolve::{phrase, SolverConfig};
//!
//! let config = SolverConfig::default()
//!     .with_phrase("AB")
//!     .with_gene_pool("AB")
//!     .with_population_size(50)
//!     .with_mutation_rate(10)
//!     .with_seed(42);
//!
//! let mut ga = phrase::solver_from_config(&config)?;
//! let report = ga.run()?;
//! assert!(report.solved);
//! # Ok::<(), evosolve::EvolveError>(())
//! ```
//!
//! # Evolution semantics
//!
//! Each generation: evaluate every member, report best/average fitness,
//! then evolve. Evolution is two-phase: every member's offspring
//! chromosome is computed from the current generation's parents before any
//! member commits, so sibling crossovers never see partially-evolved
//! parents. Parent selection is true fitness-proportionate rejection
//! sampling: a member with half the best fitness is selected roughly half
//! as often as the best member.
//!
//! With the `parallel` cargo feature, per-member fitness evaluation runs
//! on rayon. Crossover stays sequential: it consumes the single seeded RNG
//! owned by the driver.

pub mod config;
pub mod error;
pub mod ga;
pub mod history;
pub mod member;
pub mod phrase;
pub mod population;
pub mod random;

pub use config::SolverConfig;
pub use error::{EvolveError, Result};
pub use ga::{GeneticAlgorithm, RunReport};
pub use history::{FitnessHistory, NormalizedHistory};
pub use member::{EvolutionTask, Member};
pub use population::Population;
