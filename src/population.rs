//! Population: fitness aggregation and parent selection.
//!
//! The population exclusively owns its members and exposes only read-only
//! access to them; chromosome replacement goes through the crate-internal
//! two-phase evolve path so external code can never bypass the
//! compute-then-commit discipline.

use rand::Rng;

use crate::error::{EvolveError, Result};
use crate::member::{EvolutionTask, Member};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A fixed-size collection of members with a wholesale fitness snapshot.
///
/// The snapshot is rebuilt by [`evaluate`](Population::evaluate) and is the
/// only thing the best/average queries and parent selection read. It is
/// stale (queries fail) before the first evaluate and after a commit.
#[derive(Debug, Clone)]
pub struct Population<G> {
    members: Vec<Member<G>>,
    snapshot: Option<Vec<f64>>,
}

impl<G: Clone + PartialEq + Send + Sync> Population<G> {
    /// Takes ownership of an already-sized collection of members.
    ///
    /// Fails with [`EvolveError::EmptyPopulation`] on zero members:
    /// selection and best-fitness queries are undefined on an empty
    /// population.
    pub fn new(members: Vec<Member<G>>) -> Result<Self> {
        if members.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        Ok(Self {
            members,
            snapshot: None,
        })
    }

    /// Number of members; fixed at construction.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Read-only view of the members.
    pub fn members(&self) -> &[Member<G>] {
        &self.members
    }

    /// Evaluates every member against the task and rebuilds the fitness
    /// snapshot.
    ///
    /// Deterministic given the chromosomes and the task. With the
    /// `parallel` feature, per-member evaluation runs on rayon; evaluation
    /// is pure per member so ordering does not matter.
    pub fn evaluate<T>(&mut self, task: &T) -> Result<()>
    where
        T: EvolutionTask<Gene = G>,
    {
        #[cfg(feature = "parallel")]
        self.members
            .par_iter_mut()
            .try_for_each(|member| member.evaluate_with(task).map(|_| ()))?;

        #[cfg(not(feature = "parallel"))]
        for member in &mut self.members {
            member.evaluate_with(task)?;
        }

        self.snapshot = Some(self.members.iter().map(Member::fitness).collect());
        Ok(())
    }

    /// The member with the highest fitness in the current snapshot.
    pub fn best_member(&self) -> Result<&Member<G>> {
        Ok(&self.members[self.best_index()?])
    }

    /// The highest fitness in the current snapshot.
    pub fn best_fitness(&self) -> Result<f64> {
        let snapshot = self.snapshot()?;
        Ok(snapshot[self.best_index()?])
    }

    /// The mean fitness of the current snapshot.
    pub fn average_fitness(&self) -> Result<f64> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.iter().sum::<f64>() / snapshot.len() as f64)
    }

    /// A uniformly random member.
    pub fn random_member<R: Rng>(&self, rng: &mut R) -> &Member<G> {
        &self.members[rng.random_range(0..self.members.len())]
    }

    /// Selects a parent by fitness-proportionate rejection sampling.
    ///
    /// Repeatedly draws a uniform member index (redrawing when it equals
    /// `exclude`) and accepts it with probability `fitness / best_fitness`.
    /// The best member always accepts, so the loop terminates with
    /// probability 1.
    ///
    /// Policy decisions for the degenerate cases:
    /// - `best_fitness == 0` (all-zero generation) falls back to uniform
    ///   selection among all members, still honoring `exclude`.
    /// - A single-member population returns its only member and ignores
    ///   `exclude`, since exclusion would otherwise never terminate.
    pub fn select_parent<R: Rng>(&self, exclude: Option<usize>, rng: &mut R) -> Result<usize> {
        let snapshot = self.snapshot()?;
        let n = self.members.len();
        if n == 1 {
            return Ok(0);
        }

        let best = snapshot[self.best_index()?];
        loop {
            let candidate = rng.random_range(0..n);
            if Some(candidate) == exclude {
                continue;
            }
            if best == 0.0 {
                return Ok(candidate);
            }
            if rng.random_range(0.0..1.0) < snapshot[candidate] / best {
                return Ok(candidate);
            }
        }
    }

    /// Index of the best member in the current snapshot.
    pub(crate) fn best_index(&self) -> Result<usize> {
        let snapshot = self.snapshot()?;
        let (index, _) = snapshot
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or(EvolveError::EmptyPopulation)?;
        Ok(index)
    }

    /// Mutable member access for the driver's evolve step only.
    pub(crate) fn member_mut(&mut self, index: usize) -> &mut Member<G> {
        &mut self.members[index]
    }

    /// Commits every member's pending chromosome and invalidates the
    /// snapshot, which now describes the previous generation.
    pub(crate) fn commit_all(&mut self) {
        for member in &mut self.members {
            member.commit();
        }
        self.snapshot = None;
    }

    fn snapshot(&self) -> Result<&[f64]> {
        self.snapshot
            .as_deref()
            .ok_or(EvolveError::StaleSnapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    /// Fitness = value of the single gene.
    struct GeneValueTask;

    impl EvolutionTask for GeneValueTask {
        type Gene = u8;

        fn alphabet(&self) -> &[u8] {
            &[0, 1, 2, 3, 4]
        }

        fn chromosome_length(&self) -> usize {
            1
        }

        fn evaluate(&self, chromosome: &[u8]) -> Result<f64> {
            Ok(f64::from(chromosome[0]))
        }

        fn solved(&self, chromosome: &[u8]) -> bool {
            chromosome[0] == 4
        }

        fn render(&self, chromosome: &[u8]) -> String {
            format!("{chromosome:?}")
        }
    }

    fn population_of(genes: &[u8]) -> Population<u8> {
        let members = genes
            .iter()
            .map(|&g| Member::with_chromosome(vec![g]))
            .collect();
        let mut pop = Population::new(members).unwrap();
        pop.evaluate(&GeneValueTask).unwrap();
        pop
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = Population::<u8>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, EvolveError::EmptyPopulation));
    }

    #[test]
    fn test_queries_fail_before_evaluate() {
        let pop = Population::new(vec![Member::with_chromosome(vec![1u8])]).unwrap();
        assert!(matches!(
            pop.best_fitness(),
            Err(EvolveError::StaleSnapshot)
        ));
        assert!(matches!(
            pop.average_fitness(),
            Err(EvolveError::StaleSnapshot)
        ));
        assert!(matches!(
            pop.select_parent(None, &mut create_rng(1)),
            Err(EvolveError::StaleSnapshot)
        ));
    }

    #[test]
    fn test_best_and_average() {
        let pop = population_of(&[1, 4, 2]);
        assert_eq!(pop.best_fitness().unwrap(), 4.0);
        assert_eq!(pop.best_member().unwrap().chromosome(), &[4u8]);
        let avg = pop.average_fitness().unwrap();
        assert!((avg - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_never_exceeds_best() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let genes: Vec<u8> = (0..10).map(|_| rng.random_range(0..5)).collect();
            let pop = population_of(&genes);
            assert!(pop.average_fitness().unwrap() <= pop.best_fitness().unwrap());
        }
    }

    #[test]
    fn test_random_member_is_from_population() {
        let pop = population_of(&[1, 2, 3]);
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let member = pop.random_member(&mut rng);
            assert!(pop
                .members()
                .iter()
                .any(|m| m.chromosome() == member.chromosome()));
        }
    }

    #[test]
    fn test_select_parent_never_returns_excluded() {
        let pop = population_of(&[4, 2, 2]);
        let mut rng = create_rng(42);
        for _ in 0..5000 {
            let parent = pop.select_parent(Some(0), &mut rng).unwrap();
            assert_ne!(parent, 0);
        }
    }

    #[test]
    fn test_select_parent_fitness_proportionate_bias() {
        // One member at best fitness, one at half: the first should be
        // selected roughly twice as often.
        let pop = population_of(&[4, 2]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 2];
        let n = 20_000;
        for _ in 0..n {
            counts[pop.select_parent(None, &mut rng).unwrap()] += 1;
        }

        let ratio = f64::from(counts[0]) / f64::from(counts[1]);
        assert!(
            (1.8..=2.2).contains(&ratio),
            "expected ~2:1 selection ratio, got {ratio:.3} ({counts:?})"
        );
    }

    #[test]
    fn test_select_parent_best_always_acceptable() {
        let pop = population_of(&[4]);
        let mut rng = create_rng(42);
        assert_eq!(pop.select_parent(None, &mut rng).unwrap(), 0);
        // Single member: exclusion is ignored rather than looping forever.
        assert_eq!(pop.select_parent(Some(0), &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_select_parent_all_zero_fitness_is_uniform() {
        let pop = population_of(&[0, 0, 0, 0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 20_000;
        for _ in 0..n {
            counts[pop.select_parent(None, &mut rng).unwrap()] += 1;
        }
        for &c in &counts {
            assert!(c > 4000, "expected roughly uniform fallback, got {counts:?}");
        }
    }

    #[test]
    fn test_commit_all_invalidates_snapshot() {
        let mut pop = population_of(&[1, 2]);
        pop.commit_all();
        assert!(matches!(
            pop.best_fitness(),
            Err(EvolveError::StaleSnapshot)
        ));
    }

    #[test]
    fn test_size_is_fixed() {
        let pop = population_of(&[1, 2, 3]);
        assert_eq!(pop.size(), 3);
        assert_eq!(pop.members().len(), 3);
    }
}
