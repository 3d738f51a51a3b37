//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::types::{GaProblem, Individual};
use crate::error::Result;
use crate::random::rng_from_seed;
use log::{info, trace};
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best cost (same as `best.cost()`).
    pub best_cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-so-far cost of the initial population, then after each
    /// generation.
    pub cost_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best cost: {}", result.best_cost);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`TspError::Configuration`](crate::TspError::Configuration)
    /// if the configuration is invalid; nothing is evaluated in that case.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA with a caller-supplied generator; `config.seed` is
    /// ignored.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let elite_count = config.elite_count();
        info!(
            "ga: population {}, {} generations, {} elites, {:?} selection",
            config.population_size, config.max_generations, elite_count, config.selection
        );

        // 1. Initialize and evaluate
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        // 2. Track best
        let mut best = population[best_index(&population)].clone();
        let mut cost_history = Vec::with_capacity(config.max_generations + 1);
        cost_history.push(best.cost());

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            // ascending cost = best first
            population.sort_by(|a, b| a.cost().total_cmp(&b.cost()));

            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1_idx = config.selection.select(&population, rng);
                let p2_idx = config.selection.select(&population, rng);

                let mut children = if rng.random_bool(config.crossover_rate) {
                    problem.crossover(&population[p1_idx], &population[p2_idx], rng)
                } else {
                    Vec::new()
                };
                if children.is_empty() {
                    children.push(population[p1_idx].clone());
                }

                for mut child in children {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    if rng.random_bool(config.mutation_rate) {
                        problem.mutate(&mut child, rng);
                    }
                    next_gen.push(child);
                }
            }

            // Elites included: every cost comes from the current genes.
            evaluate_population(problem, &mut next_gen, config.parallel);
            population = next_gen;

            let gen_best = &population[best_index(&population)];
            if gen_best.cost() < best.cost() {
                best = gen_best.clone();
            }
            cost_history.push(best.cost());

            trace!(
                "generation {}: generation best {:.6}, overall best {:.6}",
                gen + 1,
                gen_best.cost(),
                best.cost()
            );
            problem.on_generation(gen + 1, best.cost());
        }

        info!("ga: best cost {:.6}", best.cost());

        Ok(GaResult {
            best_cost: best.cost(),
            best,
            generations: config.max_generations,
            cost_history,
        })
    }
}

/// Evaluate all individuals in the population, on rayon threads when
/// `parallel` is set.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let cost = problem.evaluate(ind);
            ind.set_cost(cost);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let cost = problem.evaluate(ind);
        ind.set_cost(cost);
    }
}

/// Index of the individual with the lowest cost (first on ties).
fn best_index<I: Individual>(population: &[I]) -> usize {
    (1..population.len()).fold(0, |best, i| {
        if population[i].cost() < population[best].cost() {
            i
        } else {
            best
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::ga::Selection;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ---- OneMax problem: maximize sum of bits (minimize negative sum) ----

    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        cost: f64,
    }

    impl Individual for BitString {
        fn cost(&self) -> f64 {
            self.cost
        }
        fn set_cost(&mut self, cost: f64) {
            self.cost = cost;
        }
    }

    struct OneMaxProblem {
        n: usize,
        generations_seen: AtomicUsize,
        // lowest cost evaluated since the last generation callback
        batch_best: Mutex<f64>,
        population_best: Mutex<Vec<f64>>,
    }

    impl OneMaxProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                generations_seen: AtomicUsize::new(0),
                batch_best: Mutex::new(f64::INFINITY),
                population_best: Mutex::new(Vec::new()),
            }
        }
    }

    impl GaProblem for OneMaxProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            let bits: Vec<bool> = (0..self.n).map(|_| rng.random_bool(0.5)).collect();
            BitString {
                bits,
                cost: f64::INFINITY,
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            let cost = -(ind.bits.iter().filter(|&&b| b).count() as f64);
            let mut batch = self.batch_best.lock().unwrap();
            *batch = batch.min(cost);
            cost
        }

        fn crossover<R: Rng>(&self, p1: &BitString, p2: &BitString, rng: &mut R) -> Vec<BitString> {
            // single-point
            let point = rng.random_range(0..self.n);
            let mut c1 = p1.bits.clone();
            let mut c2 = p2.bits.clone();
            c1[point..].copy_from_slice(&p2.bits[point..]);
            c2[point..].copy_from_slice(&p1.bits[point..]);
            vec![
                BitString {
                    bits: c1,
                    cost: f64::INFINITY,
                },
                BitString {
                    bits: c2,
                    cost: f64::INFINITY,
                },
            ]
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            ind.bits[idx] = !ind.bits[idx];
        }

        fn on_generation(&self, _generation: usize, _best_cost: f64) {
            self.generations_seen.fetch_add(1, Ordering::Relaxed);
            let mut batch = self.batch_best.lock().unwrap();
            self.population_best.lock().unwrap().push(*batch);
            *batch = f64::INFINITY;
        }
    }

    #[test]
    fn test_onemax_convergence() {
        let problem = OneMaxProblem::new(20);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(200)
            .with_mutation_rate(0.3)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_cost <= -15.0,
            "expected cost <= -15.0 for 20-bit OneMax, got {}",
            result.best_cost
        );
        assert_eq!(result.generations, 200);
    }

    #[test]
    fn test_best_never_regresses() {
        let problem = OneMaxProblem::new(10);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(50)
            .with_elite_ratio(0.0)
            .with_mutation_rate(0.9)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        // best-so-far tracking holds even without elites
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost must be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.best_cost, *result.cost_history.last().unwrap());
    }

    #[test]
    fn test_elite_preservation() {
        let problem = OneMaxProblem::new(16);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(80)
            .with_elite_ratio(0.1)
            .with_mutation_rate(1.0)
            .with_seed(7);

        GaRunner::run(&problem, &config).unwrap();

        // every child is mutated, so only the elites can hold the best genome
        let population_best = problem.population_best.lock().unwrap();
        assert_eq!(population_best.len(), 80);
        for (gen, window) in population_best.windows(2).enumerate() {
            assert!(
                window[1] <= window[0],
                "generation {} population best regressed: {} > {}",
                gen + 2,
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_cost_history_length_and_callback() {
        let problem = OneMaxProblem::new(10);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        // initial + each generation
        assert_eq!(result.cost_history.len(), 31);
        assert_eq!(problem.generations_seen.load(Ordering::Relaxed), 30);
    }

    #[test]
    fn test_best_cost_matches_best_individual() {
        let problem = OneMaxProblem::new(12);
        let config = GaConfig::default()
            .with_population_size(16)
            .with_max_generations(20)
            .with_seed(3);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.best_cost, problem.evaluate(&result.best));
    }

    #[test]
    fn test_all_selection_strategies() {
        for selection in [Selection::Tournament(3), Selection::Rank] {
            let problem = OneMaxProblem::new(10);
            let config = GaConfig::default()
                .with_population_size(30)
                .with_max_generations(50)
                .with_selection(selection)
                .with_seed(42);

            let result = GaRunner::run(&problem, &config).unwrap();

            assert!(
                result.best_cost < 0.0,
                "selection {:?} should find some true bits, got cost {}",
                selection,
                result.best_cost
            );
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(25)
            .with_seed(9);

        let a = GaRunner::run(&OneMaxProblem::new(16), &config).unwrap();
        let b = GaRunner::run(&OneMaxProblem::new(16), &config).unwrap();
        assert_eq!(a.best.bits, b.best.bits);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = OneMaxProblem::new(10);
        let config = GaConfig::default().with_population_size(0);
        let err = GaRunner::run(&problem, &config).unwrap_err();
        assert!(matches!(err, TspError::Configuration(_)));
        assert_eq!(problem.generations_seen.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_parallel_flag_matches_sequential() {
        // evaluation draws no randomness, so the flag cannot change the run
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(40)
            .with_seed(42);

        let seq = GaRunner::run(&OneMaxProblem::new(20), &config).unwrap();
        let parallel = config.clone().with_parallel(true);
        let par = GaRunner::run(&OneMaxProblem::new(20), &parallel).unwrap();
        assert_eq!(seq.cost_history, par.cost_history);
        assert_eq!(seq.best.bits, par.best.bits);
    }

    // ---- Default crossover/mutate (no-op) ----

    #[derive(Clone, Debug)]
    struct Scalar {
        x: f64,
        cost: f64,
    }

    impl Individual for Scalar {
        fn cost(&self) -> f64 {
            self.cost
        }
        fn set_cost(&mut self, cost: f64) {
            self.cost = cost;
        }
    }

    struct AbsProblem;

    impl GaProblem for AbsProblem {
        type Individual = Scalar;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Scalar {
            Scalar {
                x: rng.random_range(-10.0..10.0),
                cost: f64::INFINITY,
            }
        }

        fn evaluate(&self, ind: &Scalar) -> f64 {
            ind.x.abs()
        }
    }

    #[test]
    fn test_default_operators() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_seed(42);

        let result = GaRunner::run(&AbsProblem, &config).unwrap();

        // clones only: the best can never beat the initial population's best
        assert_eq!(result.generations, 10);
        assert_eq!(result.cost_history[0], result.best_cost);
    }
}
