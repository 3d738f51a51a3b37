//! The TSP as a [`GaProblem`].
//!
//! The start city is fixed, so a genome only orders the remaining cities:
//! `genes` is a permutation of `0..m` indexing the non-start city list, and
//! decodes to the closed tour `[start, others[g0], ..., others[gm-1], start]`.

use super::config::GaConfig;
use super::operators::{pmx_crossover, swap_mutation};
use super::runner::GaRunner;
use super::types::{GaProblem, Individual};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::random::rng_from_seed;
use crate::tour::{cycle_cost, Tour};
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

/// A tour genome: the visiting order of the non-start cities.
#[derive(Debug, Clone, PartialEq)]
pub struct TourGenome {
    /// Permutation of `0..m` over [`TourProblem::others`].
    pub genes: Vec<usize>,
    cost: f64,
}

impl TourGenome {
    /// An unevaluated genome.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            cost: f64::INFINITY,
        }
    }
}

impl Individual for TourGenome {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }
}

/// TSP over a distance matrix with a fixed start city.
#[derive(Debug, Clone)]
pub struct TourProblem<'a> {
    matrix: &'a DistanceMatrix,
    start: usize,
    others: Vec<usize>,
}

impl<'a> TourProblem<'a> {
    /// # Errors
    /// [`TspError::InvalidInput`](crate::TspError::InvalidInput) if the
    /// matrix is empty or `start` is out of range.
    pub fn new(matrix: &'a DistanceMatrix, start: usize) -> Result<Self> {
        if matrix.is_empty() {
            return Err(TspError::invalid_input("city set is empty"));
        }
        matrix.check_city(start, "start")?;
        let others = (0..matrix.len()).filter(|&c| c != start).collect();
        Ok(Self {
            matrix,
            start,
            others,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Non-start cities in ascending order; genes index into this list.
    pub fn others(&self) -> &[usize] {
        &self.others
    }

    /// Open visiting order `[start, others[g]...]` for `genome`.
    pub fn decode(&self, genome: &TourGenome) -> Vec<usize> {
        std::iter::once(self.start)
            .chain(genome.genes.iter().map(|&g| self.others[g]))
            .collect()
    }

    /// Closed tour for `genome`.
    pub fn tour(&self, genome: &TourGenome) -> Tour {
        Tour::from_order(self.decode(genome))
    }
}

impl GaProblem for TourProblem<'_> {
    type Individual = TourGenome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TourGenome {
        let mut genes: Vec<usize> = (0..self.others.len()).collect();
        genes.shuffle(rng);
        TourGenome::new(genes)
    }

    fn evaluate(&self, genome: &TourGenome) -> f64 {
        cycle_cost(&self.decode(genome), self.matrix)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TourGenome,
        parent2: &TourGenome,
        rng: &mut R,
    ) -> Vec<TourGenome> {
        let (c1, c2) = pmx_crossover(&parent1.genes, &parent2.genes, rng);
        vec![TourGenome::new(c1), TourGenome::new(c2)]
    }

    fn mutate<R: Rng>(&self, genome: &mut TourGenome, rng: &mut R) {
        swap_mutation(&mut genome.genes, rng);
    }
}

/// Result of [`solve_genetic`].
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// Best closed tour seen in any generation, anchored at `config.start`.
    pub tour: Tour,
    /// Cost of `tour`.
    pub cost: f64,
    /// Generations executed.
    pub generations: usize,
    /// Best-so-far cost, initial population first.
    pub cost_history: Vec<f64>,
}

/// Runs the GA on `matrix` with a generator seeded from `config.seed`.
///
/// # Example
///
/// ```
/// use u_tsp::distance::{City, DistanceMatrix, Metric};
/// use u_tsp::ga::{solve_genetic, GaConfig};
///
/// let cities = vec![
///     City::new("A", (0.0, 0.0)),
///     City::new("B", (1.0, 0.0)),
///     City::new("C", (1.0, 1.0)),
///     City::new("D", (0.0, 1.0)),
/// ];
/// let matrix = DistanceMatrix::from_cities(&cities, &Metric::Planar).unwrap();
/// let config = GaConfig::default().with_max_generations(50).with_seed(1);
/// let result = solve_genetic(&matrix, &config).unwrap();
/// assert!((result.cost - 4.0).abs() < 1e-9);
/// ```
pub fn solve_genetic(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GeneticResult> {
    config.validate_for(matrix)?;
    let mut rng = rng_from_seed(config.seed);
    solve_genetic_with_rng(matrix, config, &mut rng)
}

/// Runs the GA with a caller-supplied generator; `config.seed` is ignored.
pub fn solve_genetic_with_rng<R: Rng>(
    matrix: &DistanceMatrix,
    config: &GaConfig,
    rng: &mut R,
) -> Result<GeneticResult> {
    config.validate_for(matrix)?;
    let problem = TourProblem::new(matrix, config.start)?;
    info!("genetic tsp: {} cities, start {}", matrix.len(), config.start);

    let result = GaRunner::run_with_rng(&problem, config, rng)?;
    let tour = problem.tour(&result.best);
    let cost = tour.cost(matrix);

    Ok(GeneticResult {
        tour,
        cost,
        generations: result.generations,
        cost_history: result.cost_history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Coordinate, Metric};
    use crate::exact::{ExactConfig, ExactRunner};
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = create_rng(seed);
        let coords: Vec<Coordinate> = (0..n)
            .map(|_| Coordinate::planar(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        DistanceMatrix::build(&coords, &Metric::Planar).unwrap()
    }

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(40)
            .with_max_generations(60)
            .with_seed(42)
    }

    #[test]
    fn test_decode_skips_start() {
        let matrix = random_instance(5, 1);
        let problem = TourProblem::new(&matrix, 2).unwrap();
        assert_eq!(problem.others(), &[0, 1, 3, 4]);
        let genome = TourGenome::new(vec![3, 0, 2, 1]);
        assert_eq!(problem.decode(&genome), vec![2, 4, 0, 3, 1]);
        assert_eq!(problem.tour(&genome).as_slice(), &[2, 4, 0, 3, 1, 2]);
    }

    #[test]
    fn test_problem_rejects_bad_start() {
        let matrix = random_instance(3, 1);
        assert!(matches!(
            TourProblem::new(&matrix, 3),
            Err(TspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_result_is_valid_tour_with_consistent_cost() {
        let matrix = random_instance(12, 7);
        let result = solve_genetic(&matrix, &small_config()).unwrap();
        assert!(result.tour.is_valid(12));
        assert_eq!(result.tour.start(), Some(0));
        assert!((result.cost - result.tour.cost(&matrix)).abs() < 1e-9);
        assert!((result.cost - *result.cost_history.last().unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_custom_start() {
        let matrix = random_instance(9, 3);
        let result = solve_genetic(&matrix, &small_config().with_start(5)).unwrap();
        assert_eq!(result.tour.start(), Some(5));
        assert!(result.tour.is_valid(9));
    }

    #[test]
    fn test_single_and_two_cities() {
        let one = DistanceMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let result = solve_genetic(&one, &small_config()).unwrap();
        assert_eq!(result.tour.as_slice(), &[0, 0]);
        assert_eq!(result.cost, 0.0);

        let two = DistanceMatrix::from_rows(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap();
        let result = solve_genetic(&two, &small_config()).unwrap();
        assert_eq!(result.tour.as_slice(), &[0, 1, 0]);
        assert!((result.cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_tour() {
        let matrix = random_instance(15, 11);
        let a = solve_genetic(&matrix, &small_config()).unwrap();
        let b = solve_genetic(&matrix, &small_config()).unwrap();
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_history_non_increasing() {
        let matrix = random_instance(20, 5);
        let result = solve_genetic(&matrix, &small_config()).unwrap();
        assert_eq!(result.cost_history.len(), 61);
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_reaches_optimum_on_small_instance() {
        let matrix = random_instance(8, 21);
        let optimum = ExactRunner::run(&matrix, &ExactConfig::a_star()).unwrap().cost;
        let config = GaConfig::default()
            .with_max_generations(300)
            .with_seed(42);
        let result = solve_genetic(&matrix, &config).unwrap();
        assert!(
            result.cost <= optimum * 1.05 + 1e-9,
            "ga {} vs optimum {}",
            result.cost,
            optimum
        );
        assert!(result.cost >= optimum - 1e-9);
    }

    #[test]
    fn test_empty_and_invalid_config() {
        let matrix = random_instance(4, 1);
        let err = solve_genetic(&matrix, &small_config().with_max_generations(0)).unwrap_err();
        assert!(matches!(err, TspError::Configuration(_)));

        let err = DistanceMatrix::from_rows(Vec::new())
            .and_then(|m| solve_genetic(&m, &small_config()).map(|_| ()))
            .unwrap_err();
        assert!(matches!(err, TspError::InvalidInput(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_genetic_tour_valid(n in 1usize..14, seed in any::<u64>()) {
            let matrix = random_instance(n, seed);
            let config = GaConfig::default()
                .with_population_size(12)
                .with_max_generations(8)
                .with_seed(seed);
            let result = solve_genetic(&matrix, &config).unwrap();
            prop_assert!(result.tour.is_valid(n));
            prop_assert!((result.cost - result.tour.cost(&matrix)).abs() < 1e-9);
        }
    }
}
