//! Core trait definitions for the GA.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the generic
//! evolutionary loop and a concrete encoding such as
//! [`TourProblem`](super::TourProblem).

use rand::Rng;

/// A candidate solution in the GA population.
///
/// The runner computes cost with [`GaProblem::evaluate`] and stores it
/// via [`set_cost`](Individual::set_cost). Lower cost is fitter; no
/// inverted fitness score is ever formed.
pub trait Individual: Clone + Send + Sync {
    /// Cost from the most recent evaluation.
    fn cost(&self) -> f64;

    /// Stores a freshly computed cost.
    fn set_cost(&mut self, cost: f64);
}

/// Defines a GA optimization problem.
///
/// Implementors supply:
///
/// 1. **Initialization**: a random individual
/// 2. **Evaluation**: its cost
/// 3. **Crossover**: recombination of two parents
/// 4. **Mutation**: an in-place perturbation
///
/// `Send + Sync` because the runner may evaluate the population in
/// parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the cost of an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces one or two offspring by recombining two parents.
    ///
    /// The default implementation clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place. The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the best cost so far.
    fn on_generation(&self, _generation: usize, _best_cost: f64) {}
}
