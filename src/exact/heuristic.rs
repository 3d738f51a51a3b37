//! Lower bounds on the remaining tour cost.
//!
//! Both non-trivial bounds are admissible only when the matrix satisfies
//! the triangle inequality.
//!
//! # References
//!
//! - Kruskal (1956), "On the Shortest Spanning Subtree of a Graph and the
//!   Traveling Salesman Problem"
//! - Held & Karp (1970), "The Traveling-Salesman Problem and Minimum
//!   Spanning Trees"

use super::state::VisitedSet;
use crate::distance::DistanceMatrix;

/// Lower-bound function added to the accumulated cost in the frontier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Constant zero: plain uniform-cost search.
    Zero,

    /// Distance from the current city to its nearest unvisited city.
    NearestUnvisited,

    /// [`NearestUnvisited`](Self::NearestUnvisited) plus the minimum
    /// spanning tree over the unvisited cities.
    ///
    /// The MST is recomputed from scratch on every call, which dominates
    /// the cost of the heuristic and keeps exact search practical only for
    /// roughly 18 cities or fewer.
    #[default]
    NearestPlusMst,
}

impl Heuristic {
    /// Estimates the cost still needed to finish the tour from `current`
    /// with `visited` already covered, returning to `start`.
    ///
    /// Once every city is visited the only remaining edge is the return to
    /// `start`, which non-zero heuristics report exactly.
    pub fn estimate(
        self,
        matrix: &DistanceMatrix,
        start: usize,
        current: usize,
        visited: VisitedSet,
    ) -> f64 {
        if self == Heuristic::Zero {
            return 0.0;
        }

        let n = matrix.len();
        let remaining: Vec<usize> = visited.missing(n).collect();
        if remaining.is_empty() {
            return matrix.get(current, start);
        }

        let nearest = nearest_of(matrix, current, &remaining);
        match self {
            Heuristic::NearestUnvisited => nearest,
            _ => nearest + mst_cost(matrix, &remaining),
        }
    }
}

/// Distance from `from` to the closest city in `candidates`.
fn nearest_of(matrix: &DistanceMatrix, from: usize, candidates: &[usize]) -> f64 {
    candidates
        .iter()
        .map(|&c| matrix.get(from, c))
        .fold(f64::INFINITY, f64::min)
}

/// Weight of a minimum spanning tree over the induced subgraph on `nodes`.
///
/// Kruskal's algorithm with a union-find. Fewer than two nodes cost zero.
pub fn mst_cost(matrix: &DistanceMatrix, nodes: &[usize]) -> f64 {
    let k = nodes.len();
    if k < 2 {
        return 0.0;
    }

    let mut edges = Vec::with_capacity(k * (k - 1) / 2);
    for a in 0..k {
        for b in (a + 1)..k {
            edges.push((matrix.get(nodes[a], nodes[b]), a, b));
        }
    }
    edges.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut sets = DisjointSet::new(k);
    let mut total = 0.0;
    let mut used = 0;
    for (w, a, b) in edges {
        if sets.union(a, b) {
            total += w;
            used += 1;
            if used == k - 1 {
                break;
            }
        }
    }
    total
}

/// Union-find with path halving and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets of `a` and `b`; `false` if already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Coordinate, DistanceMatrix, Metric};

    fn line(n: usize) -> DistanceMatrix {
        let coords: Vec<Coordinate> = (0..n).map(|i| Coordinate::planar(i as f64, 0.0)).collect();
        DistanceMatrix::build(&coords, &Metric::Planar).unwrap()
    }

    #[test]
    fn test_mst_on_line() {
        let m = line(5);
        assert!((mst_cost(&m, &[0, 1, 2, 3, 4]) - 4.0).abs() < 1e-12);
        assert!((mst_cost(&m, &[0, 4]) - 4.0).abs() < 1e-12);
        assert_eq!(mst_cost(&m, &[2]), 0.0);
        assert_eq!(mst_cost(&m, &[]), 0.0);
    }

    #[test]
    fn test_mst_square() {
        let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)].map(Coordinate::from);
        let m = DistanceMatrix::build(&coords, &Metric::Planar).unwrap();
        assert!((mst_cost(&m, &[0, 1, 2, 3]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_estimates() {
        let m = line(5);
        let visited = VisitedSet::single(0).with(1);
        assert_eq!(Heuristic::Zero.estimate(&m, 0, 1, visited), 0.0);
        // nearest unvisited from 1 is 2
        assert!((Heuristic::NearestUnvisited.estimate(&m, 0, 1, visited) - 1.0).abs() < 1e-12);
        // 1 + MST{2,3,4} = 1 + 2
        assert!((Heuristic::NearestPlusMst.estimate(&m, 0, 1, visited) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_when_complete_is_return_edge() {
        let m = line(4);
        let all = VisitedSet::full(4);
        assert!((Heuristic::NearestPlusMst.estimate(&m, 0, 3, all) - 3.0).abs() < 1e-12);
        assert_eq!(Heuristic::Zero.estimate(&m, 0, 3, all), 0.0);
    }

    #[test]
    fn test_mst_bound_never_exceeds_true_remaining_on_line() {
        // on a line from 1 with {2,3,4} left, the cheapest completion is
        // 1->2->3->4->0 = 1 + 1 + 1 + 4 = 7
        let m = line(5);
        let visited = VisitedSet::single(0).with(1);
        assert!(Heuristic::NearestPlusMst.estimate(&m, 0, 1, visited) <= 7.0);
    }
}
