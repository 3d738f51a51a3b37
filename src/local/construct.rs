//! Nearest-neighbor tour construction.

use crate::distance::DistanceMatrix;
use crate::error::Result;

/// Builds an open visiting order by always moving to the closest
/// unvisited city.
///
/// Deterministic: ties go to the lowest index. O(N²).
///
/// # Errors
///
/// [`TspError::InvalidInput`](crate::TspError::InvalidInput) if `start`
/// is out of range.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Result<Vec<usize>> {
    matrix.check_city(start, "start")?;

    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    visited[start] = true;
    order.push(start);

    let mut current = start;
    while order.len() < n {
        let row = matrix.row(current);
        let mut nearest = None;
        let mut nearest_dist = f64::INFINITY;
        for (city, &d) in row.iter().enumerate() {
            if !visited[city] && (nearest.is_none() || d < nearest_dist) {
                nearest = Some(city);
                nearest_dist = d;
            }
        }
        let Some(next) = nearest else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Ok(order)
}
