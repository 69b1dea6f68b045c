//! Nearest-neighbor route construction.
//!
//! Greedy path building: start at index 0, then repeatedly step to the
//! closest unvisited point. Ties go to the lowest original index. Points are
//! tracked by index, so numerically identical coordinates stay separate stops.

use crate::coordinate::Coordinate;
use crate::error::PlannerError;
use crate::euclidean::EuclideanMetric;
use crate::traits::DistanceMetric;

/// Build a route with the default planar metric.
pub fn build(points: &[Coordinate]) -> Result<Vec<Coordinate>, PlannerError> {
    build_with(points, &EuclideanMetric)
}

/// Build a route with any metric.
///
/// The only failure is empty input. Otherwise the result is a permutation of
/// `points` beginning with `points[0]`.
pub fn build_with<M>(points: &[Coordinate], metric: &M) -> Result<Vec<Coordinate>, PlannerError>
where
    M: DistanceMetric,
{
    if points.is_empty() {
        return Err(PlannerError::EmptyInput);
    }

    let order = nearest_neighbor_order(points, metric);
    Ok(order.into_iter().map(|idx| points[idx]).collect())
}

/// Visiting order as indices into `points`. Empty for empty input.
pub fn nearest_neighbor_order<M>(points: &[Coordinate], metric: &M) -> Vec<usize>
where
    M: DistanceMetric,
{
    if points.is_empty() {
        return Vec::new();
    }

    // Ascending, so the first strict minimum found is the lowest index.
    let mut remaining: Vec<usize> = (1..points.len()).collect();
    let mut path = Vec::with_capacity(points.len());
    let mut current = 0;
    path.push(current);

    while !remaining.is_empty() {
        let slot = nearest_slot(&points[current], &remaining, points, metric);
        current = remaining.remove(slot);
        path.push(current);
    }

    path
}

/// Position in `remaining` of the point closest to `from`.
fn nearest_slot<M>(from: &Coordinate, remaining: &[usize], points: &[Coordinate], metric: &M) -> usize
where
    M: DistanceMetric,
{
    let mut best_slot = 0;
    let mut best_distance = f64::INFINITY;

    for (slot, &idx) in remaining.iter().enumerate() {
        let distance = metric.distance(from, &points[idx]);
        if distance < best_distance {
            best_distance = distance;
            best_slot = slot;
        }
    }

    best_slot
}
