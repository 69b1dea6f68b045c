//! Core seams for the route planner.
//!
//! Kept small on purpose. Callers plug in their own metric or persistence
//! layer by implementing these.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::StoreError;

/// Distance between two coordinates.
///
/// Implementations must be symmetric and return `0.0` for identical points.
/// The solver compares values with `<`, so they must also be finite for
/// finite input.
pub trait DistanceMetric {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        (**self).distance(from, to)
    }
}

/// A route with the identity assigned by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRoute {
    pub id: u64,
    pub points: Vec<Coordinate>,
}

/// Persistence collaborator for finished routes.
///
/// The store owns identity; the planner only hands over ordered points.
pub trait RouteStore {
    /// Persist the points and return the stored route with its new id.
    fn create(&self, points: Vec<Coordinate>) -> StoredRoute;

    /// Fetch a previously stored route.
    fn get(&self, id: u64) -> Result<StoredRoute, StoreError>;
}
