//! Ordered visiting sequence produced by the solver.
//!
//! A route is a plain value. Identity is assigned later by whatever
//! [`RouteStore`](crate::traits::RouteStore) the caller persists it in.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::traits::DistanceMetric;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Returns the points in visiting order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the route and returns the owned points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of leg lengths along the open path. There is no return leg.
    pub fn total_length<M: DistanceMetric>(&self, metric: &M) -> f64 {
        self.points
            .windows(2)
            .map(|leg| metric.distance(&leg[0], &leg[1]))
            .sum()
    }
}

impl From<Route> for Vec<Coordinate> {
    fn from(route: Route) -> Self {
        route.points
    }
}
