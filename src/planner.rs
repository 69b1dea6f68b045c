//! Upload-to-route pipeline.

use std::time::Instant;

use rayon::prelude::*;

use crate::coordinate::Coordinate;
use crate::error::PlannerError;
use crate::euclidean::EuclideanMetric;
use crate::haversine::HaversineMetric;
use crate::ingest::{self, Encoding, SkippedRow};
use crate::route::Route;
use crate::solver;
use crate::store::StoredRoute;
use crate::traits::{DistanceMetric, RouteStore};

/// Which metric the solver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    /// Planar distance over raw degrees.
    #[default]
    Euclidean,
    /// Great-circle distance in kilometers.
    Haversine,
}

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Encoding of the uploaded bytes.
    pub encoding: Encoding,
    pub metric: MetricKind,
}

/// A built route plus what ingestion left out.
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    pub route: Route,
    pub skipped: Vec<SkippedRow>,
    /// Path length under the metric the route was built with.
    pub total_length: f64,
}

/// Ingest `raw` and build its nearest-neighbor route.
pub fn plan(raw: &[u8], options: &PlanOptions) -> Result<PlannedRoute, PlannerError> {
    let started = Instant::now();

    let ingested = ingest::parse(raw, options.encoding)?;
    if !ingested.skipped.is_empty() {
        tracing::warn!(
            skipped = ingested.skipped.len(),
            rows = ingested.rows(),
            "some rows were skipped"
        );
    }

    let (route, total_length) = match options.metric {
        MetricKind::Euclidean => build_route(&ingested.coordinates, &EuclideanMetric)?,
        MetricKind::Haversine => build_route(&ingested.coordinates, &HaversineMetric::default())?,
    };

    tracing::info!(
        bytes = raw.len(),
        points = route.len(),
        skipped = ingested.skipped.len(),
        metric = ?options.metric,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "route planned"
    );

    Ok(PlannedRoute {
        route,
        skipped: ingested.skipped,
        total_length,
    })
}

/// Plan `raw` and hand the finished route to `store`.
///
/// Nothing is stored when planning fails.
pub fn plan_and_store<S>(raw: &[u8], options: &PlanOptions, store: &S) -> Result<StoredRoute, PlannerError>
where
    S: RouteStore + ?Sized,
{
    let planned = plan(raw, options)?;
    Ok(store.create(planned.route.into_points()))
}

/// Plan independent uploads in parallel. Results keep the input order.
pub fn plan_many<B>(uploads: &[B], options: &PlanOptions) -> Vec<Result<PlannedRoute, PlannerError>>
where
    B: AsRef<[u8]> + Sync,
{
    uploads
        .par_iter()
        .map(|raw| plan(raw.as_ref(), options))
        .collect()
}

fn build_route<M>(points: &[Coordinate], metric: &M) -> Result<(Route, f64), PlannerError>
where
    M: DistanceMetric,
{
    let route = Route::new(solver::build_with(points, metric)?);
    let total_length = route.total_length(metric);
    Ok((route, total_length))
}
