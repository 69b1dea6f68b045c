//! route-planner core
//!
//! Turns an uploaded table of coordinates into a nearest-neighbor visiting order.

pub mod coordinate;
pub mod error;
pub mod euclidean;
pub mod haversine;
pub mod ingest;
pub mod planner;
pub mod route;
pub mod solver;
pub mod store;
pub mod traits;

pub use coordinate::Coordinate;
pub use error::PlannerError;
pub use route::Route;
