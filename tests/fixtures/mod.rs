//! Test fixtures for route-planner.
//!
//! Provides:
//! - Real Las Vegas / Henderson locations (from OpenStreetMap)
//! - Helpers for turning locations into CSV uploads

#![allow(dead_code)]

pub mod las_vegas_locations;

pub use las_vegas_locations::*;

use route_planner::Coordinate;

/// Render `(lat, lng)` pairs as a `lat,lng` CSV upload.
pub fn csv_upload(rows: &[(f64, f64)]) -> Vec<u8> {
    let mut out = String::from("lat,lng\n");
    for (lat, lng) in rows {
        out.push_str(&format!("{},{}\n", lat, lng));
    }
    out.into_bytes()
}

pub fn coordinates(rows: &[(f64, f64)]) -> Vec<Coordinate> {
    rows.iter()
        .map(|&(lat, lng)| Coordinate::new(lat, lng).expect("fixture coordinates are finite"))
        .collect()
}

pub fn tuples(points: &[Coordinate]) -> Vec<(f64, f64)> {
    points.iter().map(|c| c.coords()).collect()
}
