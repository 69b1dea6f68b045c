//! Validated latitude/longitude pair.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// A point in degrees. Both fields are always finite.
///
/// Every constructor, deserialization included, goes through [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Returns `None` unless both values are finite.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if lat.is_finite() && lng.is_finite() {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.coords()
    }
}

/// Unvalidated wire form.
#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonFiniteCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for NonFiniteCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate ({}, {}) is not finite", self.lat, self.lng)
    }
}

impl std::error::Error for NonFiniteCoordinate {}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawCoordinate { lat, lng } = RawCoordinate::deserialize(deserializer)?;
        Coordinate::new(lat, lng).ok_or_else(|| de::Error::custom(NonFiniteCoordinate { lat, lng }))
    }
}
