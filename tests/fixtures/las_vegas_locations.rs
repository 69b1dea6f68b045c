//! Real Las Vegas / Henderson locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Strip (tight cluster)
// ============================================================================

pub const STRIP: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
];

// ============================================================================
// Henderson (southeast cluster)
// ============================================================================

pub const HENDERSON: &[Location] = &[
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Naga", 36.0137634, -114.9928676),
    Location::new("Buffalo Wild Wings Henderson", 36.0090449, -114.9917034),
    Location::new("Green Valley Ranch Area", 36.0308, -115.0825),
];

// ============================================================================
// North Las Vegas (northeast cluster)
// ============================================================================

pub const NORTH_VEGAS: &[Location] = &[
    Location::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Location::new("Roberto's Taco Shop", 36.1452953, -115.0478347),
    Location::new("Monarca Mexican Restaurant", 36.1440711, -115.0634197),
];

/// Every fixture location, strip first.
pub fn all_locations() -> Vec<Location> {
    STRIP
        .iter()
        .chain(HENDERSON)
        .chain(NORTH_VEGAS)
        .cloned()
        .collect()
}
