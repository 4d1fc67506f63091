//! Length conversions used by the transit derivation (IAU 2015 nominal values).

pub const SOLAR_RADIUS_M: f64 = 6.957e8;
pub const JUPITER_RADIUS_M: f64 = 7.1492e7;
pub const ASTRONOMICAL_UNIT_M: f64 = 1.495_978_707e11;

/// Jupiter radii per solar radius.
pub const RSUN_TO_RJUP: f64 = SOLAR_RADIUS_M / JUPITER_RADIUS_M;

/// Astronomical units per solar radius.
pub const RSUN_TO_AU: f64 = SOLAR_RADIUS_M / ASTRONOMICAL_UNIT_M;
