//! Physical constants and service defaults

/// Meters spanned by one degree of latitude (equirectangular approximation)
pub const METERS_PER_DEGREE_LAT: f64 = 111319.5;

/// Building x coordinate used when an anchor is set without one (meters)
pub const DEFAULT_BUILDING_X: f64 = 50.0;

/// Building z coordinate used when an anchor is set without one (meters)
pub const DEFAULT_BUILDING_Z: f64 = 44.0;

/// Valid latitude range (degrees)
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range (degrees)
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
