//! GPS to building-local coordinate transformation
//!
//! Uses an equirectangular (flat-earth) approximation around a single
//! anchor point. Accurate to within a few meters over a few kilometers,
//! which is more than the footprint of any building it is used for.
//!
//! Axis convention: +x points east, and north maps to -z. Client code
//! depends on this sign, so it must not be flipped here.

use crate::core::{Anchor, BuildingPoint, BuildingPosition, GpsFix, METERS_PER_DEGREE_LAT};
use nalgebra::Vector2;

/// Planar (east, south) displacement of `fix` from `anchor`, in meters
pub fn displacement_from_anchor(fix: &GpsFix, anchor: &Anchor) -> Vector2<f64> {
    let meters_per_degree_lon = anchor.lat.to_radians().cos() * METERS_PER_DEGREE_LAT;

    let dx = (fix.lon - anchor.lon) * meters_per_degree_lon;
    let dz = -(fix.lat - anchor.lat) * METERS_PER_DEGREE_LAT;

    Vector2::new(dx, dz)
}

/// Project a fix into the building plane using the anchor as reference
pub fn fix_to_building(fix: &GpsFix, anchor: &Anchor) -> BuildingPoint {
    let origin = Vector2::new(anchor.building_x, anchor.building_z);
    let local = origin + displacement_from_anchor(fix, anchor);

    BuildingPoint::new(local.x, local.y)
}

/// Resolve the current fix into building coordinates.
///
/// Returns [`BuildingPosition::NoFix`] until both a fix and an anchor are
/// available; that is a normal state, not an error. Results are not
/// clamped to the building footprint.
pub fn resolve(fix: Option<&GpsFix>, anchor: Option<&Anchor>) -> BuildingPosition {
    match (fix, anchor) {
        (Some(fix), Some(anchor)) => {
            let point = fix_to_building(fix, anchor);
            BuildingPosition::Located {
                x: point.x,
                z: point.z,
                accuracy: fix.accuracy,
            }
        }
        _ => BuildingPosition::NoFix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn fix(lat: f64, lon: f64) -> GpsFix {
        GpsFix { lat, lon, accuracy: None }
    }

    fn origin_anchor() -> Anchor {
        Anchor::new(0.0, 0.0, BuildingPoint::new(0.0, 0.0))
    }

    fn located(position: BuildingPosition) -> (f64, f64, Option<f64>) {
        match position {
            BuildingPosition::Located { x, z, accuracy } => (x, z, accuracy),
            BuildingPosition::NoFix => panic!("Expected a located position"),
        }
    }

    #[test]
    fn test_no_fix_without_inputs() {
        let anchor = origin_anchor();
        let reading = fix(0.0, 0.0);

        assert!(!resolve(None, None).has_fix());
        assert_eq!(resolve(Some(&reading), None), BuildingPosition::NoFix);
        assert_eq!(resolve(None, Some(&anchor)), BuildingPosition::NoFix);
    }

    #[test]
    fn test_fix_at_anchor_has_zero_displacement() {
        let anchor = Anchor::new(47.9, -122.2, BuildingPoint::new(50.0, 44.0));
        let (x, z, _) = located(resolve(Some(&fix(47.9, -122.2)), Some(&anchor)));

        assert!((x - 50.0).abs() < TOLERANCE);
        assert!((z - 44.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_east_displacement_at_equator() {
        let anchor = origin_anchor();
        let (x, z, _) = located(resolve(Some(&fix(0.0, 1.0)), Some(&anchor)));

        assert!((x - 111319.5).abs() < TOLERANCE);
        assert!(z.abs() < TOLERANCE);
    }

    #[test]
    fn test_moving_north_decreases_z() {
        let anchor = origin_anchor();
        let (x, z, _) = located(resolve(Some(&fix(1.0, 0.0)), Some(&anchor)));

        assert!(x.abs() < TOLERANCE);
        assert!((z + 111319.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_longitude_scaled_by_anchor_latitude() {
        let anchor = Anchor::new(60.0, 0.0, BuildingPoint::new(0.0, 0.0));
        let offset = displacement_from_anchor(&fix(60.0, 1.0), &anchor);

        // cos(60°) = 0.5
        assert!((offset.x - 111319.5 * 0.5).abs() < 1e-3);
        assert!(offset.y.abs() < TOLERANCE);
    }

    #[test]
    fn test_accuracy_passes_through() {
        let anchor = origin_anchor();
        let reading = GpsFix { lat: 0.0, lon: 0.0, accuracy: Some(4.5) };
        let (_, _, accuracy) = located(resolve(Some(&reading), Some(&anchor)));

        assert_eq!(accuracy, Some(4.5));
    }

    #[test]
    fn test_out_of_building_coordinates_not_clamped() {
        let anchor = Anchor::new(47.9, -122.2, BuildingPoint::new(50.0, 44.0));
        let point = fix_to_building(&fix(47.95, -122.1), &anchor);

        assert!(point.x > 1000.0);
        assert!(point.z < -1000.0);
    }
}
