//! Holder for the single active GPS/building anchor

use crate::core::{Anchor, BuildingPoint};
use crate::store::{read_lock, write_lock};
use crate::validation::{CoordinateValidator, DirectoryResult};
use log::info;
use std::sync::RwLock;

/// Stores at most one anchor; starts unset and is replaced wholesale
pub struct AnchorStore {
    anchor: RwLock<Option<Anchor>>,
    /// Building point used when a caller omits one
    default_building: BuildingPoint,
}

impl AnchorStore {
    pub fn new() -> Self {
        Self::with_default_building(BuildingPoint::default())
    }

    pub fn with_default_building(default_building: BuildingPoint) -> Self {
        Self {
            anchor: RwLock::new(None),
            default_building,
        }
    }

    pub fn default_building(&self) -> BuildingPoint {
        self.default_building
    }

    /// Replace the anchor. Omitted building coordinates fall back to the
    /// configured default. Invalid input leaves the stored anchor untouched.
    pub fn set_anchor(
        &self,
        lat: f64,
        lon: f64,
        building_x: Option<f64>,
        building_z: Option<f64>,
    ) -> DirectoryResult<Anchor> {
        let building = BuildingPoint::new(
            building_x.unwrap_or(self.default_building.x),
            building_z.unwrap_or(self.default_building.z),
        );
        let anchor = Anchor::new(lat, lon, building);
        CoordinateValidator::validate_anchor(&anchor)?;

        *write_lock(&self.anchor) = Some(anchor);
        info!(
            "Anchor set: ({:.6}, {:.6}) -> building ({:.2}, {:.2})",
            lat, lon, building.x, building.z
        );

        Ok(anchor)
    }

    /// Current anchor, or `None` while unset
    pub fn get_anchor(&self) -> Option<Anchor> {
        *read_lock(&self.anchor)
    }
}

impl Default for AnchorStore {
    fn default() -> Self {
        Self::new()
    }
}
