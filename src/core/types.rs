//! Core data types for the facility directory

use serde::{Deserialize, Serialize};

/// A single entry in a room's schedule for the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Time range, e.g. "10:00–12:00"
    pub time: String,
    pub title: String,
    pub organizer: String,
}

impl Meeting {
    pub fn new(time: &str, title: &str, organizer: &str) -> Self {
        Self {
            time: time.to_string(),
            title: title.to_string(),
            organizer: organizer.to_string(),
        }
    }
}

/// Bookable room with its live availability and today's meetings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Seating capacity (always > 0)
    pub capacity: u32,
    /// Live availability flag, the only mutable field
    pub available: bool,
    /// Schedule for the day, in order
    pub meetings_today: Vec<Meeting>,
}

/// GPS reading in geodetic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Horizontal accuracy in meters, if the receiver reported one
    pub accuracy: Option<f64>,
}

/// Point in the building-local plane (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingPoint {
    pub x: f64,
    pub z: f64,
}

impl BuildingPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

impl Default for BuildingPoint {
    fn default() -> Self {
        Self {
            x: super::DEFAULT_BUILDING_X,
            z: super::DEFAULT_BUILDING_Z,
        }
    }
}

/// Correspondence between one GPS coordinate and one building coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    pub lat: f64,
    pub lon: f64,
    pub building_x: f64,
    pub building_z: f64,
}

impl Anchor {
    pub fn new(lat: f64, lon: f64, building: BuildingPoint) -> Self {
        Self {
            lat,
            lon,
            building_x: building.x,
            building_z: building.z,
        }
    }

    pub fn building_point(&self) -> BuildingPoint {
        BuildingPoint::new(self.building_x, self.building_z)
    }
}

/// Result of resolving the current fix into building coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildingPosition {
    /// Anchor or fix not yet set
    NoFix,
    Located {
        x: f64,
        z: f64,
        accuracy: Option<f64>,
    },
}

impl BuildingPosition {
    pub fn has_fix(&self) -> bool {
        matches!(self, BuildingPosition::Located { .. })
    }
}
