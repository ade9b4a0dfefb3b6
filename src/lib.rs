//! Facility Directory Service
//!
//! An in-memory catalog of meeting rooms with live availability, plus a
//! location subsystem that maps a live GPS fix into building-local (x, z)
//! coordinates through a single configurable anchor.

pub mod core;
pub mod algorithms;
pub mod store;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{
    Anchor, BuildingPoint, BuildingPosition, GpsFix, Meeting, Room,
    DEFAULT_BUILDING_X, DEFAULT_BUILDING_Z, METERS_PER_DEGREE_LAT,
};
pub use crate::algorithms::{fix_to_building, resolve};
pub use crate::store::{AnchorStore, FixStore, RoomDirectory};
pub use crate::validation::{CoordinateValidator, DirectoryError, DirectoryResult, ValidationError};
pub use crate::utils::{ConfigError, LogLevel, ServiceConfig};
pub use crate::api::{router, ApiError, ApiResult, AppState};
