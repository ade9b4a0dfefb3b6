//! Coordinate transformation algorithms

pub mod building_transform;

pub use building_transform::{displacement_from_anchor, fix_to_building, resolve};
