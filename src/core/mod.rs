//! Core types and constants for the facility directory

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
