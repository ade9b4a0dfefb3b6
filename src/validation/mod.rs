//! Input validation and error taxonomy

pub mod data;
pub mod error;

pub use data::{CoordinateValidator, ValidationError};
pub use error::{DirectoryError, DirectoryResult};
