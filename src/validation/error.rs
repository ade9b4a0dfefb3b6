//! Error taxonomy for directory and location operations

use crate::validation::data::ValidationError;
use thiserror::Error;

/// Failures surfaced by the stores
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    /// Referenced room id does not exist
    #[error("Room not found")]
    NotFound { room_id: String },
    /// Out-of-range coordinate or malformed payload
    #[error("Invalid {field} = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },
}

impl DirectoryError {
    pub fn not_found(room_id: &str) -> Self {
        DirectoryError::NotFound {
            room_id: room_id.to_string(),
        }
    }

    /// Whether the failure was caused by caller input rather than a missing record
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DirectoryError::InvalidArgument { .. })
    }
}

impl From<ValidationError> for DirectoryError {
    fn from(error: ValidationError) -> Self {
        let (field, value) = match &error {
            ValidationError::LatitudeOutOfRange { lat } => ("lat", lat.to_string()),
            ValidationError::LongitudeOutOfRange { lon } => ("lon", lon.to_string()),
            ValidationError::NegativeAccuracy { accuracy } => ("accuracy", accuracy.to_string()),
            ValidationError::NonFiniteValue { field, value } => (*field, value.to_string()),
        };

        DirectoryError::InvalidArgument {
            field: field.to_string(),
            value,
            reason: error.to_string(),
        }
    }
}

/// Result type for store operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
