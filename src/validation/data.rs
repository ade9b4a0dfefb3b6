//! Range checks for incoming GPS readings and anchor definitions
//!
//! Every store write goes through these checks first, so a rejected
//! reading never leaves a half-written record behind.

use crate::core::{Anchor, BuildingPoint, GpsFix, LATITUDE_RANGE, LONGITUDE_RANGE};
use thiserror::Error;

/// Reasons a coordinate payload is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("latitude {lat} outside [-90, 90] degrees")]
    LatitudeOutOfRange { lat: f64 },
    #[error("longitude {lon} outside [-180, 180] degrees")]
    LongitudeOutOfRange { lon: f64 },
    #[error("accuracy {accuracy} must be a non-negative distance in meters")]
    NegativeAccuracy { accuracy: f64 },
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },
}

/// Stateless validator for geodetic and building coordinates
pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Validate a WGS84 latitude/longitude pair
    pub fn validate_geodetic(lat: f64, lon: f64) -> Result<(), ValidationError> {
        // NaN fails `contains`, so it is reported as out of range
        if !LATITUDE_RANGE.contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange { lat });
        }

        if !LONGITUDE_RANGE.contains(&lon) {
            return Err(ValidationError::LongitudeOutOfRange { lon });
        }

        Ok(())
    }

    pub fn validate_accuracy(accuracy: Option<f64>) -> Result<(), ValidationError> {
        match accuracy {
            Some(value) if !value.is_finite() => Err(ValidationError::NonFiniteValue {
                field: "accuracy",
                value,
            }),
            Some(value) if value < 0.0 => Err(ValidationError::NegativeAccuracy { accuracy: value }),
            _ => Ok(()),
        }
    }

    pub fn validate_building_point(point: &BuildingPoint) -> Result<(), ValidationError> {
        if !point.x.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "buildingX",
                value: point.x,
            });
        }

        if !point.z.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "buildingZ",
                value: point.z,
            });
        }

        Ok(())
    }

    pub fn validate_fix(fix: &GpsFix) -> Result<(), ValidationError> {
        Self::validate_geodetic(fix.lat, fix.lon)?;
        Self::validate_accuracy(fix.accuracy)
    }

    pub fn validate_anchor(anchor: &Anchor) -> Result<(), ValidationError> {
        Self::validate_geodetic(anchor.lat, anchor.lon)?;
        Self::validate_building_point(&anchor.building_point())
    }
}
