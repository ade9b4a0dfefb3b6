//! Request/response payloads and HTTP error mapping

use crate::core::{Anchor, BuildingPosition, GpsFix};
use crate::validation::DirectoryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Unknown room id
    #[error("{0}")]
    NotFound(String),
    /// Out-of-range values or a body that does not match the payload shape
    #[error("{0}")]
    InvalidArgument(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::NotFound { .. } => ApiError::NotFound(error.to_string()),
            DirectoryError::InvalidArgument { .. } => ApiError::InvalidArgument(error.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status != StatusCode::NOT_FOUND {
            warn!("Rejected request: {}", self);
        }

        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

/// Body of `POST /location/gps`
#[derive(Debug, Clone, Deserialize)]
pub struct GpsReport {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
}

/// Body of `POST /location/anchor`; omitted building coordinates use the store default
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorRequest {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub building_x: Option<f64>,
    #[serde(default)]
    pub building_z: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorSetResponse {
    pub status: String,
    pub anchor: Anchor,
}

/// Current anchor, `null` while unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorStateResponse {
    pub anchor: Option<Anchor>,
}

/// Current fix, `null` while unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixStateResponse {
    pub fix: Option<GpsFix>,
}

/// `{hasFix: false}` or `{hasFix: true, x, z, accuracy}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPositionResponse {
    pub has_fix: bool,
    #[serde(flatten)]
    pub location: Option<LocatedPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedPosition {
    pub x: f64,
    pub z: f64,
    pub accuracy: Option<f64>,
}

impl From<BuildingPosition> for BuildingPositionResponse {
    fn from(position: BuildingPosition) -> Self {
        match position {
            BuildingPosition::NoFix => Self {
                has_fix: false,
                location: None,
            },
            BuildingPosition::Located { x, z, accuracy } => Self {
                has_fix: true,
                location: Some(LocatedPosition { x, z, accuracy }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_fix_serialization() {
        let body = serde_json::to_value(BuildingPositionResponse::from(BuildingPosition::NoFix)).unwrap();
        assert_eq!(body, json!({"hasFix": false}));
    }

    #[test]
    fn test_located_serialization_keeps_null_accuracy() {
        let position = BuildingPosition::Located { x: 1.5, z: -2.0, accuracy: None };
        let body = serde_json::to_value(BuildingPositionResponse::from(position)).unwrap();
        assert_eq!(body, json!({"hasFix": true, "x": 1.5, "z": -2.0, "accuracy": null}));
    }

    #[test]
    fn test_anchor_request_defaults() {
        let request: AnchorRequest = serde_json::from_value(json!({"lat": 1.0, "lon": 2.0})).unwrap();
        assert_eq!(request.building_x, None);
        assert_eq!(request.building_z, None);

        let request: AnchorRequest =
            serde_json::from_value(json!({"lat": 1.0, "lon": 2.0, "buildingX": 7.0})).unwrap();
        assert_eq!(request.building_x, Some(7.0));
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ApiError::NotFound("Room not found".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidArgument("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
