//! HTTP interface
//!
//! Routes requests to the room directory and the location stores. All
//! handlers share one [`AppState`] constructed at startup.

pub mod routes;
pub mod state;
pub mod types;

pub use routes::router;
pub use state::AppState;
pub use types::{
    AnchorRequest, AnchorSetResponse, AnchorStateResponse, ApiError, ApiResult,
    BuildingPositionResponse, FixStateResponse, GpsReport, StatusResponse,
};
