//! HTTP routes for the room directory and the location subsystem

use crate::algorithms::resolve;
use crate::api::state::AppState;
use crate::api::types::{
    AnchorRequest, AnchorSetResponse, AnchorStateResponse, ApiResult, BuildingPositionResponse,
    FixStateResponse, GpsReport, StatusResponse,
};
use crate::core::Room;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::debug;
use std::collections::BTreeMap;
use tower_http::cors::{Any, CorsLayer};

/// Build the service router. Cross-origin access is unrestricted.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/rooms/:room_id", get(get_room))
        .route("/rooms/:room_id/toggle", post(toggle_room))
        .route("/location/gps", get(get_gps).post(report_gps))
        .route("/location/building", get(building_position))
        .route("/location/anchor", get(get_anchor).post(set_anchor))
        .layer(cors)
        .with_state(state)
}

async fn list_rooms(State(state): State<AppState>) -> Json<BTreeMap<String, Room>> {
    Json(state.rooms.list())
}

async fn get_room(State(state): State<AppState>, Path(room_id): Path<String>) -> ApiResult<Json<Room>> {
    Ok(Json(state.rooms.get(&room_id)?))
}

async fn toggle_room(State(state): State<AppState>, Path(room_id): Path<String>) -> ApiResult<Json<Room>> {
    Ok(Json(state.rooms.toggle_availability(&room_id)?))
}

async fn report_gps(
    State(state): State<AppState>,
    payload: Result<Json<GpsReport>, JsonRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let Json(report) = payload?;
    state.fixes.report_fix(report.lat, report.lon, report.accuracy)?;
    Ok(Json(StatusResponse::ok()))
}

async fn get_gps(State(state): State<AppState>) -> Json<FixStateResponse> {
    Json(FixStateResponse {
        fix: state.fixes.get_fix(),
    })
}

async fn building_position(State(state): State<AppState>) -> Json<BuildingPositionResponse> {
    let fix = state.fixes.get_fix();
    let anchor = state.anchors.get_anchor();
    let position = resolve(fix.as_ref(), anchor.as_ref());
    debug!("Resolved building position: {:?}", position);

    Json(position.into())
}

async fn set_anchor(
    State(state): State<AppState>,
    payload: Result<Json<AnchorRequest>, JsonRejection>,
) -> ApiResult<Json<AnchorSetResponse>> {
    let Json(request) = payload?;
    let anchor = state
        .anchors
        .set_anchor(request.lat, request.lon, request.building_x, request.building_z)?;

    Ok(Json(AnchorSetResponse {
        status: "ok".to_string(),
        anchor,
    }))
}

async fn get_anchor(State(state): State<AppState>) -> Json<AnchorStateResponse> {
    Json(AnchorStateResponse {
        anchor: state.anchors.get_anchor(),
    })
}
