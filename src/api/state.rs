//! Shared handler state

use crate::store::{AnchorStore, FixStore, RoomDirectory};
use crate::utils::ServiceConfig;
use std::sync::Arc;

/// Store handles injected into every request handler
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<RoomDirectory>,
    pub anchors: Arc<AnchorStore>,
    pub fixes: Arc<FixStore>,
}

impl AppState {
    pub fn new(rooms: RoomDirectory, anchors: AnchorStore, fixes: FixStore) -> Self {
        Self {
            rooms: Arc::new(rooms),
            anchors: Arc::new(anchors),
            fixes: Arc::new(fixes),
        }
    }

    /// Seeded room catalog, empty anchor and fix, configured default building point
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            RoomDirectory::seeded(),
            AnchorStore::with_default_building(config.default_building),
            FixStore::new(),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}
