//! In-memory room directory

use crate::core::Room;
use crate::store::{read_lock, write_lock};
use crate::validation::{DirectoryError, DirectoryResult};
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Directory of rooms keyed by identifier.
///
/// The identifier set is fixed at construction; only the `available` flag
/// of a room changes afterwards.
pub struct RoomDirectory {
    rooms: RwLock<BTreeMap<String, Room>>,
}

impl RoomDirectory {
    /// Build a directory from an initial room list. Later entries win on duplicate ids.
    pub fn new(rooms: Vec<Room>) -> Self {
        let rooms = rooms
            .into_iter()
            .map(|room| (room.id.clone(), room))
            .collect();

        Self {
            rooms: RwLock::new(rooms),
        }
    }

    /// Directory holding the standard room catalog
    pub fn seeded() -> Self {
        Self::new(super::seed::seeded_rooms())
    }

    /// Snapshot of every room, keyed and ordered by id
    pub fn list(&self) -> BTreeMap<String, Room> {
        read_lock(&self.rooms).clone()
    }

    pub fn get(&self, id: &str) -> DirectoryResult<Room> {
        read_lock(&self.rooms)
            .get(id)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(id))
    }

    /// Flip a room's availability and return the updated record
    pub fn toggle_availability(&self, id: &str) -> DirectoryResult<Room> {
        let mut rooms = write_lock(&self.rooms);
        let room = rooms.get_mut(id).ok_or_else(|| {
            debug!("Toggle requested for unknown room '{}'", id);
            DirectoryError::not_found(id)
        })?;

        room.available = !room.available;
        info!("Room '{}' is now {}", id, if room.available { "available" } else { "occupied" });

        Ok(room.clone())
    }

    pub fn len(&self) -> usize {
        read_lock(&self.rooms).len()
    }

    pub fn is_empty(&self) -> bool {
        read_lock(&self.rooms).is_empty()
    }

    /// Number of rooms currently marked available
    pub fn available_count(&self) -> usize {
        read_lock(&self.rooms).values().filter(|r| r.available).count()
    }
}

impl Default for RoomDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
