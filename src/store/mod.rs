//! Process-wide state stores
//!
//! Each store guards its data with a single `RwLock`, so every mutation is
//! atomic with respect to concurrent readers.

pub mod anchor;
pub mod fix;
pub mod rooms;
pub mod seed;

pub use anchor::AnchorStore;
pub use fix::FixStore;
pub use rooms::RoomDirectory;
pub use seed::seeded_rooms;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Writers only ever assign whole values, so a poisoned lock still guards
// consistent data and can be recovered.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
