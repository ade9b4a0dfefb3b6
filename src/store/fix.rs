//! Holder for the most recent GPS fix

use crate::core::GpsFix;
use crate::store::{read_lock, write_lock};
use crate::validation::{CoordinateValidator, DirectoryResult};
use log::debug;
use std::sync::RwLock;

/// Last-writer-wins store for the latest GPS reading; no history is kept
#[derive(Default)]
pub struct FixStore {
    fix: RwLock<Option<GpsFix>>,
}

impl FixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored fix after validating it
    pub fn report_fix(&self, lat: f64, lon: f64, accuracy: Option<f64>) -> DirectoryResult<GpsFix> {
        let fix = GpsFix { lat, lon, accuracy };
        CoordinateValidator::validate_fix(&fix)?;

        *write_lock(&self.fix) = Some(fix);
        debug!("GPS fix: ({:.6}, {:.6}) accuracy {:?}", lat, lon, accuracy);

        Ok(fix)
    }

    pub fn get_fix(&self) -> Option<GpsFix> {
        *read_lock(&self.fix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DirectoryError;

    #[test]
    fn test_starts_unset() {
        assert!(FixStore::new().get_fix().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let store = FixStore::new();
        store.report_fix(47.9, -122.2, Some(8.0)).unwrap();
        store.report_fix(47.91, -122.21, None).unwrap();

        assert_eq!(
            store.get_fix(),
            Some(GpsFix { lat: 47.91, lon: -122.21, accuracy: None })
        );
    }

    #[test]
    fn test_invalid_longitude_keeps_previous_fix() {
        let store = FixStore::new();
        let previous = store.report_fix(1.0, 2.0, Some(3.0)).unwrap();

        assert!(matches!(
            store.report_fix(200.0, 0.0, None),
            Err(DirectoryError::InvalidArgument { .. })
        ));
        assert!(store.report_fix(0.0, 200.0, None).is_err());
        assert_eq!(store.get_fix(), Some(previous));
    }

    #[test]
    fn test_negative_accuracy_rejected() {
        let store = FixStore::new();
        assert!(store.report_fix(0.0, 0.0, Some(-2.0)).is_err());
        assert!(store.get_fix().is_none());
    }
}
