use gloo_storage::{LocalStorage, Storage};

use crate::models::{
    error::AppError, prediction::CommodityPrediction, time_range::TimeRange,
};

const KEY_PREFIX: &str = "saved-prediction";

/// Local bookmark store for commodity predictions, backed by browser
/// localStorage.
///
/// Records are keyed by the (commodity name, province name) pair; that pair
/// is the only identity a saved prediction has.
pub struct PredictionStore;

impl PredictionStore {
    fn key(commodity_name: &str, province_name: &str) -> String {
        format!("{KEY_PREFIX}:{commodity_name}|{province_name}")
    }

    /// Persists a prediction, replacing any record with the same name pair.
    pub fn save(record: &CommodityPrediction) -> Result<(), AppError> {
        LocalStorage::set(
            Self::key(&record.commodity_name, &record.province_name),
            record,
        )
        .map_err(|e| AppError::StorageError(e.to_string()))
    }

    /// Reads a saved prediction, or `None` when absent. An unreadable
    /// record is logged and treated as absent.
    pub fn load(commodity_name: &str, province_name: &str) -> Option<CommodityPrediction> {
        match LocalStorage::get(Self::key(commodity_name, province_name)) {
            Ok(record) => Some(record),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                gloo::console::warn!(format!("Unreadable saved prediction: {e}"));
                None
            }
        }
    }

    /// Reads a saved prediction with its series cut down to the window named
    /// by `range_code` (bookmark encoding). Unknown codes read as absent.
    pub fn load_windowed(
        commodity_name: &str,
        province_name: &str,
        range_code: u8,
    ) -> Option<CommodityPrediction> {
        let range = TimeRange::from_bookmark_code(range_code)?;
        Self::load(commodity_name, province_name).map(|record| record.windowed(range))
    }

    /// Whether a record exists for the name pair.
    pub fn is_saved(commodity_name: &str, province_name: &str) -> bool {
        Self::load(commodity_name, province_name).is_some()
    }

    /// Removes the record matching the name pair exactly. Removing an absent
    /// record is a no-op.
    pub fn delete(commodity_name: &str, province_name: &str) {
        LocalStorage::delete(Self::key(commodity_name, province_name));
    }

    /// All saved predictions currently in the store.
    pub fn list() -> Vec<CommodityPrediction> {
        let storage = LocalStorage::raw();
        let length = storage.length().unwrap_or(0);

        let mut records = Vec::new();
        for index in 0..length {
            let Ok(Some(key)) = storage.key(index) else {
                continue;
            };
            if !key.starts_with(KEY_PREFIX) {
                continue;
            }
            if let Ok(record) = LocalStorage::get(&key) {
                records.push(record);
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_exact_name_pair() {
        assert_eq!(
            PredictionStore::key("Rice", "East Java"),
            "saved-prediction:Rice|East Java"
        );
    }

    #[test]
    fn test_keys_differ_per_pair() {
        assert_ne!(
            PredictionStore::key("Rice", "East Java"),
            PredictionStore::key("Rice", "West Java")
        );
        assert_ne!(
            PredictionStore::key("Rice", "East Java"),
            PredictionStore::key("Corn", "East Java")
        );
    }
}
