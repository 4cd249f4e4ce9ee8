use std::path::Path;

use kvstore::{DbRO, DbRW, KVStoreError};
use serde_json::Value;

use crate::constants::{defaults, keys};

/// Polling interval for the NUT drivers, as configured in the settings
/// store. Falls back to the default when the store or key is unavailable.
pub fn polling_interval(db_path: &Path) -> String {
    match read_polling_interval(db_path) {
        Ok(Some(polling)) => polling,
        Ok(None) => defaults::POLLING_INTERVAL.to_string(),
        Err(e) => {
            log::warn!(
                "Could not read polling interval from {}: {}",
                db_path.display(),
                e
            );
            defaults::POLLING_INTERVAL.to_string()
        }
    }
}

fn read_polling_interval(db_path: &Path) -> Result<Option<String>, KVStoreError> {
    if !db_path.exists() {
        return Ok(None);
    }
    let value: Option<Value> = get(db_path, keys::POLLING_INTERVAL)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            log::warn!("Ignoring unusable polling interval {other}");
            None
        }
        None => None,
    })
}

pub fn get(db_path: &Path, key: &str) -> Result<Option<Value>, KVStoreError> {
    DbRO::open(db_path)?.get(key)
}

pub fn set(db_path: &Path, key: &str, value: &Value) -> Result<(), KVStoreError> {
    DbRW::open(db_path)?.set(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_without_store() {
        let tempdir = tempfile::tempdir().unwrap();
        assert_eq!(polling_interval(&tempdir.path().join("absent.db")), "30");
    }

    #[test]
    fn string_and_number_values() {
        let tempdir = tempfile::tempdir().unwrap();
        let db = tempdir.path().join("kvs-db/kvstore.db");

        set(&db, keys::POLLING_INTERVAL, &json!("45")).unwrap();
        assert_eq!(polling_interval(&db), "45");

        set(&db, keys::POLLING_INTERVAL, &json!(60)).unwrap();
        assert_eq!(polling_interval(&db), "60");
    }

    #[test]
    fn default_for_unset_or_unusable_key() {
        let tempdir = tempfile::tempdir().unwrap();
        let db = tempdir.path().join("kvstore.db");

        set(&db, "other", &json!("x")).unwrap();
        assert_eq!(polling_interval(&db), "30");

        set(&db, keys::POLLING_INTERVAL, &json!({"a": 1})).unwrap();
        assert_eq!(polling_interval(&db), "30");
    }
}
