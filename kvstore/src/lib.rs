//! Small SQLite-backed key-value store holding node settings.
//!
//! Values are stored as JSON blobs, so any `Serialize` type can be kept
//! under a string key. Readers open the database read-only and never
//! create it; writers create both the parent directory and the table.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const TABLENAME: &str = "kvstore";
const KEY_FIELD: &str = "key";
const VALUE_FIELD: &str = "value";

#[derive(Error, Debug)]
pub enum KVStoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not (de)serialize value for key '{key}': {source}")]
    Json {
        key: String,
        source: serde_json::Error,
    },
    #[error("could not create store directory: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KVStoreError>;

pub struct AccessRO;
pub struct AccessRW;

pub struct Db<AccessTag>(Connection, AccessTag);

pub type DbRW = Db<AccessRW>;
pub type DbRO = Db<AccessRO>;

// Methods common to read-only and read-write connections
impl<AccessTag> Db<AccessTag> {
    fn select(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.0
            .query_row(
                &format!("SELECT {VALUE_FIELD} FROM '{TABLENAME}' WHERE {KEY_FIELD} = ?1"),
                [key],
                |r| r.get::<_, Vec<u8>>(0),
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn get<T: DeserializeOwned>(&self, key: impl AsRef<str>) -> Result<Option<T>> {
        let key = key.as_ref();
        self.select(key)?
            .map(|v| serde_json::from_slice::<T>(&v))
            .transpose()
            .map_err(|source| KVStoreError::Json {
                key: key.to_string(),
                source,
            })
    }
}

impl DbRO {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        log::trace!("Opening {} read-only", path.as_ref().display());
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Db(connection, AccessRO))
    }
}

impl DbRW {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        log::trace!("Opening {} read-write", path.as_ref().display());
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let connection = Connection::open(path)?;
        connection.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS '{TABLENAME}' (
                {KEY_FIELD} TEXT PRIMARY KEY NOT NULL,
                {VALUE_FIELD} BLOB NOT NULL
                )"
            ),
            [],
        )?;

        Ok(Db(connection, AccessRW))
    }

    fn upsert(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut stmt = self.0.prepare(&format!(
            "INSERT INTO '{TABLENAME}' ({KEY_FIELD}, {VALUE_FIELD}) values (?1, ?2)
            ON CONFLICT({KEY_FIELD}) DO UPDATE SET {VALUE_FIELD}=?2",
        ))?;
        let res = stmt.execute(params![key, value])?;
        log::trace!("Upserted {res} row(s) for key '{key}'");
        Ok(())
    }

    pub fn set<V: Serialize>(&self, key: impl AsRef<str>, value: V) -> Result<()> {
        let key = key.as_ref();
        let blob = serde_json::to_vec(&value).map_err(|source| KVStoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.upsert(key, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_open_of_missing_db_fails() {
        let tempdir = tempfile::tempdir().unwrap();
        assert!(DbRO::open(tempdir.path().join("absent.db")).is_err());
    }
}
