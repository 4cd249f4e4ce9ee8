use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("could not {action} {}: {source}", .path.display())]
pub struct StoreError {
    action: &'static str,
    path: PathBuf,
    source: std::io::Error,
}

/// Directory holding one persisted configuration file per device, named
/// after the device identifier.
#[derive(Clone, Debug)]
pub struct DeviceStore {
    dir: PathBuf,
}

impl DeviceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DeviceStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, device: &str) -> PathBuf {
        self.dir.join(device)
    }

    /// Raw persisted configuration; a missing file reads as empty. The
    /// contents are not required to be valid UTF-8.
    pub fn read(&self, device: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(device);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StoreError {
                action: "read",
                path,
                source,
            }),
        }
    }

    /// Replaces the persisted configuration, creating the store if needed.
    pub fn write(&self, device: &str, contents: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError {
            action: "create",
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(device);
        fs::write(&path, contents).map_err(|source| StoreError {
            action: "write",
            path,
            source,
        })
    }

    /// Returns whether a file was actually removed.
    pub fn remove(&self, device: &str) -> Result<bool, StoreError> {
        let path = self.path_for(device);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError {
                action: "remove",
                path,
                source,
            }),
        }
    }

    /// Identifiers of all devices with a persisted configuration, sorted.
    pub fn known_devices(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(source) => {
                return Err(StoreError {
                    action: "list",
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut devices = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError {
                action: "list",
                path: self.dir.clone(),
                source,
            })?;
            if entry.file_type().is_ok_and(|t| t.is_file()) {
                if let Some(name) = entry.file_name().to_str() {
                    devices.push(name.to_string());
                }
            }
        }
        devices.sort();
        Ok(devices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_is_empty() {
        let tempdir = tempfile::tempdir().unwrap();
        let store = DeviceStore::new(tempdir.path().join("devices"));
        assert!(store.read("ups1").unwrap().is_empty());
    }

    #[test]
    fn write_creates_directory_and_replaces() {
        let tempdir = tempfile::tempdir().unwrap();
        let store = DeviceStore::new(tempdir.path().join("a/b/devices"));
        store.write("ups1", "first, longer content").unwrap();
        store.write("ups1", "second").unwrap();
        assert_eq!(store.read("ups1").unwrap(), b"second");
    }

    #[test]
    fn read_returns_raw_bytes() {
        let tempdir = tempfile::tempdir().unwrap();
        let store = DeviceStore::new(tempdir.path());
        fs::write(store.path_for("ups1"), [0xff, 0xfe, b'\n']).unwrap();
        assert_eq!(store.read("ups1").unwrap(), [0xff, 0xfe, b'\n']);
    }

    #[test]
    fn remove_missing_is_not_an_error() {
        let tempdir = tempfile::tempdir().unwrap();
        let store = DeviceStore::new(tempdir.path());
        assert!(!store.remove("ups1").unwrap());
        store.write("ups1", "x").unwrap();
        assert!(store.remove("ups1").unwrap());
        assert!(!store.path_for("ups1").exists());
    }

    #[test]
    fn known_devices_lists_files_only() {
        let tempdir = tempfile::tempdir().unwrap();
        let store = DeviceStore::new(tempdir.path().join("devices"));
        assert!(store.known_devices().unwrap().is_empty());

        store.write("ups2", "x").unwrap();
        store.write("epdu1", "x").unwrap();
        fs::create_dir(store.dir().join("subdir")).unwrap();
        assert_eq!(store.known_devices().unwrap(), vec!["epdu1", "ups2"]);
    }
}
