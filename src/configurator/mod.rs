//! Auto-configuration of NUT drivers and reconciliation of their services.
//!
//! `configure` and `erase` update the device store and record which driver
//! units need attention in a caller owned [`PendingChanges`]; `commit` then
//! applies all of it with one service manager call per operation.

mod asset;
mod pending;
mod sources;

use std::path::PathBuf;
use std::time::Duration;

use once_cell::unsync::OnceCell;
use thiserror::Error;

use crate::constants::defaults;
use crate::interfaces::{
    settings, CredentialStore, DeviceStore, Scanner, ServiceManager, StoreError, UnitOperation,
};
use crate::nut_config::{
    complete_configuration, select_best_configuration, CompletedConfiguration, ConfParseError,
};

pub use asset::DeviceAsset;
pub use pending::{driver_unit, CommitReport, PendingChanges, StepFailure};
pub use sources::{from_scanning, from_upsconf_block};

/// Unit reloaded whenever any driver unit was touched.
pub const SUPERVISOR_UNIT: &str = "nut-server";

#[derive(Error, Debug)]
pub enum ConfigureError {
    #[error("invalid device name '{0}'")]
    InvalidName(String),
    #[error("no suitable configuration found for device '{0}'")]
    NoCandidate(String),
    #[error("upsconf_block of device '{device}': {source}")]
    Block {
        device: String,
        source: ConfParseError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Configurator {
    store: DeviceStore,
    scanner: Box<dyn Scanner>,
    credentials: Box<dyn CredentialStore>,
    services: Box<dyn ServiceManager>,
    manage_systemctl: bool,
    scan_timeout: Duration,
    settings_db: Option<PathBuf>,
    polling_interval: OnceCell<String>,
}

impl Configurator {
    pub fn new(
        store: DeviceStore,
        scanner: Box<dyn Scanner>,
        credentials: Box<dyn CredentialStore>,
        services: Box<dyn ServiceManager>,
    ) -> Self {
        Configurator {
            store,
            scanner,
            credentials,
            services,
            manage_systemctl: true,
            scan_timeout: defaults::SCAN_TIMEOUT,
            settings_db: None,
            polling_interval: OnceCell::new(),
        }
    }

    /// When disabled, `commit` only regenerates the NUT configuration and
    /// leaves the service units to whoever manages them.
    pub fn manage_systemctl(mut self, manage: bool) -> Self {
        self.manage_systemctl = manage;
        self
    }

    /// Settings store the polling interval is read from.
    pub fn with_settings_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_db = Some(path.into());
        self
    }

    pub fn with_polling_interval(self, polling: impl Into<String>) -> Self {
        let polling_interval = OnceCell::new();
        let _ = polling_interval.set(polling.into());
        Configurator {
            polling_interval,
            ..self
        }
    }

    pub fn store(&self) -> &DeviceStore {
        &self.store
    }

    /// Loaded on first use and kept for the lifetime of the configurator.
    pub fn polling_interval(&self) -> &str {
        self.polling_interval.get_or_init(|| match &self.settings_db {
            Some(path) => settings::polling_interval(path),
            None => defaults::POLLING_INTERVAL.to_string(),
        })
    }

    /// Brings the persisted configuration of `name` up to date. Failing to
    /// find a usable configuration leaves everything untouched; the caller
    /// is expected to try again later.
    pub fn configure(
        &self,
        pending: &mut PendingChanges,
        name: &str,
        asset: &DeviceAsset,
    ) -> Result<(), ConfigureError> {
        validate_name(name)?;
        log::debug!("Auto-configuring device '{name}'...");

        let configs = match &asset.upsconf_block {
            Some(block) => from_upsconf_block(name, block).map_err(|source| {
                ConfigureError::Block {
                    device: name.to_string(),
                    source,
                }
            })?,
            None => from_scanning(
                name,
                asset,
                self.scanner.as_ref(),
                self.credentials.as_ref(),
                self.scan_timeout,
            ),
        };

        let Some(best) = select_best_configuration(&configs) else {
            log::error!("No suitable configuration found for device '{name}'.");
            return Err(ConfigureError::NoCandidate(name.to_string()));
        };

        let config = complete_configuration(best.clone(), name, self.polling_interval());
        self.update_device_configuration(pending, &config)?;
        Ok(())
    }

    /// Persists `config` if its text differs from what is stored, and
    /// schedules a restart of its driver. Returns whether it was written.
    pub fn update_device_configuration(
        &self,
        pending: &mut PendingChanges,
        config: &CompletedConfiguration,
    ) -> Result<bool, StoreError> {
        let name = config.name();
        let path = self.store.path_for(name);
        let old_configuration = self.store.read(name)?;
        let new_configuration = config.to_string();

        if old_configuration == new_configuration.as_bytes() {
            log::info!(
                "Configuration file '{}' unchanged, no actions to perform.",
                path.display()
            );
            return Ok(false);
        }

        log::info!(
            "Configuration file '{}' is outdated, creating new one.",
            path.display()
        );
        self.store.write(name, &new_configuration)?;
        pending.start(driver_unit(name));
        Ok(true)
    }

    /// Drops the persisted configuration of `name` and schedules its driver
    /// to be stopped. The driver is scheduled even if removal fails.
    pub fn erase(&self, pending: &mut PendingChanges, name: &str) -> Result<(), ConfigureError> {
        validate_name(name)?;
        log::info!(
            "Removing configuration file '{}'.",
            self.store.path_for(name).display()
        );
        pending.stop(driver_unit(name));
        self.store.remove(name)?;
        Ok(())
    }

    /// Applies the pending changes. Every step runs even if an earlier one
    /// failed, and `pending` is always left empty.
    pub fn commit(&self, pending: &mut PendingChanges) -> CommitReport {
        let (to_stop, to_start) = pending.take();
        let mut report = CommitReport::default();

        if self.manage_systemctl {
            for op in [UnitOperation::Disable, UnitOperation::Stop] {
                if !to_stop.is_empty() {
                    report.record(Some(op), self.services.systemctl(op, &to_stop));
                }
            }
        } else {
            log::info!("Updating NUT configs, expecting it to manage the service units as needed.");
        }

        report.record(None, self.services.regenerate_config());

        if self.manage_systemctl {
            for op in [UnitOperation::Restart, UnitOperation::Enable] {
                if !to_start.is_empty() {
                    report.record(Some(op), self.services.systemctl(op, &to_start));
                }
            }
            if !to_stop.is_empty() || !to_start.is_empty() {
                let op = UnitOperation::ReloadOrRestart;
                report.record(
                    Some(op),
                    self.services.systemctl(op, &[SUPERVISOR_UNIT.to_string()]),
                );
            }
        }

        for failure in &report.failures {
            log::error!("Commit step failed: {}", failure.error);
        }
        report
    }

    /// Devices that currently have a persisted configuration.
    pub fn known_devices(&self) -> Result<Vec<String>, StoreError> {
        self.store.known_devices()
    }
}

// Device names double as file names and section headers.
fn validate_name(name: &str) -> Result<(), ConfigureError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '[' | ']' | '\0') || c.is_whitespace());
    if bad {
        return Err(ConfigureError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_names() {
        assert!(validate_name("ups-1").is_ok());
        assert!(validate_name("epdu_2.rack3").is_ok());
        for bad in ["", ".", "..", "a/b", "a b", "[a]", "a\nb"] {
            assert!(validate_name(bad).is_err(), "{bad:?}");
        }
    }
}
