mod apply;
mod configure;
mod kvs;

pub use apply::apply;
pub use configure::{configure, erase, list};
pub use kvs::{kvs_get, kvs_set};

use anyhow::{anyhow, Result};

use nutconf::configurator::{CommitReport, Configurator};
use nutconf::constants::{defaults, envvars};
use nutconf::helpers::{base_path, env_flag, env_or};
use nutconf::interfaces::{DeviceStore, JsonCredentialStore, NutScanner, Systemctl};

fn configurator_from_env() -> Configurator {
    Configurator::new(
        DeviceStore::new(base_path::DEVICE_STORE.as_path()),
        Box::new(NutScanner::new(env_or(
            envvars::SCANNER_CMD,
            defaults::SCANNER_CMD,
        ))),
        Box::new(JsonCredentialStore::new(base_path::CREDENTIALS_FILE.as_path())),
        Box::new(Systemctl::new(
            env_or(envvars::SYSTEMCTL_CMD, defaults::SYSTEMCTL_CMD),
            env_or(envvars::HELPER_CMD, defaults::HELPER_CMD),
        )),
    )
    .manage_systemctl(env_flag(envvars::MANAGE_SYSTEMCTL, true))
    .with_settings_db(base_path::SETTINGS_DB.as_path())
}

fn check_commit(report: CommitReport) -> Result<()> {
    if report.is_success() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} service operation(s) failed during commit",
            report.failures.len()
        ))
    }
}
