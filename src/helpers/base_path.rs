use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::constants::{defaults, envvars};
use crate::helpers::env_or;

pub static DEVICE_STORE: Lazy<PathBuf> =
    Lazy::new(|| env_or(envvars::DEVICE_STORE, defaults::DEVICE_STORE).into());

pub static DATA_DIR: Lazy<PathBuf> =
    Lazy::new(|| env_or(envvars::DATA_DIR, defaults::DATA_DIR).into());

pub static CREDENTIALS_FILE: Lazy<PathBuf> =
    Lazy::new(|| env_or(envvars::CREDENTIALS, defaults::CREDENTIALS_FILE).into());

pub static SETTINGS_DB: Lazy<PathBuf> = Lazy::new(|| DATA_DIR.join("kvs-db/kvstore.db"));
