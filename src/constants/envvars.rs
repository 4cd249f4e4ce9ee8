pub const LOG_LEVEL: &str = "LOGGING_LEVEL";

pub const DEVICE_STORE: &str = "NUTCONF_DEVICE_STORE";
pub const DATA_DIR: &str = "NUTCONF_DATA_DIR";
pub const CREDENTIALS: &str = "NUTCONF_CREDENTIALS";
pub const MANAGE_SYSTEMCTL: &str = "NUTCONF_MANAGE_SYSTEMCTL";

pub const SYSTEMCTL_CMD: &str = "NUTCONF_SYSTEMCTL_CMD";
pub const HELPER_CMD: &str = "NUTCONF_HELPER_CMD";
pub const SCANNER_CMD: &str = "NUTCONF_SCANNER_CMD";

pub const SNAP_COMMON: &str = "SNAP_COMMON";
