use std::time::Duration;

pub const LOG_LEVEL: &str = "INFO";

pub const DEVICE_STORE: &str = "/var/lib/fty/fty-nut/devices";
pub const DATA_DIR: &str = "/var/lib/fty/fty-nut";
pub const CREDENTIALS_FILE: &str = "/etc/fty-nut/credentials.json";

pub const POLLING_INTERVAL: &str = "30";
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(10);

pub const SYSTEMCTL_CMD: &str = "sudo systemctl";
pub const HELPER_CMD: &str = "sudo fty-nutconfig";
pub const SCANNER_CMD: &str = "nut-scanner";
