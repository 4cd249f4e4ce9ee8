pub const POLLING_INTERVAL: &str = "nut/polling_interval";
