//! NUT device configuration records and the logic that picks and
//! completes one of them for a managed device.

mod classify;
mod complete;
mod conf_format;
mod select;

use std::collections::BTreeMap;
use std::fmt;

pub use classify::{can_netxml, can_snmp, is_ats, is_epdu, is_ups, Capabilities, NETXML_DRIVER};
pub use complete::{complete_configuration, CompletedConfiguration};
pub use conf_format::{parse_configuration_file, ConfParseError};
pub use select::{
    best_snmp_mib_configuration, netxml_configuration, select_best_configuration, MibPriority,
    SNMP_MIB_PRIORITY,
};

/// Well-known field names.
pub mod fields {
    pub const NAME: &str = "name";
    pub const DRIVER: &str = "driver";
    pub const MIBS: &str = "mibs";
    pub const DESC: &str = "desc";
    pub const SYNCHRONOUS: &str = "synchronous";
    pub const TIMEOUT: &str = "timeout";
    pub const POLLFREQ: &str = "pollfreq";
    pub const POLLINTERVAL: &str = "pollinterval";
}

/// One candidate configuration of a NUT driver for a device.
///
/// Fields are kept sorted by key so that the serialized form is
/// deterministic. Unknown keys coming from scanning are passed through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceConfiguration {
    fields: BTreeMap<String, String>,
}

/// Mutually exclusive candidates for the same device, in discovery order.
pub type DeviceConfigurations = Vec<DeviceConfiguration>;

impl DeviceConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.get(fields::NAME)
    }

    pub fn driver(&self) -> Option<&str> {
        self.get(fields::DRIVER)
    }

    pub fn mibs(&self) -> Option<&str> {
        self.get(fields::MIBS)
    }

    pub fn desc(&self) -> Option<&str> {
        self.get(fields::DESC)
    }
}

impl<K, V> FromIterator<(K, V)> for DeviceConfiguration
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        DeviceConfiguration {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Canonical ups.conf text of the configuration.
impl fmt::Display for DeviceConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        conf_format::write_configuration(f, self)
    }
}
