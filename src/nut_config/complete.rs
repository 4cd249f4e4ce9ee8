use std::ops::Deref;

use super::classify::{can_netxml, can_snmp, is_epdu};
use super::{fields, DeviceConfiguration};

const NETXML_TIMEOUT: &str = "15";

/// A configuration ready to be persisted: it always carries a `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedConfiguration(DeviceConfiguration);

impl CompletedConfiguration {
    pub fn name(&self) -> &str {
        self.0.name().unwrap_or_default()
    }
}

impl Deref for CompletedConfiguration {
    type Target = DeviceConfiguration;

    fn deref(&self) -> &DeviceConfiguration {
        &self.0
    }
}

/// Fills in the fields derived from the device name, the protocol and the
/// polling interval. Existing fields are kept, except `name`.
pub fn complete_configuration(
    mut config: DeviceConfiguration,
    name: &str,
    polling_interval: &str,
) -> CompletedConfiguration {
    config.set(fields::NAME, name);
    if is_epdu(&config) && can_snmp(&config) {
        config.set(fields::SYNCHRONOUS, "yes");
    }
    if can_netxml(&config) {
        config.set(fields::TIMEOUT, NETXML_TIMEOUT);
    }
    if can_snmp(&config) {
        config.set(fields::POLLFREQ, polling_interval);
    } else {
        config.set(fields::POLLINTERVAL, polling_interval);
    }
    CompletedConfiguration(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> DeviceConfiguration {
        pairs.iter().copied().collect()
    }

    #[test]
    fn snmp_ups() {
        let done = complete_configuration(
            config(&[("driver", "snmp-ups"), ("mibs", "mge-other"), ("name", "nutdev1")]),
            "ups1",
            "30",
        );
        assert_eq!(done.name(), "ups1");
        assert_eq!(done.get("pollfreq"), Some("30"));
        assert!(!done.contains("pollinterval"));
        assert!(!done.contains("synchronous"));
        assert!(!done.contains("timeout"));
        assert_eq!(done.mibs(), Some("mge-other"));
    }

    #[test]
    fn snmp_epdu_is_synchronous() {
        let done = complete_configuration(
            config(&[("driver", "snmp-ups"), ("mibs", "eaton_epdu")]),
            "pdu1",
            "45",
        );
        assert_eq!(done.get("synchronous"), Some("yes"));
        assert_eq!(done.get("pollfreq"), Some("45"));
    }

    #[test]
    fn netxml_gets_timeout_and_pollinterval() {
        let done = complete_configuration(
            config(&[("driver", "netxml-ups"), ("desc", "epdu over xml")]),
            "ups2",
            "30",
        );
        assert_eq!(done.get("timeout"), Some("15"));
        assert_eq!(done.get("pollinterval"), Some("30"));
        assert!(!done.contains("pollfreq"));
        assert!(!done.contains("synchronous"));
    }

    #[test]
    fn bare_name_only() {
        let done = complete_configuration(DeviceConfiguration::new(), "dev", "30");
        assert_eq!(
            *done,
            config(&[("name", "dev"), ("pollinterval", "30")])
        );
    }
}
