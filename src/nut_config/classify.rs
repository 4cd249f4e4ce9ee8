use std::fmt;

use super::DeviceConfiguration;

const EPDU_MIBS: &[&str] = &[
    "eaton_epdu",
    "aphel_genesisII",
    "aphel_revelation",
    "pulizzi_switched1",
    "pulizzi_switched2",
    "emerson_avocent_pdu",
];

const SNMP_DRIVERS: &[&str] = &["snmp-ups", "snmp-ups-dmf", "snmp-ups-old"];

pub const NETXML_DRIVER: &str = "netxml-ups";

pub fn is_epdu(config: &DeviceConfiguration) -> bool {
    if config.mibs().is_some_and(|mibs| EPDU_MIBS.contains(&mibs)) {
        return true;
    }
    config.desc().is_some_and(|desc| desc.contains("epdu"))
}

// True suffix match: "mge-ats" is an ATS, "status" is not.
pub fn is_ats(config: &DeviceConfiguration) -> bool {
    config.mibs().is_some_and(|mibs| mibs.ends_with("ats"))
}

pub fn is_ups(config: &DeviceConfiguration) -> bool {
    !(is_epdu(config) || is_ats(config))
}

pub fn can_snmp(config: &DeviceConfiguration) -> bool {
    config
        .driver()
        .is_some_and(|driver| SNMP_DRIVERS.contains(&driver))
}

pub fn can_netxml(config: &DeviceConfiguration) -> bool {
    config.driver() == Some(NETXML_DRIVER)
}

/// Classification of a whole candidate list: each flag is set if any
/// candidate satisfies the corresponding predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub is_epdu: bool,
    pub is_ups: bool,
    pub is_ats: bool,
    pub can_snmp: bool,
    pub can_netxml: bool,
}

impl Capabilities {
    pub fn of(configs: &[DeviceConfiguration]) -> Self {
        Capabilities {
            is_epdu: configs.iter().any(is_epdu),
            is_ups: configs.iter().any(is_ups),
            is_ats: configs.iter().any(is_ats),
            can_snmp: configs.iter().any(can_snmp),
            can_netxml: configs.iter().any(can_netxml),
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "isEpdu: {}; isUps: {}; isAts: {}; canSnmp: {}; canNetXml: {}",
            self.is_epdu, self.is_ups, self.is_ats, self.can_snmp, self.can_netxml
        )
    }
}
