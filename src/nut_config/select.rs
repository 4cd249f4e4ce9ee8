use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::{can_netxml, Capabilities};
use super::DeviceConfiguration;

/// One entry of the SNMP MIB preference table.
#[derive(Debug)]
pub struct MibPriority {
    pattern: Regex,
    pub description: &'static str,
}

impl MibPriority {
    fn new(pattern: &str, description: &'static str) -> Self {
        MibPriority {
            // Anchored so that the whole MIB name has to match
            pattern: Regex::new(&format!("^(?:{pattern})$")).expect("invalid MIB priority pattern"),
            description,
        }
    }

    pub fn matches(&self, mibs: &str) -> bool {
        self.pattern.is_match(mibs)
    }
}

/// MIBs in order of preference; the last entry accepts any non-empty MIB.
pub static SNMP_MIB_PRIORITY: Lazy<Vec<MibPriority>> = Lazy::new(|| {
    vec![
        MibPriority::new("pw.*", "Powerware"),
        MibPriority::new("mge.*", "MGE"),
        MibPriority::new(".+", "any MIB"),
    ]
});

pub fn best_snmp_mib_configuration(configs: &[DeviceConfiguration]) -> Option<&DeviceConfiguration> {
    SNMP_MIB_PRIORITY.iter().find_map(|priority| {
        let found = configs
            .iter()
            .find(|config| config.mibs().is_some_and(|mibs| priority.matches(mibs)));
        if let Some(config) = found {
            log::debug!(
                "Selected MIB '{}' ({})",
                config.mibs().unwrap_or_default(),
                priority.description
            );
        }
        found
    })
}

pub fn netxml_configuration(configs: &[DeviceConfiguration]) -> Option<&DeviceConfiguration> {
    configs.iter().find(|config| can_netxml(config))
}

/// Picks the configuration to use out of the candidates discovered for a
/// single device. Ties are always broken by discovery order.
pub fn select_best_configuration(configs: &[DeviceConfiguration]) -> Option<&DeviceConfiguration> {
    let caps = Capabilities::of(configs);
    log::debug!("Configurations: {}; {}.", configs.len(), caps);

    if caps.can_snmp && (caps.is_epdu || caps.is_ats) {
        log::debug!("SNMP capable ePDU/ATS => Use SNMP.");
        best_snmp_mib_configuration(configs)
    } else if caps.can_netxml {
        log::debug!("NetXML capable device => Use NetXML.");
        netxml_configuration(configs)
    } else if caps.can_snmp {
        log::debug!("SNMP capable device => Use SNMP.");
        best_snmp_mib_configuration(configs)
    } else {
        log::debug!("Unsure of device type => Use first configuration.");
        configs.first()
    }
}
