//! Where candidate configurations come from: an operator supplied block
//! or an active scan of the device.

use std::time::Duration;

use crate::interfaces::{Credential, CredentialStore, ScanProtocol, Scanner};
use crate::nut_config::{
    fields, parse_configuration_file, ConfParseError, DeviceConfiguration, DeviceConfigurations,
};

use super::asset::DeviceAsset;

/// Candidates from an explicit `upsconf_block`.
///
/// The first character of the block is the line separator for the rest of
/// it. A block starting with `[` carries its own section header; otherwise
/// one is synthesized from the device name. A block too short to hold any
/// content yields a configuration with just the name.
pub fn from_upsconf_block(name: &str, block: &str) -> Result<DeviceConfigurations, ConfParseError> {
    let mut chars = block.chars();
    let separator = match chars.next() {
        Some(sep) if sep != '\0' => sep,
        _ => return Ok(name_only(name)),
    };
    let content = chars.as_str();
    if content.is_empty() || content.starts_with('\0') {
        log::info!(
            "Device '{name}' is configured with an empty explicit upsconf_block from its asset \
             (adding asset name as NUT device-tag with no config)."
        );
        return Ok(name_only(name));
    }

    let content = content.replace(separator, "\n");
    if content.starts_with('[') {
        log::info!(
            "Device '{name}' is configured with a complete explicit upsconf_block from its asset, \
             including a custom NUT device-tag:\n{content}"
        );
        parse_configuration_file(&content)
    } else {
        log::info!(
            "Device '{name}' is configured with a content-only explicit upsconf_block from its asset \
             (prepending asset name as NUT device-tag):\n{content}"
        );
        parse_configuration_file(&format!("[{name}]\n{content}\n"))
    }
}

fn name_only(name: &str) -> DeviceConfigurations {
    let mut config = DeviceConfiguration::new();
    config.set(fields::NAME, name);
    vec![config]
}

/// Candidates from scanning the device.
///
/// SNMPv3 credentials are tried in order until one yields results, then
/// SNMPv1 ones if v3 found nothing. NetXML is always scanned and its
/// results appended. Unreachable collaborators count as empty results.
pub fn from_scanning(
    name: &str,
    asset: &DeviceAsset,
    scanner: &dyn Scanner,
    credentials: &dyn CredentialStore,
    timeout: Duration,
) -> DeviceConfigurations {
    let Some(address) = asset.address() else {
        log::error!("Device '{name}' has no IP address, cannot scan it.");
        return vec![];
    };

    let snmp_protocol = if asset.upsconf_enable_dmf {
        ScanProtocol::SnmpDmf
    } else {
        ScanProtocol::Snmp
    };

    let documents = credentials.credentials().unwrap_or_else(|e| {
        log::warn!("Failed to fetch credentials from security wallet: {e}");
        vec![]
    });
    let (v3, v1): (Vec<&Credential>, Vec<&Credential>) = (
        documents.iter().filter(|c| c.is_snmpv3()).collect(),
        documents.iter().filter(|c| c.is_snmpv1()).collect(),
    );
    log::debug!(
        "Fetched {} SNMPv3 and {} SNMPv1 credentials from security wallet.",
        v3.len(),
        v1.len()
    );

    let mut configs = scan_with_credentials(scanner, snmp_protocol, address, timeout, &v3, "SNMPv3");
    if configs.is_empty() {
        configs = scan_with_credentials(scanner, snmp_protocol, address, timeout, &v1, "SNMPv1");
    }

    log::info!("Scanning NetXML protocol at '{address}'...");
    configs.extend(scan_or_empty(scanner, ScanProtocol::NetXml, address, timeout, None));
    configs
}

fn scan_with_credentials(
    scanner: &dyn Scanner,
    protocol: ScanProtocol,
    address: &str,
    timeout: Duration,
    credentials: &[&Credential],
    version: &str,
) -> DeviceConfigurations {
    let total = credentials.len();
    for (index, credential) in credentials.iter().enumerate() {
        let number = index + 1;
        log::info!("Scanning {version} protocol (credential {number}/{total}) at '{address}'...");
        let configs = scan_or_empty(scanner, protocol, address, timeout, Some(*credential));
        if !configs.is_empty() {
            log::info!(
                "{version} credential {number}/{total} at '{address}' is suitable, bail out of SNMP scanning."
            );
            return configs;
        }
    }
    vec![]
}

fn scan_or_empty(
    scanner: &dyn Scanner,
    protocol: ScanProtocol,
    address: &str,
    timeout: Duration,
    credential: Option<&Credential>,
) -> DeviceConfigurations {
    scanner
        .scan(protocol, address, timeout, credential)
        .unwrap_or_else(|e| {
            log::warn!("{protocol} scan of '{address}' failed: {e}");
            vec![]
        })
}
