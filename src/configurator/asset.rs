use serde::Deserialize;

/// What the fleet agent knows about a managed power device.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DeviceAsset {
    /// Network address used for scanning.
    #[serde(default)]
    pub ip: Option<String>,
    /// Operator supplied configuration. The first character is the line
    /// separator used in the rest of the text.
    #[serde(default)]
    pub upsconf_block: Option<String>,
    /// Scan with the DMF flavour of the SNMP driver.
    #[serde(default)]
    pub upsconf_enable_dmf: bool,
}

impl DeviceAsset {
    pub fn with_ip(ip: impl Into<String>) -> Self {
        DeviceAsset {
            ip: Some(ip.into()),
            ..Default::default()
        }
    }

    pub fn with_upsconf_block(block: impl Into<String>) -> Self {
        DeviceAsset {
            upsconf_block: Some(block.into()),
            ..Default::default()
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.ip.as_deref().map(str::trim).filter(|ip| !ip.is_empty())
    }
}
