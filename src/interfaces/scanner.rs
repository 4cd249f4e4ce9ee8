use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::helpers::{run_command, CommandError};
use crate::interfaces::credentials::Credential;
use crate::nut_config::{parse_configuration_file, ConfParseError, DeviceConfigurations};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("scanner exited with status {0}")]
    Exit(i32),
    #[error("unreadable scanner output: {0}")]
    Output(#[from] ConfParseError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanProtocol {
    Snmp,
    SnmpDmf,
    NetXml,
}

impl fmt::Display for ScanProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanProtocol::Snmp => write!(f, "SNMP"),
            ScanProtocol::SnmpDmf => write!(f, "SNMP (DMF)"),
            ScanProtocol::NetXml => write!(f, "NetXML"),
        }
    }
}

pub trait Scanner {
    /// Probes a single address and returns the candidate configurations
    /// found, in discovery order.
    fn scan(
        &self,
        protocol: ScanProtocol,
        address: &str,
        timeout: Duration,
        credential: Option<&Credential>,
    ) -> Result<DeviceConfigurations, ScanError>;
}

/// Scanner driving the `nut-scanner` executable.
#[derive(Clone, Debug)]
pub struct NutScanner {
    cmd: String,
}

impl NutScanner {
    pub fn new(cmd: impl Into<String>) -> Self {
        NutScanner { cmd: cmd.into() }
    }
}

impl Scanner for NutScanner {
    fn scan(
        &self,
        protocol: ScanProtocol,
        address: &str,
        timeout: Duration,
        credential: Option<&Credential>,
    ) -> Result<DeviceConfigurations, ScanError> {
        let args = scan_arguments(protocol, address, timeout, credential);
        let output = run_command(&self.cmd, &args)?;
        if output.code != 0 {
            return Err(ScanError::Exit(output.code));
        }
        let configs = parse_configuration_file(&output.stdout)?;
        log::debug!(
            "{} scan of '{}' returned {} configuration(s)",
            protocol,
            address,
            configs.len()
        );
        Ok(configs)
    }
}

fn scan_arguments(
    protocol: ScanProtocol,
    address: &str,
    timeout: Duration,
    credential: Option<&Credential>,
) -> Vec<String> {
    let mut args: Vec<String> = match protocol {
        ScanProtocol::Snmp => vec!["-S".into()],
        ScanProtocol::SnmpDmf => vec!["-S".into(), "-z".into()],
        ScanProtocol::NetXml => vec!["-M".into()],
    };
    args.extend([
        "-s".into(),
        address.to_string(),
        "-t".into(),
        timeout.as_secs().max(1).to_string(),
    ]);

    match credential {
        Some(Credential::Snmpv1(v1)) => args.extend(["-c".into(), v1.community.clone()]),
        Some(Credential::Snmpv3(v3)) => {
            args.extend([
                "-l".into(),
                v3.security_level.as_str().to_string(),
                "-u".into(),
                v3.security_name.clone(),
            ]);
            let optional = [
                ("-w", &v3.auth_protocol),
                ("-W", &v3.auth_password),
                ("-x", &v3.priv_protocol),
                ("-X", &v3.priv_password),
            ];
            for (flag, value) in optional {
                if let Some(value) = value {
                    args.extend([flag.to_string(), value.clone()]);
                }
            }
        }
        Some(Credential::Unsupported) | None => {}
    }
    args
}
