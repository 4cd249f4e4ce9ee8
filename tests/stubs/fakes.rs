use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use nutconf::helpers::CommandError;
use nutconf::interfaces::{
    Credential, CredentialError, CredentialStore, ScanError, ScanProtocol, Scanner, ServiceError,
    ServiceManager, UnitOperation,
};
use nutconf::nut_config::{parse_configuration_file, DeviceConfigurations};

/// One `scan` call: protocol, address and credential label.
pub type ScanCall = (ScanProtocol, String, Option<String>);

/// Scanner answering from canned nut-scanner output, keyed by protocol and
/// credential label.
#[derive(Default)]
pub struct FakeScanner {
    responses: HashMap<(ScanProtocol, Option<String>), Result<String, i32>>,
    pub calls: Rc<RefCell<Vec<ScanCall>>>,
}

impl FakeScanner {
    pub fn respond(mut self, protocol: ScanProtocol, credential: Option<&str>, output: &str) -> Self {
        self.responses
            .insert((protocol, credential.map(String::from)), Ok(output.to_string()));
        self
    }

    pub fn fail(mut self, protocol: ScanProtocol, credential: Option<&str>, code: i32) -> Self {
        self.responses
            .insert((protocol, credential.map(String::from)), Err(code));
        self
    }
}

impl Scanner for FakeScanner {
    fn scan(
        &self,
        protocol: ScanProtocol,
        address: &str,
        _timeout: Duration,
        credential: Option<&Credential>,
    ) -> Result<DeviceConfigurations, ScanError> {
        let label = credential.map(|c| c.label().to_string());
        self.calls
            .borrow_mut()
            .push((protocol, address.to_string(), label.clone()));
        match self.responses.get(&(protocol, label)) {
            Some(Ok(output)) => Ok(parse_configuration_file(output)?),
            Some(Err(code)) => Err(ScanError::Exit(*code)),
            None => Ok(vec![]),
        }
    }
}

pub enum FakeCredentials {
    Documents(Vec<Credential>),
    Unreachable,
}

impl FakeCredentials {
    pub fn from_json(json: &str) -> Self {
        FakeCredentials::Documents(serde_json::from_str(json).unwrap())
    }

    pub fn none() -> Self {
        FakeCredentials::Documents(vec![])
    }
}

impl CredentialStore for FakeCredentials {
    fn credentials(&self) -> Result<Vec<Credential>, CredentialError> {
        match self {
            FakeCredentials::Documents(docs) => Ok(docs.clone()),
            FakeCredentials::Unreachable => Err(CredentialError::Read {
                path: "/run/fty-security-wallet/secw.socket".into(),
                source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
            }),
        }
    }
}

/// Service manager recording each call as `"<operation> <units...>"`, or
/// `"regenerate"` for the configuration helper.
#[derive(Default)]
pub struct FakeServices {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub failing: bool,
}

impl FakeServices {
    pub fn failing() -> Self {
        FakeServices {
            failing: true,
            ..Default::default()
        }
    }

    fn outcome(&self, cmd: &str) -> Result<(), ServiceError> {
        if self.failing {
            Err(ServiceError::Failed {
                cmd: cmd.to_string(),
                code: 1,
            })
        } else {
            Ok(())
        }
    }
}

impl ServiceManager for FakeServices {
    fn systemctl(&self, operation: UnitOperation, units: &[String]) -> Result<(), ServiceError> {
        let call = format!("{} {}", operation, units.join(" "));
        self.calls.borrow_mut().push(call.clone());
        self.outcome(&call)
    }

    fn regenerate_config(&self) -> Result<(), ServiceError> {
        self.calls.borrow_mut().push("regenerate".to_string());
        if self.failing {
            return Err(ServiceError::Command(CommandError::Empty));
        }
        Ok(())
    }
}
