//! Credentials for SNMP scanning, as handed out by the security wallet.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("could not read credentials from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse credentials from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SecurityLevel {
    #[default]
    NoAuthNoPriv,
    AuthNoPriv,
    AuthPriv,
}

impl SecurityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::NoAuthNoPriv => "noAuthNoPriv",
            SecurityLevel::AuthNoPriv => "authNoPriv",
            SecurityLevel::AuthPriv => "authPriv",
        }
    }
}

#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct SnmpV3Credential {
    pub security_name: String,
    #[serde(default)]
    pub security_level: SecurityLevel,
    #[serde(default)]
    pub auth_protocol: Option<String>,
    #[serde(default)]
    pub auth_password: Option<String>,
    #[serde(default)]
    pub priv_protocol: Option<String>,
    #[serde(default)]
    pub priv_password: Option<String>,
}

// Passphrases stay out of logs
impl fmt::Debug for SnmpV3Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnmpV3Credential")
            .field("security_name", &self.security_name)
            .field("security_level", &self.security_level)
            .field("auth_protocol", &self.auth_protocol)
            .field("priv_protocol", &self.priv_protocol)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SnmpV1Credential {
    pub community: String,
}

/// A security document. Anything that is neither SNMPv3 nor SNMPv1 shaped
/// is kept as `Unsupported` and ignored by scanning.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Credential {
    Snmpv3(SnmpV3Credential),
    Snmpv1(SnmpV1Credential),
    #[serde(other)]
    Unsupported,
}

impl Credential {
    pub fn is_snmpv3(&self) -> bool {
        matches!(self, Credential::Snmpv3(_))
    }

    pub fn is_snmpv1(&self) -> bool {
        matches!(self, Credential::Snmpv1(_))
    }

    /// Short label for logs: security name or community.
    pub fn label(&self) -> &str {
        match self {
            Credential::Snmpv3(c) => &c.security_name,
            Credential::Snmpv1(c) => &c.community,
            Credential::Unsupported => "unsupported",
        }
    }
}

pub trait CredentialStore {
    /// Credentials usable for discovery and monitoring, in preference order.
    fn credentials(&self) -> Result<Vec<Credential>, CredentialError>;
}

/// Credential store backed by a JSON array of documents.
#[derive(Clone, Debug)]
pub struct JsonCredentialStore {
    path: PathBuf,
}

impl JsonCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonCredentialStore { path: path.into() }
    }
}

impl CredentialStore for JsonCredentialStore {
    fn credentials(&self) -> Result<Vec<Credential>, CredentialError> {
        let text = fs::read_to_string(&self.path).map_err(|source| CredentialError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CredentialError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENTS: &str = r#"[
        {"type": "snmpv1", "community": "public"},
        {"type": "snmpv3", "security_name": "monitor", "security_level": "authPriv",
         "auth_protocol": "SHA", "auth_password": "s3cret!", "priv_protocol": "AES",
         "priv_password": "t0psecret"},
        {"type": "user_and_password", "username": "admin", "password": "admin"},
        {"type": "snmpv3", "security_name": "readonly"}
    ]"#;

    #[test]
    fn parse_documents_in_order() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("credentials.json");
        fs::write(&path, DOCUMENTS).unwrap();

        let creds = JsonCredentialStore::new(&path).credentials().unwrap();
        assert_eq!(creds.len(), 4);
        assert!(creds[0].is_snmpv1());
        assert_eq!(creds[0].label(), "public");
        assert!(creds[1].is_snmpv3());
        assert_eq!(creds[2], Credential::Unsupported);
        match &creds[3] {
            Credential::Snmpv3(c) => {
                assert_eq!(c.security_level, SecurityLevel::NoAuthNoPriv);
                assert_eq!(c.auth_password, None);
            }
            other => panic!("unexpected credential {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_passwords() {
        let creds: Vec<Credential> = serde_json::from_str(DOCUMENTS).unwrap();
        let printed = format!("{:?}", creds[1]);
        assert!(printed.contains("monitor"));
        assert!(!printed.contains("s3cret!"));
        assert!(!printed.contains("t0psecret"));
    }

    #[test]
    fn missing_store_is_an_error() {
        let store = JsonCredentialStore::new("/nonexistent/credentials.json");
        assert!(matches!(
            store.credentials(),
            Err(CredentialError::Read { .. })
        ));
    }

    #[test]
    fn malformed_store_is_an_error() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("credentials.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonCredentialStore::new(&path).credentials(),
            Err(CredentialError::Parse { .. })
        ));
    }
}
