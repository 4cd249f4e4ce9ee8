pub mod credentials;
pub mod device_store;
pub mod scanner;
pub mod services;
pub mod settings;

pub use credentials::{Credential, CredentialError, CredentialStore, JsonCredentialStore};
pub use device_store::{DeviceStore, StoreError};
pub use scanner::{NutScanner, ScanError, ScanProtocol, Scanner};
pub use services::{ServiceError, ServiceManager, Systemctl, UnitOperation};
