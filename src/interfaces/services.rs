use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::helpers::{run_command, CommandError};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("'{cmd}' failed with status {code}")]
    Failed { cmd: String, code: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitOperation {
    Disable,
    Stop,
    Restart,
    Enable,
    ReloadOrRestart,
}

impl UnitOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOperation::Disable => "disable",
            UnitOperation::Stop => "stop",
            UnitOperation::Restart => "restart",
            UnitOperation::Enable => "enable",
            UnitOperation::ReloadOrRestart => "reload-or-restart",
        }
    }
}

impl fmt::Display for UnitOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service lifecycle control for the NUT driver units.
pub trait ServiceManager {
    /// Applies `operation` to all `units` in a single invocation.
    fn systemctl(&self, operation: UnitOperation, units: &[String]) -> Result<(), ServiceError>;

    /// Regenerates the aggregated NUT configuration from the device store.
    fn regenerate_config(&self) -> Result<(), ServiceError>;
}

#[derive(Clone, Debug)]
pub struct Systemctl {
    systemctl_cmd: String,
    helper_cmd: String,
}

impl Systemctl {
    pub fn new(systemctl_cmd: impl Into<String>, helper_cmd: impl Into<String>) -> Self {
        Systemctl {
            systemctl_cmd: systemctl_cmd.into(),
            helper_cmd: helper_cmd.into(),
        }
    }
}

impl ServiceManager for Systemctl {
    fn systemctl(&self, operation: UnitOperation, units: &[String]) -> Result<(), ServiceError> {
        if units.is_empty() {
            return Ok(());
        }
        let cmd = format!("{} {}", self.systemctl_cmd, operation);
        let args = std::iter::once(operation.as_str()).chain(units.iter().map(String::as_str));

        let output = match run_command(&self.systemctl_cmd, args) {
            Ok(output) => output,
            Err(e) => {
                log::error!("Can't run {} for units: {}", cmd, units.iter().join(", "));
                return Err(e.into());
            }
        };
        let ok = output.code == 0;
        let outcome = if ok { "ok" } else { "failed" };
        log::info!(
            "{} result {} ({}) for units: {}",
            cmd,
            output.code,
            outcome,
            units.iter().join(", ")
        );
        if ok {
            Ok(())
        } else {
            Err(ServiceError::Failed {
                cmd,
                code: output.code,
            })
        }
    }

    fn regenerate_config(&self) -> Result<(), ServiceError> {
        let output = run_command(&self.helper_cmd, Vec::<String>::new()).map_err(|e| {
            log::error!("Can't run command '{}': {}", self.helper_cmd, e);
            e
        })?;
        if output.code == 0 {
            log::info!("Command '{}' succeeded.", self.helper_cmd);
            Ok(())
        } else {
            log::error!(
                "Command '{}' failed with status={}.",
                self.helper_cmd,
                output.code
            );
            Err(ServiceError::Failed {
                cmd: self.helper_cmd.clone(),
                code: output.code,
            })
        }
    }
}
