use std::collections::BTreeSet;

use crate::interfaces::{ServiceError, UnitOperation};

const DRIVER_UNIT_PREFIX: &str = "nut-driver@";

/// Service unit running the NUT driver of a device.
pub fn driver_unit(device: &str) -> String {
    format!("{DRIVER_UNIT_PREFIX}{device}")
}

/// Driver units to stop and to (re)start, accumulated over a batch of
/// `configure`/`erase` calls and drained by `commit`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingChanges {
    to_stop: BTreeSet<String>,
    to_start: BTreeSet<String>,
}

impl PendingChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&mut self, unit: String) {
        self.to_stop.insert(unit);
    }

    pub fn start(&mut self, unit: String) {
        self.to_start.insert(unit);
    }

    pub fn to_stop(&self) -> &BTreeSet<String> {
        &self.to_stop
    }

    pub fn to_start(&self) -> &BTreeSet<String> {
        &self.to_start
    }

    pub fn is_empty(&self) -> bool {
        self.to_stop.is_empty() && self.to_start.is_empty()
    }

    /// Empties both sets, returning their previous content.
    pub(super) fn take(&mut self) -> (Vec<String>, Vec<String>) {
        (
            std::mem::take(&mut self.to_stop).into_iter().collect(),
            std::mem::take(&mut self.to_start).into_iter().collect(),
        )
    }
}

/// A commit step that did not succeed.
#[derive(Debug)]
pub struct StepFailure {
    /// `None` for the configuration regeneration helper.
    pub operation: Option<UnitOperation>,
    pub error: ServiceError,
}

/// Outcome of a commit. Failures are reported, never rolled back.
#[derive(Debug, Default)]
pub struct CommitReport {
    pub failures: Vec<StepFailure>,
}

impl CommitReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub(super) fn record(&mut self, operation: Option<UnitOperation>, result: Result<(), ServiceError>) {
        if let Err(error) = result {
            self.failures.push(StepFailure { operation, error });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_names() {
        assert_eq!(driver_unit("ups1"), "nut-driver@ups1");
    }

    #[test]
    fn same_unit_may_be_stopped_and_started() {
        let mut pending = PendingChanges::new();
        assert!(pending.is_empty());
        pending.stop(driver_unit("ups1"));
        pending.start(driver_unit("ups1"));
        pending.start(driver_unit("ups1"));
        assert_eq!(pending.to_stop().len(), 1);
        assert_eq!(pending.to_start().len(), 1);

        let (stop, start) = pending.take();
        assert_eq!(stop, vec!["nut-driver@ups1"]);
        assert_eq!(start, vec!["nut-driver@ups1"]);
        assert!(pending.is_empty());
    }
}
