use std::collections::BTreeMap;
use std::fs;

use anyhow::{anyhow, Context, Result};

use nutconf::configurator::{DeviceAsset, PendingChanges};

use super::{check_commit, configurator_from_env};
use crate::argsets::ApplyArgs;

/// Reconciles the device store with a full inventory of assets: every
/// listed device is configured, every stored device no longer listed is
/// erased, and the result is committed once.
pub fn apply(args: ApplyArgs) -> Result<()> {
    let text = fs::read_to_string(&args.assets_file)
        .with_context(|| format!("Could not read {}", args.assets_file.display()))?;
    let assets: BTreeMap<String, DeviceAsset> = serde_json::from_str(&text)
        .with_context(|| format!("Could not parse {}", args.assets_file.display()))?;

    let configurator = configurator_from_env();
    let mut pending = PendingChanges::new();
    let mut failed = Vec::new();

    for (device, asset) in &assets {
        if let Err(e) = configurator.configure(&mut pending, device, asset) {
            log::error!("{e}");
            failed.push(device.as_str());
        }
    }

    for device in configurator.known_devices()? {
        if !assets.contains_key(&device) {
            if let Err(e) = configurator.erase(&mut pending, &device) {
                log::error!("{e}");
            }
        }
    }

    log::info!(
        "Committing: {} driver(s) to stop, {} to start",
        pending.to_stop().len(),
        pending.to_start().len()
    );
    check_commit(configurator.commit(&mut pending))?;

    if failed.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(
            "Could not configure device(s): {}; will retry on next run",
            failed.join(", ")
        ))
    }
}
