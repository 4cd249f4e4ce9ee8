use anyhow::Result;

use nutconf::configurator::{DeviceAsset, PendingChanges};

use super::{check_commit, configurator_from_env};
use crate::argsets::{ConfigureArgs, EraseArgs};

pub fn configure(args: ConfigureArgs) -> Result<()> {
    let configurator = configurator_from_env();
    let asset = DeviceAsset {
        ip: args.ip,
        upsconf_block: args.block,
        upsconf_enable_dmf: args.dmf,
    };

    let mut pending = PendingChanges::new();
    let configured = configurator.configure(&mut pending, &args.device, &asset);
    // Commit whatever was recorded even if configuring failed
    let report = configurator.commit(&mut pending);
    configured?;
    check_commit(report)
}

pub fn erase(args: EraseArgs) -> Result<()> {
    let configurator = configurator_from_env();
    let mut pending = PendingChanges::new();
    let erased = configurator.erase(&mut pending, &args.device);
    let report = configurator.commit(&mut pending);
    erased?;
    check_commit(report)
}

pub fn list() -> Result<()> {
    let configurator = configurator_from_env();
    for device in configurator.known_devices()? {
        println!("{device}");
    }
    Ok(())
}
