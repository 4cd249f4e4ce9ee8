use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use nutconf::helpers::base_path;
use nutconf::interfaces::settings;

use crate::argsets::{KvsGetArgs, KvsSetArgs};

pub fn kvs_set(args: KvsSetArgs) -> Result<()> {
    let res: Result<Value, serde_json::Error> = serde_json::from_str(&args.value);
    // If input was valid JSON, then set value to this;
    // otherwise treat input as a string, and generate JSON from it
    let value = match res {
        Ok(value) => value,
        Err(_) => json!(args.value),
    };
    settings::set(&base_path::SETTINGS_DB, &args.key, &value)?;
    Ok(())
}

pub fn kvs_get(args: KvsGetArgs) -> Result<()> {
    let missing = || anyhow!("No value set for key '{}'", &args.key);
    if !base_path::SETTINGS_DB.exists() {
        return Err(missing());
    }
    let value = settings::get(&base_path::SETTINGS_DB, &args.key)?.ok_or_else(missing)?;
    // If the value contains a single string, just output that
    match value.as_str() {
        Some(s) => print!("{s}"),
        None => print!("{value}"),
    }
    Ok(())
}
