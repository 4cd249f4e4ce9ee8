mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use nutconf::constants::{defaults, envvars};
use nutconf::helpers::load_dotenv;

const CMD_CONFIGURE: &str = "configure";
const CMD_ERASE: &str = "erase";
const CMD_APPLY: &str = "apply";
const CMD_LIST: &str = "list";
const CMD_KVS_GET: &str = "kvs-get";
const CMD_KVS_SET: &str = "kvs-set";

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_CONFIGURE) => command::configure(argsets::ConfigureArgs {
            ip: args.opt_value_from_str("--ip")?,
            block: args.opt_value_from_str("--block")?,
            dmf: args.contains("--dmf"),
            device: args.free_from_str()?,
        }),
        Some(CMD_ERASE) => command::erase(argsets::EraseArgs {
            device: args.free_from_str()?,
        }),
        Some(CMD_APPLY) => command::apply(argsets::ApplyArgs {
            assets_file: args.free_from_str()?,
        }),
        Some(CMD_LIST) => command::list(),
        Some(CMD_KVS_GET) => command::kvs_get(argsets::KvsGetArgs {
            key: args.free_from_str()?,
        }),
        Some(CMD_KVS_SET) => command::kvs_set(argsets::KvsSetArgs {
            key: args.free_from_str()?,
            value: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'configure', 'erase', 'apply', 'list', 'kvs-get', 'kvs-set'"
        )),
    }
}
