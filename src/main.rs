mod argsets;
mod command;

use anyhow::{anyhow, Result};
use core_contracts::constants::{defaults, envvars};
use core_contracts::helpers::load_dotenv;
use env_logger::Env;

const CMD_VALIDATE: &str = "validate";
const CMD_VALUE_TYPE: &str = "value-type";
const CMD_PING: &str = "ping";

fn main() -> Result<()> {
    let dotenv_files = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for file in dotenv_files {
        log::debug!("Loaded environment from {}", file);
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => command::validate(argsets::ValidateArgs {
            kind: args.free_from_str()?,
            file: args.free_from_str()?,
        }),
        Some(CMD_VALUE_TYPE) => command::value_type(argsets::ValueTypeArgs {
            token: args.free_from_str()?,
        }),
        Some(CMD_PING) => command::ping(argsets::PingArgs {
            service: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'value-type', 'ping'"
        )),
    }
}
