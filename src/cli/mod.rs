mod commands;
mod convert;
pub mod exit_codes;
mod output;

pub use commands::Cli;

use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    commands::execute(cli)
}
