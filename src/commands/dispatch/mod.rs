//! Command dispatch logic for grapho

use std::time::Instant;

use crate::cli::Cli;
use grapho_core::error::Result;
use tracing::debug;

mod command;

use command::Command;
pub use command::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    cli.command.execute(&ctx)
}
