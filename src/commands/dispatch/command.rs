//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use grapho_core::config::{GraphoConfig, CONFIG_FILE_NAME};
use grapho_core::error::Result;
use grapho_core::graph::CancelToken;

/// Resolve configuration: an explicit `--config` must exist, the default
/// file is optional
pub fn load_config(cli: &Cli) -> Result<GraphoConfig> {
    match &cli.config {
        Some(path) => GraphoConfig::load(path),
        None => GraphoConfig::load_or_default(Path::new(CONFIG_FILE_NAME)),
    }
}

/// Token cancelled by Ctrl-C
fn interrupt_token() -> CancelToken {
    let token = CancelToken::new();
    let handle = token.clone();

    if let Err(e) = ctrlc::set_handler(move || handle.cancel()) {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
    }

    token
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GraphoConfig,
    pub cancel: CancelToken,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            config: load_config(cli)?,
            cancel: interrupt_token(),
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => commands::path::execute(ctx, args),
            Commands::Mst(args) => commands::mst::execute(ctx, args),
        }
    }
}
