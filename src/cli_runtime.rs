use anyhow::{Context, Result};
use clap::Parser;

use vkm::model::RemoteConfig;
use vkm::store::LocalStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "vkm")]
#[command(about = "Local panel for VK group automation", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::cli_exec::handle_command(cli.command)
}

pub(crate) fn require_remote(store: &LocalStore) -> Result<RemoteConfig> {
    let cfg = store.read_config()?;
    cfg.remote
        .context("no remote configured (run `vkm remote set --repost-url ... --publish-url ...`)")
}
