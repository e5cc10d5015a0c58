use clap::Args;

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize an existing panel directory
    #[arg(long)]
    pub(crate) force: bool,
}
