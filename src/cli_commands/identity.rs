use clap::Args;

#[derive(Args)]
pub(crate) struct LoginArgs {
    /// Access token (must start with vk1.)
    #[arg(long)]
    pub(crate) token: String,
}

#[derive(Args)]
pub(crate) struct TokenArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
