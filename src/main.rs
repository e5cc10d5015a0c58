mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use cli_commands::Commands;
pub(crate) use cli_runtime::require_remote;
pub(crate) use cli_subcommands::{
    CategoryCommands, GroupCommands, PostCommands, RemoteCommands,
};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
