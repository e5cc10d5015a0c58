use super::database::{
    handle_category_command, handle_group_command, handle_init_command, handle_post_command,
};
use super::delivery::{handle_publish_command, handle_repost_command, handle_status_command};
use super::identity::{
    handle_login_command, handle_logout_command, handle_remote_command, handle_token_command,
};
use super::panel::with_store;
use super::*;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(args.force)?,
        Commands::Login(args) => with_store(|store| handle_login_command(store, args.token))?,
        Commands::Logout => with_store(handle_logout_command)?,
        Commands::Token(args) => with_store(|store| handle_token_command(store, args.json))?,
        Commands::Remote { command } => {
            with_store(|store| handle_remote_command(store, command))?
        }
        Commands::Group { command } => with_store(|store| handle_group_command(store, command))?,
        Commands::Post { command } => with_store(|store| handle_post_command(store, command))?,
        Commands::Category { command } => {
            with_store(|store| handle_category_command(store, command))?
        }
        Commands::Repost(args) => with_store(|store| handle_repost_command(store, args))?,
        Commands::Publish(args) => with_store(|store| handle_publish_command(store, args))?,
        Commands::Status(args) => with_store(|store| handle_status_command(store, args.json))?,
    }
    Ok(())
}
