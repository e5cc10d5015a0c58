use clap::Subcommand;

use crate::{CategoryCommands, GroupCommands, PostCommands, RemoteCommands};

pub(crate) mod database;
pub(crate) mod delivery;
pub(crate) mod identity;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a panel directory (.vkm) here
    Init(database::InitArgs),

    /// Validate and store an access token
    Login(identity::LoginArgs),

    /// Clear the stored access token
    Logout,

    /// Show the stored token, masked
    Token(identity::TokenArgs),

    /// Configure the execution service endpoints
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// Manage target groups
    Group {
        #[command(subcommand)]
        command: GroupCommands,
    },

    /// Manage prepared posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Copy recent posts from donor pages into target groups
    Repost(delivery::RepostArgs),

    /// Publish prepared posts into target groups
    Publish(delivery::PublishArgs),

    /// Show panel contents, token, and endpoint state
    Status(delivery::StatusArgs),
}
