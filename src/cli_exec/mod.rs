use anyhow::{Context, Result};

use vkm::auth;
use vkm::flows::{PublishOptions, RepostOptions, run_publish, run_repost};
use vkm::model::{
    Category, CategoryDraft, Draft, EntityId, Group, GroupDraft, Post, PostDraft, RemoteConfig,
};
use vkm::notify::{Notifier, Severity, TermNotifier};
use vkm::remote::{ExecutionReport, RemoteClient};
use vkm::store::LocalStore;

use crate::cli_commands::delivery::{PublishArgs, RepostArgs};
use crate::{
    CategoryCommands, Commands, GroupCommands, PostCommands, RemoteCommands, require_remote,
};

mod database;
mod delivery;
mod dispatch;
mod identity;
mod panel;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    dispatch::handle_command(command)
}
