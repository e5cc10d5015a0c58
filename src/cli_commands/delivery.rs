use clap::Args;

use vkm::flows::{DEFAULT_MAX_PAUSE, DEFAULT_MIN_PAUSE, DEFAULT_POST_COUNT};

#[derive(Args)]
pub(crate) struct RepostArgs {
    /// Donor community id (repeatable)
    #[arg(long = "source-group", value_name = "ID")]
    pub(crate) source_groups: Vec<String>,

    /// Donor profile id (repeatable)
    #[arg(long = "source-user", value_name = "ID")]
    pub(crate) source_users: Vec<String>,

    /// Posts to copy per source
    #[arg(long, default_value_t = DEFAULT_POST_COUNT)]
    pub(crate) post_count: u32,

    /// Target group id from the panel (repeatable)
    #[arg(long = "target", value_name = "GROUP-ID")]
    pub(crate) targets: Vec<String>,

    /// Narrow target candidates to a category
    #[arg(long)]
    pub(crate) category: Option<String>,

    /// Emit the execution report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Target group id from the panel (repeatable)
    #[arg(long = "group", value_name = "GROUP-ID")]
    pub(crate) groups: Vec<String>,

    /// Prepared post id from the panel (repeatable)
    #[arg(long = "post", value_name = "POST-ID")]
    pub(crate) posts: Vec<String>,

    /// Shortest pause between wall posts, in seconds
    #[arg(long, default_value_t = DEFAULT_MIN_PAUSE)]
    pub(crate) min_pause: u32,

    /// Longest pause between wall posts, in seconds
    #[arg(long, default_value_t = DEFAULT_MAX_PAUSE)]
    pub(crate) max_pause: u32,

    /// Emit the execution report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct StatusArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
