use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Set the execution service endpoints
    Set {
        /// Endpoint handling repost runs
        #[arg(long = "repost-url", value_name = "URL")]
        repost_url: String,
        /// Endpoint handling publish runs
        #[arg(long = "publish-url", value_name = "URL")]
        publish_url: String,
    },
    /// Show the configured endpoints
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum GroupCommands {
    /// Add a group (its category must already exist)
    Add {
        /// Community id on the social network
        #[arg(long = "external-id", value_name = "ID")]
        external_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        /// Member count
        #[arg(long, default_value_t = 0)]
        members: u64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// List groups
    List {
        /// Only groups in this category
        #[arg(long)]
        category: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a group by id (removing an unknown id is a no-op)
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum PostCommands {
    /// Add a prepared post (its category must already exist)
    Add {
        #[arg(long)]
        category: String,
        #[arg(long)]
        text: String,
        /// Media attachment reference
        #[arg(long)]
        media: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// List prepared posts
    List {
        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a post by id (removing an unknown id is a no-op)
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum CategoryCommands {
    /// Add a category
    Add {
        #[arg(long)]
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a category by id; groups and posts keep its name
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },
}
