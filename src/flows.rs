//! Concrete selection flows and the drivers that walk them end to end.

mod publish;
mod repost;

pub use self::publish::{
    DEFAULT_MAX_PAUSE, DEFAULT_MIN_PAUSE, PublishFlow, PublishOptions, PublishStep, run_publish,
};
pub use self::repost::{DEFAULT_POST_COUNT, RepostFlow, RepostOptions, RepostStep, run_repost};
