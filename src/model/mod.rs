mod config;
mod draft;
mod entity;
mod ids;

pub use self::config::{PanelConfig, PanelState, RemoteConfig};
pub use self::draft::{CategoryDraft, Draft, GroupDraft, PostDraft, ValidationError};
pub use self::entity::{Category, Group, Post};
pub use self::ids::EntityId;
