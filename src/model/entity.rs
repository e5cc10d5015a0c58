use serde::{Deserialize, Serialize};

use super::EntityId;

/// A managed community the panel can post into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: EntityId,
    /// Numeric id of the community on the social network.
    pub external_group_id: String,
    pub name: String,
    // Category is stored by name; deleting the category leaves it dangling.
    pub category: String,
    pub member_count: u64,
}

/// A prepared post awaiting publication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub category: String,
    pub text: String,
    /// Media attachment reference; serialized as `null` when absent.
    pub media: Option<String>,
}

/// A label used to slice groups and posts in the selection flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}
