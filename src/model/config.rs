use serde::{Deserialize, Serialize};

/// Contents of `.vkm/config.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PanelConfig {
    pub version: u32,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

/// Execution service endpoints, one per flow kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub repost_url: String,
    pub publish_url: String,
}

/// Contents of `.vkm/state.json`.
// The access token lives in state, not config, so endpoint settings can be
// shared without leaking the credential.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PanelState {
    pub version: u32,

    #[serde(default)]
    pub access_token: Option<String>,

    /// RFC 3339 timestamp recorded at login.
    #[serde(default)]
    pub token_saved_at: Option<String>,
}
