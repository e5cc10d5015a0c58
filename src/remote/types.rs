//! Request payloads and outcome types for the execution service.

/// Finalized payload for one flow run; the variant picks the endpoint.
#[derive(Clone, Debug)]
pub enum ExecutionRequest {
    Repost(RepostRequest),
    Publish(PublishRequest),
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepostRequest {
    pub token: String,
    /// Donor community ids to pull posts from.
    pub source_groups: Vec<String>,
    /// Donor profile ids to pull posts from.
    pub source_users: Vec<String>,
    pub post_count: u32,
    pub target_groups: Vec<TargetGroup>,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub token: String,
    pub groups: Vec<TargetGroup>,
    pub posts: Vec<PostPayload>,
    pub settings: PauseSettings,
}

/// A resolved target: the external id the service posts to, plus the
/// display name it echoes back in results.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGroup {
    pub group_id: String,
    pub name: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PostPayload {
    pub text: String,
    pub media: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseSettings {
    pub min_pause: u32,
    pub max_pause: u32,
}

/// Aggregated outcome of one run, with per-target results in a shape
/// shared by both flows.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ExecutionReport {
    pub results: Vec<ExecutionOutcome>,
    pub successful: u32,
    pub total: u32,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutcome {
    pub target: String,
    pub source: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

/// Error payload the service sends instead of results.
#[derive(Debug, serde::Deserialize)]
pub(super) struct ErrorBody {
    pub(super) error: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct WireReport<T> {
    pub(super) results: Vec<T>,
    pub(super) successful: u32,
    pub(super) total: u32,
}

impl<T: Into<ExecutionOutcome>> From<WireReport<T>> for ExecutionReport {
    fn from(wire: WireReport<T>) -> Self {
        ExecutionReport {
            results: wire.results.into_iter().map(Into::into).collect(),
            successful: wire.successful,
            total: wire.total,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RepostResult {
    pub(super) source_owner: String,
    pub(super) target_group: String,
    pub(super) success: bool,
    #[serde(default)]
    pub(super) error: Option<String>,
    #[serde(default)]
    pub(super) post_id: Option<String>,
}

impl From<RepostResult> for ExecutionOutcome {
    fn from(r: RepostResult) -> Self {
        ExecutionOutcome {
            target: r.target_group,
            source: r.source_owner,
            success: r.success,
            error: r.error,
            post_id: r.post_id,
        }
    }
}

// Publish results arrive with snake_case `post_id`, unlike repost's camel
// `postId`; the field names here are the wire names.
#[derive(Debug, serde::Deserialize)]
pub(super) struct PublishResult {
    pub(super) group: String,
    /// Truncated post text, as echoed by the service.
    pub(super) post: String,
    pub(super) success: bool,
    #[serde(default)]
    pub(super) error: Option<String>,
    #[serde(default)]
    pub(super) post_id: Option<String>,
}

impl From<PublishResult> for ExecutionOutcome {
    fn from(r: PublishResult) -> Self {
        ExecutionOutcome {
            target: r.group,
            source: r.post,
            success: r.success,
            error: r.error,
            post_id: r.post_id,
        }
    }
}
