use std::collections::BTreeSet;

use anyhow::Result;

use crate::auth;
use crate::model::{EntityId, Group};
use crate::notify::{Notifier, Severity};
use crate::remote::{
    ExecutionAdapter, ExecutionReport, ExecutionRequest, RepostRequest, TargetGroup,
};
use crate::store::LocalStore;
use crate::wizard::{Flow, SelectionWizard, SourceFilter};

pub const DEFAULT_POST_COUNT: u32 = 10;

const TITLE: &str = "Repost";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepostStep {
    Sources,
    Settings,
    Targets,
    Execution,
}

const STEPS: [RepostStep; 4] = [
    RepostStep::Sources,
    RepostStep::Settings,
    RepostStep::Targets,
    RepostStep::Execution,
];

/// Repost flow data: donor id lists, the per-source post count, and the
/// target candidates loaded from the panel.
pub struct RepostFlow {
    pub source_groups: Vec<String>,
    pub source_users: Vec<String>,
    pub post_count: u32,
    groups: Vec<Group>,
}

impl RepostFlow {
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            source_groups: Vec::new(),
            source_users: Vec::new(),
            post_count: DEFAULT_POST_COUNT,
            groups,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Target candidates visible under `filter`.
    pub fn visible_groups(&self, filter: &SourceFilter) -> Vec<&Group> {
        self.groups
            .iter()
            .filter(|g| filter.matches(&g.category))
            .collect()
    }

    /// Assembles the wire payload from the current selection. Selection
    /// membership decides inclusion; the filter plays no part here.
    pub fn request(&self, token: String, selected: &BTreeSet<EntityId>) -> ExecutionRequest {
        let target_groups = self
            .groups
            .iter()
            .filter(|g| selected.contains(&g.id))
            .map(|g| TargetGroup {
                group_id: g.external_group_id.clone(),
                name: g.name.clone(),
            })
            .collect();
        ExecutionRequest::Repost(RepostRequest {
            token,
            source_groups: self.source_groups.clone(),
            source_users: self.source_users.clone(),
            post_count: self.post_count,
            target_groups,
        })
    }
}

impl Flow for RepostFlow {
    type Step = RepostStep;

    fn steps(&self) -> &[RepostStep] {
        &STEPS
    }

    fn gate(&self, step: RepostStep, selected: &BTreeSet<EntityId>) -> bool {
        match step {
            RepostStep::Sources => {
                !self.source_groups.is_empty() || !self.source_users.is_empty()
            }
            RepostStep::Settings => self.post_count >= 1,
            RepostStep::Targets => !selected.is_empty(),
            RepostStep::Execution => false,
        }
    }
}

pub struct RepostOptions {
    pub source_groups: Vec<String>,
    pub source_users: Vec<String>,
    pub post_count: u32,
    pub targets: Vec<String>,
    pub category: Option<String>,
}

/// Walks the repost wizard from candidates to a single execution and
/// reports the outcome through `notifier`.
pub fn run_repost<A, N>(
    store: &LocalStore,
    adapter: &A,
    notifier: &N,
    options: RepostOptions,
) -> Result<ExecutionReport>
where
    A: ExecutionAdapter + ?Sized,
    N: Notifier + ?Sized,
{
    let mut flow = RepostFlow::new(store.load::<Group>());
    flow.source_groups = options.source_groups;
    flow.source_users = options.source_users;
    flow.post_count = options.post_count;

    let mut wizard = SelectionWizard::new(flow);
    if let Some(category) = options.category {
        wizard.filter_by(SourceFilter::Category(category));
    }

    if !wizard.advance() {
        anyhow::bail!("no sources given (use --source-group or --source-user)");
    }
    if !wizard.advance() {
        anyhow::bail!("post count must be at least 1");
    }
    for id in &options.targets {
        let id = EntityId(id.clone());
        if !wizard.flow().groups().iter().any(|g| g.id == id) {
            anyhow::bail!("unknown group id: {id}");
        }
        let visible = wizard
            .flow()
            .visible_groups(wizard.source_filter())
            .iter()
            .any(|g| g.id == id);
        if !visible {
            anyhow::bail!("group {id} is hidden by --category");
        }
        // A repeated --target must not toggle the selection back off.
        if !wizard.is_selected(&id) {
            wizard.toggle_select(&id);
        }
    }
    if !wizard.advance() {
        anyhow::bail!("no target groups selected (use --target)");
    }

    let token = match auth::require_token(store) {
        Ok(token) => token,
        Err(err) => {
            notifier.notify(TITLE, &format!("{err:#}"), Severity::Error);
            return Err(err);
        }
    };

    let request = wizard.flow().request(token, wizard.selected());
    let report = match wizard.execute(adapter, &request) {
        Ok(report) => report.clone(),
        Err(err) => {
            notifier.notify(TITLE, &err.to_string(), Severity::Error);
            return Err(err.into());
        }
    };
    notifier.notify(
        TITLE,
        &format!("{} of {} succeeded", report.successful, report.total),
        Severity::Success,
    );
    Ok(report)
}
