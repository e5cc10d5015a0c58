use std::collections::BTreeSet;

use anyhow::Result;

use crate::auth;
use crate::model::{EntityId, Group, Post};
use crate::notify::{Notifier, Severity};
use crate::remote::{
    ExecutionAdapter, ExecutionReport, ExecutionRequest, PauseSettings, PostPayload,
    PublishRequest, TargetGroup,
};
use crate::store::LocalStore;
use crate::wizard::{Flow, SelectionWizard};

pub const DEFAULT_MIN_PAUSE: u32 = 30;
pub const DEFAULT_MAX_PAUSE: u32 = 120;

const TITLE: &str = "Publish";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishStep {
    Groups,
    Posts,
    Settings,
    Execution,
}

const STEPS: [PublishStep; 4] = [
    PublishStep::Groups,
    PublishStep::Posts,
    PublishStep::Settings,
    PublishStep::Execution,
];

/// Publish flow data: pause bounds plus the group and post candidates
/// loaded from the panel. One selection set spans both candidate lists;
/// the gates tell them apart by id.
pub struct PublishFlow {
    pub min_pause: u32,
    pub max_pause: u32,
    groups: Vec<Group>,
    posts: Vec<Post>,
}

impl PublishFlow {
    pub fn new(groups: Vec<Group>, posts: Vec<Post>) -> Self {
        Self {
            min_pause: DEFAULT_MIN_PAUSE,
            max_pause: DEFAULT_MAX_PAUSE,
            groups,
            posts,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn request(&self, token: String, selected: &BTreeSet<EntityId>) -> ExecutionRequest {
        let groups = self
            .groups
            .iter()
            .filter(|g| selected.contains(&g.id))
            .map(|g| TargetGroup {
                group_id: g.external_group_id.clone(),
                name: g.name.clone(),
            })
            .collect();
        let posts = self
            .posts
            .iter()
            .filter(|p| selected.contains(&p.id))
            .map(|p| PostPayload {
                text: p.text.clone(),
                media: p.media.clone(),
            })
            .collect();
        ExecutionRequest::Publish(PublishRequest {
            token,
            groups,
            posts,
            settings: PauseSettings {
                min_pause: self.min_pause,
                max_pause: self.max_pause,
            },
        })
    }
}

impl Flow for PublishFlow {
    type Step = PublishStep;

    fn steps(&self) -> &[PublishStep] {
        &STEPS
    }

    fn gate(&self, step: PublishStep, selected: &BTreeSet<EntityId>) -> bool {
        match step {
            PublishStep::Groups => self.groups.iter().any(|g| selected.contains(&g.id)),
            PublishStep::Posts => self.posts.iter().any(|p| selected.contains(&p.id)),
            PublishStep::Settings => self.min_pause <= self.max_pause,
            PublishStep::Execution => false,
        }
    }
}

pub struct PublishOptions {
    pub groups: Vec<String>,
    pub posts: Vec<String>,
    pub min_pause: u32,
    pub max_pause: u32,
}

/// Walks the publish wizard from candidates to a single execution and
/// reports the outcome through `notifier`.
pub fn run_publish<A, N>(
    store: &LocalStore,
    adapter: &A,
    notifier: &N,
    options: PublishOptions,
) -> Result<ExecutionReport>
where
    A: ExecutionAdapter + ?Sized,
    N: Notifier + ?Sized,
{
    let mut flow = PublishFlow::new(store.load::<Group>(), store.load::<Post>());
    flow.min_pause = options.min_pause;
    flow.max_pause = options.max_pause;

    let mut wizard = SelectionWizard::new(flow);
    for id in &options.groups {
        let id = EntityId(id.clone());
        if !wizard.flow().groups().iter().any(|g| g.id == id) {
            anyhow::bail!("unknown group id: {id}");
        }
        // A repeated --group must not toggle the selection back off.
        if !wizard.is_selected(&id) {
            wizard.toggle_select(&id);
        }
    }
    if !wizard.advance() {
        anyhow::bail!("no groups selected (use --group)");
    }
    for id in &options.posts {
        let id = EntityId(id.clone());
        if !wizard.flow().posts().iter().any(|p| p.id == id) {
            anyhow::bail!("unknown post id: {id}");
        }
        // Same for a repeated --post.
        if !wizard.is_selected(&id) {
            wizard.toggle_select(&id);
        }
    }
    if !wizard.advance() {
        anyhow::bail!("no posts selected (use --post)");
    }
    if !wizard.advance() {
        anyhow::bail!("min pause must not exceed max pause");
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
