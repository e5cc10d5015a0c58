use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;

use crate::model::{
    Category, CategoryDraft, Draft, EntityId, Group, GroupDraft, PanelConfig, PanelState, Post,
    PostDraft,
};

const STORE_DIR: &str = ".vkm";
const CONFIG_FILE: &str = "config.json";
const STATE_FILE: &str = "state.json";

/// Binds an entity type to its collection document and draft shape.
pub trait Record: Serialize + DeserializeOwned + Clone {
    type Draft: Draft;

    /// File name of the collection document under the panel directory.
    const DOCUMENT: &'static str;

    fn id(&self) -> &EntityId;
    fn from_draft(draft: Self::Draft, id: EntityId) -> Self;
}

impl Record for Group {
    type Draft = GroupDraft;

    const DOCUMENT: &'static str = "groups.json";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(draft: GroupDraft, id: EntityId) -> Self {
        Group {
            id,
            external_group_id: draft.external_group_id,
            name: draft.name,
            category: draft.category,
            member_count: draft.member_count,
        }
    }
}

impl Record for Post {
    type Draft = PostDraft;

    const DOCUMENT: &'static str = "posts.json";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(draft: PostDraft, id: EntityId) -> Self {
        Post {
            id,
            category: draft.category,
            text: draft.text,
            media: draft.media,
        }
    }
}

impl Record for Category {
    type Draft = CategoryDraft;

    const DOCUMENT: &'static str = "categories.json";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(draft: CategoryDraft, id: EntityId) -> Self {
        Category {
            id,
            name: draft.name,
        }
    }
}

/// Document store rooted at a `.vkm` panel directory.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
    last_id: Arc<AtomicI64>,
}

impl LocalStore {
    pub fn panel_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(panel_root: &Path) -> Result<Self> {
        let root = Self::panel_dir(panel_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `vkm init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self::at(root))
    }

    /// Creates the panel directory with fresh config and state documents.
    /// Collection documents are not pre-created; they appear on first save.
    pub fn init(panel_root: &Path, force: bool) -> Result<Self> {
        let root = Self::panel_dir(panel_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }
        fs::create_dir_all(&root).context("create panel dir")?;

        let store = Self::at(root);
        store.write_config(&PanelConfig {
            version: 1,
            remote: None,
        })?;
        store.write_state(&PanelState {
            version: 1,
            access_token: None,
            token_saved_at: None,
        })?;
        Ok(store)
    }

    /// Walks from `start` toward the filesystem root looking for a panel.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::panel_dir(dir).is_dir() {
                return Self::open(dir);
            }
        }
        Err(anyhow!("No {} directory found (run `vkm init`)", STORE_DIR))
    }

    fn at(root: PathBuf) -> Self {
        Self {
            root,
            last_id: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Reads a collection. An absent or unreadable document is an empty
    /// collection, not an error.
    pub fn load<T: Record>(&self) -> Vec<T> {
        let Ok(bytes) = fs::read(self.root.join(T::DOCUMENT)) else {
            return Vec::new();
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Rewrites a collection document atomically (temp file plus rename).
    pub fn save<T: Record>(&self, items: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(items)
            .with_context(|| format!("serialize {}", T::DOCUMENT))?;
        write_atomic(&self.root.join(T::DOCUMENT), &bytes)
            .with_context(|| format!("write {}", T::DOCUMENT))
    }

    /// Validates the draft, assigns an id, appends, and persists. Nothing is
    /// written when validation fails.
    pub fn add<T: Record>(&self, draft: T::Draft) -> Result<T> {
        draft.validate()?;
        let record = T::from_draft(draft, self.next_entity_id());
        let mut items = self.load::<T>();
        items.push(record.clone());
        self.save(&items)?;
        Ok(record)
    }

    /// Drops the record with `id` if present. Removing an unknown id is a
    /// no-op, not an error.
    pub fn remove<T: Record>(&self, id: &EntityId) -> Result<()> {
        let mut items = self.load::<T>();
        items.retain(|item| item.id() != id);
        self.save(&items)
    }

    // Millisecond clock, bumped past the previously issued id when the
    // clock has not advanced between two adds.
    fn next_entity_id(&self) -> EntityId {
        let now = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        let mut prev = self.last_id.load(Ordering::Relaxed);
        loop {
            let next = if now > prev { now } else { prev + 1 };
            match self
                .last_id
                .compare_exchange(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return EntityId(next.to_string()),
                Err(actual) => prev = actual,
            }
        }
    }

    pub fn read_config(&self) -> Result<PanelConfig> {
        let path = self.root.join(CONFIG_FILE);
        let bytes =
            fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let cfg: PanelConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported panel config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &PanelConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize panel config")?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes).context("write config.json")
    }

    pub fn read_state(&self) -> Result<PanelState> {
        let path = self.root.join(STATE_FILE);
        if !path.exists() {
            return Ok(PanelState {
                version: 1,
                access_token: None,
                token_saved_at: None,
            });
        }
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let st: PanelState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported panel state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &PanelState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize panel state")?;
        write_atomic(&self.root.join(STATE_FILE), &bytes).context("write state.json")
    }

    pub fn get_access_token(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.access_token)
    }

    pub fn set_access_token(&self, token: &str, saved_at: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.access_token = Some(token.to_string());
        st.token_saved_at = Some(saved_at.to_string());
        self.write_state(&st)
    }

    pub fn clear_access_token(&self) -> Result<()> {
        let mut st = self.read_state()?;
        st.access_token = None;
        st.token_saved_at = None;
        self.write_state(&st)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
