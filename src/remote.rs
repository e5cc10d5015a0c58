use std::fmt;

use anyhow::{Context, Result};

use crate::model::RemoteConfig;

mod execute;
mod types;

pub use self::types::*;

/// Boundary to the execution service that performs the actual wall posts.
/// The panel sends one request per flow run and renders whatever comes back.
pub trait ExecutionAdapter {
    fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionReport, AdapterError>;
}

#[derive(Clone, Debug)]
pub enum AdapterError {
    /// The service refused the run and said why.
    Remote(String),
    /// The request never completed or the response was not understood.
    Transport(String),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::Remote(msg) | AdapterError::Transport(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for AdapterError {}

/// HTTP adapter posting to the configured execution endpoints.
pub struct RemoteClient {
    remote: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    // No request timeout: a run can pause between wall posts for minutes,
    // and the POST is not idempotent, so we never retry either.
    pub fn new(remote: RemoteConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("vkm")
            .build()
            .context("build reqwest client")?;
        Ok(Self { remote, client })
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }
}
