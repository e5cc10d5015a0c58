use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

struct EndpointState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<serde_json::Value>>,
}

/// In-process stand-in for the execution service: records every request
/// body and answers with a scripted status and body.
pub struct MockEndpoint {
    pub url: String,
    state: Arc<EndpointState>,
    _runtime: tokio::runtime::Runtime,
}

impl MockEndpoint {
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.state
            .requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

pub fn spawn_endpoint(status: u16, body: &str) -> Result<MockEndpoint> {
    let runtime = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let state = Arc::new(EndpointState {
        status: StatusCode::from_u16(status).context("mock endpoint status")?,
        body: body.to_string(),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/execute", post(record_execute))
        .with_state(state.clone());

    let listener = runtime
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .context("bind mock endpoint")?;
    let addr = listener.local_addr().context("mock endpoint addr")?;
    runtime.spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(MockEndpoint {
        url: format!("http://{addr}/execute"),
        state,
        _runtime: runtime,
    })
}

async fn record_execute(
    State(state): State<Arc<EndpointState>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, String) {
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(body);
    }
    (state.status, state.body.clone())
}
