use super::types::{ErrorBody, PublishResult, RepostResult, WireReport};
use super::{AdapterError, ExecutionAdapter, ExecutionReport, ExecutionRequest, RemoteClient};

impl RemoteClient {
    fn endpoint(&self, request: &ExecutionRequest) -> &str {
        match request {
            ExecutionRequest::Repost(_) => &self.remote.repost_url,
            ExecutionRequest::Publish(_) => &self.remote.publish_url,
        }
    }

    fn post_execution(&self, request: &ExecutionRequest) -> Result<ExecutionReport, AdapterError> {
        let builder = self.client.post(self.endpoint(request));
        let resp = match request {
            ExecutionRequest::Repost(body) => builder.json(body),
            ExecutionRequest::Publish(body) => builder.json(body),
        }
        .send()
        .map_err(|err| AdapterError::Transport(format!("execution request failed: {err}")))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .map_err(|err| AdapterError::Transport(format!("read execution response: {err}")))?;

        // The service reports refusals as an `error` body, with or without
        // a success status.
        if let Ok(body) = serde_json::from_slice::<ErrorBody>(&bytes) {
            return Err(AdapterError::Remote(body.error));
        }
        if !status.is_success() {
            return Err(AdapterError::Remote(format!(
                "execution service returned {status}"
            )));
        }

        match request {
            ExecutionRequest::Repost(_) => {
                let wire: WireReport<RepostResult> = serde_json::from_slice(&bytes)
                    .map_err(|err| {
                        AdapterError::Transport(format!("unreadable execution response: {err}"))
                    })?;
                Ok(wire.into())
            }
            ExecutionRequest::Publish(_) => {
                let wire: WireReport<PublishResult> = serde_json::from_slice(&bytes)
                    .map_err(|err| {
                        AdapterError::Transport(format!("unreadable execution response: {err}"))
                    })?;
                Ok(wire.into())
            }
        }
    }
}

impl ExecutionAdapter for RemoteClient {
    fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionReport, AdapterError> {
        self.post_execution(request)
    }
}
