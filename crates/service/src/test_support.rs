#![cfg(test)]
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::{ApiClient, ApiRequest, CoreError, Transport};
use serde_json::Value;

/// In-memory transport: records every request and answers from a queue.
/// An empty queue answers `null`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<Result<Value, CoreError>>>,
}

impl RecordingTransport {
    pub fn replying(value: Value) -> (ApiClient, Arc<Self>) {
        let t = Arc::new(Self::default());
        t.replies.lock().unwrap().push_back(Ok(value));
        (ApiClient::new(t.clone()), t)
    }

    pub fn failing(err: CoreError) -> (ApiClient, Arc<Self>) {
        let t = Arc::new(Self::default());
        t.replies.lock().unwrap().push_back(Err(err));
        (ApiClient::new(t.clone()), t)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request made so far; panics if there were zero or several.
    pub fn only_request(&self) -> ApiRequest {
        let reqs = self.requests();
        assert_eq!(reqs.len(), 1, "expected exactly one request, got {reqs:?}");
        reqs.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, CoreError> {
        self.requests.lock().unwrap().push(request);
        self.replies.lock().unwrap().pop_front().unwrap_or(Ok(Value::Null))
    }
}
