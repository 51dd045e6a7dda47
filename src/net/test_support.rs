//! Scripted in-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse { status, body }));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// An [`ApiClient`] over a fresh fake, plus the fake for assertions.
pub fn fake_client() -> (ApiClient, Arc<FakeTransport>) {
    let transport = FakeTransport::new();
    (ApiClient::new(transport.clone()), transport)
}
