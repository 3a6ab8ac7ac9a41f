//! Deterministic [`LLMProvider`] for tests that must not touch the network.
//!
//! Enable the crate's `mock` feature, queue canned responses, and inspect the
//! recorded requests afterwards to verify the conversation contract.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::LLMError;
use crate::provider::LLMProvider;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Provider that yields queued results in FIFO order and records every request.
#[derive(Debug, Default)]
pub struct StaticResponseProvider {
    queue: Mutex<VecDeque<Result<GenerateContentResponse, LLMError>>>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl StaticResponseProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_response(&self, response: GenerateContentResponse) {
        self.queue.lock().push_back(Ok(response));
    }

    /// Queue a successful response and return the provider for chaining.
    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.enqueue_response(response);
        self
    }

    pub fn enqueue_error(&self, error: LLMError) {
        self.queue.lock().push_back(Err(error));
    }

    pub fn with_error(self, error: LLMError) -> Self {
        self.enqueue_error(error);
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().clone()
    }

    pub fn remaining(&self) -> usize {
        self.queue.lock().len()
    }
}

#[async_trait]
impl LLMProvider for StaticResponseProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LLMError> {
        self.requests.lock().push(request);
        self.queue.lock().pop_front().unwrap_or_else(|| {
            Err(LLMError::InvalidRequest {
                message: "StaticResponseProvider has no queued responses".to_owned(),
            })
        })
    }
}
