//! Mock driver for testing.

use async_trait::async_trait;
use selah_core::{GenerateRequest, GenerateResponse};
use selah_error::{GenerationError, GenerationErrorKind, GenerationResult};
use selah_interface::SelahDriver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A single scripted reply.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    /// Reply with this text
    Text(String),
    /// Reply without any text part
    NoText,
    /// Fail with this error
    Error(GenerationErrorKind),
}

/// Driver that replays scripted replies and records every request.
///
/// Once the script runs out, the last reply repeats.
#[derive(Debug, Clone)]
pub struct MockDriver {
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
    last: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Always reply with `text`.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Text(text.into())])
    }

    /// Always fail with `kind`.
    pub fn new_error(kind: GenerationErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(kind)])
    }

    /// Replay `replies` in order.
    pub fn new_sequence(replies: Vec<MockResponse>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            last: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_reply(&self) -> MockResponse {
        let mut last = self.last.lock().unwrap();
        if let Some(reply) = self.replies.lock().unwrap().pop_front() {
            *last = Some(reply);
        }
        last.clone().unwrap_or(MockResponse::NoText)
    }
}

#[async_trait]
impl SelahDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        match self.next_reply() {
            MockResponse::Text(text) => Ok(GenerateResponse { text: Some(text) }),
            MockResponse::NoText => Ok(GenerateResponse { text: None }),
            MockResponse::Error(kind) => Err(GenerationError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
