//! Testing utilities.
//!
//! This module provides tools for integration testing:
//! - `MockModel` for deterministic conversations without API calls
//! - `TestHarness` for scripted session scenarios
//!
//! The mock records every request it receives, so tests can assert on
//! the prompts the assistant actually composed.

use crate::assistant::Assistant;
use crate::profile::Profile;
use crate::model::Model;
use crate::session::{ChatSession, Reply, SessionConfig};
use async_trait::async_trait;
use claude::{ContentBlock, Error, Request, Response, StopReason, Usage};
use std::sync::{Arc, Mutex};

/// A scripted outcome for one completion call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Text(String),
    /// Fail with a network error carrying this message.
    Failure(String),
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        MockReply::Text(text.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        MockReply::Failure(message.into())
    }
}

#[derive(Default)]
struct MockState {
    replies: Vec<MockReply>,
    next: usize,
    requests: Vec<Request>,
}

/// A completion backend that replays scripted replies in order.
///
/// Clones share state, so a test can keep a handle to the mock after
/// boxing it into an assistant.
#[derive(Clone, Default)]
pub struct MockModel {
    state: Arc<Mutex<MockState>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with scripted replies.
    pub fn scripted(replies: Vec<MockReply>) -> Self {
        let mock = Self::new();
        for reply in replies {
            mock.queue(reply);
        }
        mock
    }

    /// Queue another reply.
    pub fn queue(&self, reply: MockReply) {
        self.lock().replies.push(reply);
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.lock().requests.clone()
    }

    /// Prompt text of the most recent request.
    pub fn last_prompt(&self) -> Option<String> {
        self.lock()
            .requests
            .last()
            .and_then(|r| r.messages.first())
            .map(|m| m.content.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state lock poisoned")
    }
}

#[async_trait]
impl Model for MockModel {
    async fn complete(&self, request: Request) -> Result<Response, Error> {
        let reply = {
            let mut state = self.lock();
            state.requests.push(request);

            if state.next < state.replies.len() {
                let r = state.replies[state.next].clone();
                state.next += 1;
                r
            } else {
                MockReply::text("The assistant has no more scripted replies.")
            }
        };

        match reply {
            MockReply::Text(text) => Ok(mock_response(text)),
            MockReply::Failure(message) => Err(Error::Network(message)),
        }
    }
}

fn mock_response(text: String) -> Response {
    Response {
        id: "mock".to_string(),
        model: "mock".to_string(),
        content: vec![ContentBlock::Text { text }],
        stop_reason: StopReason::EndTurn,
        usage: Usage {
            input_tokens: 0,
            output_tokens: 0,
        },
    }
}

/// Test harness for running scripted conversations.
pub struct TestHarness {
    /// Handle to the mock backend.
    pub model: MockModel,
    /// The session under test.
    pub session: ChatSession,
}

impl TestHarness {
    /// Create a harness over in-memory profile text.
    ///
    /// The template RNG is seeded, so greeting and follow-up selection
    /// are deterministic.
    pub fn new(profile_text: &str) -> Self {
        let model = MockModel::new();
        let assistant =
            Assistant::with_model(Box::new(model.clone()), Profile::from_text(profile_text));
        let config = SessionConfig::new("unused.pdf", "Test Subject").with_seed(0);
        let session = ChatSession::with_assistant(assistant, config);

        Self { model, session }
    }

    /// Queue a scripted reply.
    pub fn expect_reply(&mut self, text: impl Into<String>) -> &mut Self {
        self.model.queue(MockReply::text(text));
        self
    }

    /// Queue a scripted failure.
    pub fn expect_failure(&mut self, message: impl Into<String>) -> &mut Self {
        self.model.queue(MockReply::failure(message));
        self
    }

    /// Submit a query and get the reply.
    pub async fn submit(&mut self, input: &str) -> Reply {
        self.session.submit(input).await
    }

    /// Current topic memory contents.
    pub fn topics(&self) -> &[String] {
        self.session.assistant().memory().topics()
    }

    /// Number of logged turns (greeting included).
    pub fn turn_count(&self) -> usize {
        self.session.turns().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let mut harness = TestHarness::new("");
        harness.expect_reply("first").expect_reply("second");

        assert_eq!(harness.submit("one").await.text, "first");
        assert_eq!(harness.submit("two").await.text, "second");
    }

    #[tokio::test]
    async fn test_mock_default_after_exhaustion() {
        let mut harness = TestHarness::new("");
        let reply = harness.submit("anything").await;
        assert!(reply.text.contains("no more scripted replies"));
    }

    #[tokio::test]
    async fn test_mock_failure_surfaces_as_apology() {
        let mut harness = TestHarness::new("");
        harness.expect_failure("quota exceeded");

        let reply = harness.submit("hello").await;
        assert!(reply.text.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mut harness = TestHarness::new("");
        harness.expect_reply("ok");
        harness.submit("a question").await;

        assert_eq!(harness.model.requests().len(), 1);
        assert!(harness.model.last_prompt().is_some());
    }
}
