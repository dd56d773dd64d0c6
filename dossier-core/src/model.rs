//! The completion backend seam.
//!
//! The assistant talks to its language model through this trait, so a
//! session can run against the real API or a scripted double in tests.

use async_trait::async_trait;
use claude::{Claude, Error, Request, Response};

/// A completion backend for the assistant.
#[async_trait]
pub trait Model: Send + Sync {
    /// Send a completion request.
    async fn complete(&self, request: Request) -> Result<Response, Error>;
}

#[async_trait]
impl Model for Claude {
    async fn complete(&self, request: Request) -> Result<Response, Error> {
        Claude::complete(self, request).await
    }
}
