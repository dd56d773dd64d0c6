//! The assistant agent.
//!
//! Holds the completion backend, the profile with its derived
//! preferences, and the rolling topic memory. Produces one response per
//! user query; a failed completion becomes an apology, never an error.

use super::memory::TopicMemory;
use super::prompt;
use crate::model::Model;
use crate::preferences::Preferences;
use crate::profile::Profile;
use crate::session::Turn;
use claude::{Claude, Message, Request};

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// The model to use (None = client default).
    pub model: Option<String>,

    /// Maximum tokens for responses.
    pub max_tokens: usize,

    /// Temperature for generation.
    pub temperature: Option<f32>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: None,
            max_tokens: 1024,
            temperature: Some(0.7),
        }
    }
}

/// The profile-aware chat assistant.
pub struct Assistant {
    model: Box<dyn Model>,
    config: AssistantConfig,
    profile: Profile,
    preferences: Preferences,
    memory: TopicMemory,
}

impl Assistant {
    /// Create an assistant backed by the Claude API with the given key.
    pub fn new(api_key: impl Into<String>, profile: Profile) -> Self {
        Self::with_model(Box::new(Claude::new(api_key)), profile)
    }

    /// Create an assistant from the ANTHROPIC_API_KEY environment variable.
    pub fn from_env(profile: Profile) -> Result<Self, claude::Error> {
        Ok(Self::with_model(Box::new(Claude::from_env()?), profile))
    }

    /// Create an assistant over any completion backend.
    ///
    /// Preferences are derived from the profile here, once.
    pub fn with_model(model: Box<dyn Model>, profile: Profile) -> Self {
        let preferences = Preferences::derive(&profile);
        Self {
            model,
            config: AssistantConfig::default(),
            profile,
            preferences,
            memory: TopicMemory::new(),
        }
    }

    /// Configure the assistant.
    pub fn with_config(mut self, config: AssistantConfig) -> Self {
        self.config = config;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn memory(&self) -> &TopicMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut TopicMemory {
        &mut self.memory
    }

    /// Generate a response to a user query.
    ///
    /// The topic memory advances from the query whether or not the
    /// completion succeeds; a failed completion becomes the apology
    /// string carrying the error text, and the conversation continues.
    pub async fn respond(&mut self, query: &str, history: &[Turn]) -> String {
        let prompt = prompt::compose(
            &self.profile,
            &self.preferences,
            &self.memory,
            query,
            history,
        );

        let result = self.infer(prompt).await;
        self.memory.observe(query);

        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("completion failed: {e}");
                format!("I'm having trouble processing that. Could you rephrase? Error: {e}")
            }
        }
    }

    /// One completion call against the backend.
    async fn infer(&self, prompt: String) -> Result<String, claude::Error> {
        let mut request =
            Request::new(vec![Message::user(prompt)]).with_max_tokens(self.config.max_tokens);

        if let Some(ref model) = self.config.model {
            request = request.with_model(model);
        }

        if let Some(temp) = self.config.temperature {
            request = request.with_temperature(temp);
        }

        let response = self.model.complete(request).await?;
        Ok(response.text())
    }
}
