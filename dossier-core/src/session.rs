//! ChatSession - the conversation shell.
//!
//! Owns the append-only turn log, the assistant, and the session RNG.
//! One session serves one user; nothing is shared and nothing persists
//! past the end of the process.

use crate::assistant::{templates, Assistant, AssistantConfig};
use crate::profile::Profile;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A follow-up prompt is attached at every log position divisible by this.
const FOLLOW_UP_EVERY: usize = 3;

/// Errors from session construction.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No API key configured - set ANTHROPIC_API_KEY environment variable")]
    NoApiKey,
}

/// Configuration for creating a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Path to the résumé document.
    pub document_path: PathBuf,

    /// Name of the person the dossier describes.
    pub subject_name: String,

    /// Model override.
    pub model: Option<String>,

    /// Maximum tokens per response.
    pub max_tokens: usize,

    /// Temperature for generation.
    pub temperature: Option<f32>,

    /// RNG seed for template selection (None = from entropy).
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a session config for a document and its subject.
    pub fn new(document_path: impl Into<PathBuf>, subject_name: impl Into<String>) -> Self {
        Self {
            document_path: document_path.into(),
            subject_name: subject_name.into(),
            model: None,
            max_tokens: 1024,
            temperature: Some(0.7),
            seed: None,
        }
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set max tokens for responses.
    pub fn with_max_tokens(mut self, tokens: usize) -> Self {
        self.max_tokens = tokens;
        self
    }

    /// Set temperature for generation.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Seed the template RNG for deterministic selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The author of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One role-tagged message in the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Session interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    AwaitingInput,
    Responding,
}

/// Reply to one user submission.
#[derive(Debug, Clone)]
pub struct Reply {
    /// The assistant's response text (or the apology on failure).
    pub text: String,

    /// Supplementary follow-up prompt; attached on every third turn,
    /// displayed alongside the response but not logged as a turn.
    pub follow_up: Option<String>,
}

/// An interactive dossier chat session.
///
/// This is the main entry point: it manages the turn log, the assistant,
/// and the greeting/follow-up templates. Create one per user session and
/// pass it by reference into each turn.
pub struct ChatSession {
    assistant: Assistant,
    turns: Vec<Turn>,
    state: SessionState,
    rng: StdRng,
    subject_name: String,
}

impl ChatSession {
    /// Create a new session from a config.
    ///
    /// Loads the document (degrading to an empty profile on extraction
    /// failure) and requires `ANTHROPIC_API_KEY` in the environment.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let profile = Profile::load(&config.document_path);

        let assistant_config = AssistantConfig {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        let assistant = Assistant::from_env(profile)
            .map_err(|_| SessionError::NoApiKey)?
            .with_config(assistant_config);

        Ok(Self::with_assistant(assistant, config))
    }

    /// Create a session over a pre-built assistant.
    ///
    /// This is the seam for scripted backends; the document path in the
    /// config is ignored because the assistant already has its profile.
    pub fn with_assistant(assistant: Assistant, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Self {
            assistant,
            turns: Vec::new(),
            state: SessionState::AwaitingInput,
            rng,
            subject_name: config.subject_name,
        };

        if session.turns.is_empty() {
            let greeting = templates::greeting(&mut session.rng, &session.subject_name);
            session.turns.push(Turn::assistant(greeting));
        }

        session
    }

    /// Process one user submission and return the reply.
    ///
    /// Appends the user turn, invokes the assistant with the full turn
    /// log, and appends the returned text as an assistant turn. The
    /// session always returns to `AwaitingInput`, success or failure.
    pub async fn submit(&mut self, input: &str) -> Reply {
        self.state = SessionState::Responding;

        self.turns.push(Turn::user(input));
        let wants_follow_up = self.turns.len() % FOLLOW_UP_EVERY == 0;

        let text = self.assistant.respond(input, &self.turns).await;
        self.turns.push(Turn::assistant(text.clone()));

        let follow_up = if wants_follow_up {
            Some(templates::follow_up(&mut self.rng))
        } else {
            None
        };

        self.state = SessionState::AwaitingInput;

        Reply { text, follow_up }
    }

    /// The full turn log, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    /// Get a reference to the assistant.
    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    /// Get a mutable reference to the assistant.
    pub fn assistant_mut(&mut self) -> &mut Assistant {
        &mut self.assistant
    }
}
