//! Profile-aware chat assistant engine.
//!
//! This crate provides:
//! - Résumé PDF extraction into a cleaned text profile
//! - Best-effort preference derivation (style, interests, languages)
//! - Context-aware prompt composition with a rolling topic memory
//! - A session shell driving a Claude-backed chat loop
//!
//! # Quick Start
//!
//! ```ignore
//! use dossier_core::{ChatSession, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SessionConfig::new("resume.pdf", "Alex");
//!
//!     let mut session = ChatSession::new(config)?;
//!
//!     let reply = session.submit("What are their hobbies?").await;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod model;
pub mod preferences;
pub mod profile;
pub mod session;
pub mod testing;

// Primary public API
pub use assistant::{Assistant, AssistantConfig, TopicMemory};
pub use model::Model;
pub use preferences::{CommunicationStyle, Preferences};
pub use profile::{ExtractionError, Profile};
pub use session::{ChatSession, Reply, Role, SessionConfig, SessionError, SessionState, Turn};
pub use testing::{MockModel, MockReply, TestHarness};
