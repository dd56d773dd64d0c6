//! Live API integration tests.
//!
//! These hit the real Anthropic API and are ignored by default.
//!
//! Run with: `ANTHROPIC_API_KEY=$ANTHROPIC_API_KEY cargo test -p dossier-core --test api_integration -- --ignored --nocapture`

use dossier_core::{Assistant, ChatSession, Profile, SessionConfig};

/// Load environment variables from .env file
fn setup() {
    let _ = dotenvy::dotenv();
}

/// Check if API key is available
fn has_api_key() -> bool {
    std::env::var("ANTHROPIC_API_KEY").is_ok()
}

const SAMPLE_PROFILE: &str = "Jordan Reyes is a professional backend engineer based in Lisbon. \
    I enjoy trail running and baking sourdough. I speak English and Portuguese. \
    Jordan has eight years of experience building payment systems.";

#[tokio::test]
#[ignore]
async fn test_live_profile_question() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: ANTHROPIC_API_KEY not set");
        return;
    }

    let assistant = Assistant::from_env(Profile::from_text(SAMPLE_PROFILE))
        .expect("API key checked above");
    let config = SessionConfig::new("unused.pdf", "Jordan")
        .with_model("claude-3-5-haiku-20241022")
        .with_max_tokens(512);
    let mut session = ChatSession::with_assistant(assistant, config);

    let reply = session.submit("Where is Jordan based?").await;
    println!("Reply: {}", reply.text);

    assert!(!reply.text.is_empty());
    assert!(
        !reply.text.starts_with("I'm having trouble processing that."),
        "live call failed: {}",
        reply.text
    );
    // Haiku should have no trouble reading the city out of the profile.
    assert!(reply.text.contains("Lisbon"));
}

#[tokio::test]
#[ignore]
async fn test_live_multi_turn_conversation() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: ANTHROPIC_API_KEY not set");
        return;
    }

    let assistant = Assistant::from_env(Profile::from_text(SAMPLE_PROFILE))
        .expect("API key checked above");
    let config = SessionConfig::new("unused.pdf", "Jordan")
        .with_model("claude-3-5-haiku-20241022")
        .with_max_tokens(512);
    let mut session = ChatSession::with_assistant(assistant, config);

    let first = session.submit("What are Jordan's hobbies?").await;
    println!("First: {}", first.text);

    let second = session.submit("Which of those happens outdoors?").await;
    println!("Second: {}", second.text);

    assert!(!second.text.is_empty());
    // Topic memory picked up keywords from both queries.
    assert!(!session.assistant().memory().is_empty());
    assert_eq!(session.turns().len(), 5);
}
