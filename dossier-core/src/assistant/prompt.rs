//! Context-aware prompt composition.
//!
//! One composed prompt per query: profile text, derived preferences,
//! rolling topics, the query itself, and the trailing turns of history.
//! Nothing is truncated; a large profile inflates every request.

use crate::assistant::memory::TopicMemory;
use crate::preferences::Preferences;
use crate::profile::Profile;
use crate::session::Turn;

/// Trailing turns of history included in the prompt.
const RECENT_TURNS: usize = 3;

/// Tone carried into every prompt.
const CONVERSATION_TONE: &str = "friendly";

const RESPONSE_GUIDELINES: &str = include_str!("prompts/guidelines.txt");

/// Build the full prompt for one query.
pub(crate) fn compose(
    profile: &Profile,
    preferences: &Preferences,
    memory: &TopicMemory,
    query: &str,
    history: &[Turn],
) -> String {
    let preferences_json = serde_json::to_string(preferences).unwrap_or_default();

    let mut sections = vec![
        format!("Personal Information Profile:\n{}", profile.text()),
        format!("User Preferences: {preferences_json}"),
        format!("Conversation Tone: {CONVERSATION_TONE}"),
        format!(
            "Previous Conversation Topics: {}",
            memory.topics().join(", ")
        ),
        format!("Current Query: {query}"),
    ];

    if !history.is_empty() {
        sections.push("Recent Conversation History:".to_string());
        let start = history.len().saturating_sub(RECENT_TURNS);
        for turn in &history[start..] {
            sections.push(format!("{}: {}", turn.role, turn.content));
        }
    }

    format!(
        "{}\n\nResponse Guidelines:\n{}",
        sections.join("\n\n"),
        RESPONSE_GUIDELINES
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Preferences;

    fn fixture() -> (Profile, Preferences, TopicMemory) {
        let profile = Profile::from_text("I enjoy hiking. A professional who speaks French.");
        let preferences = Preferences::derive(&profile);
        (profile, preferences, TopicMemory::new())
    }

    #[test]
    fn test_prompt_contains_query() {
        let (profile, preferences, memory) = fixture();
        let prompt = compose(&profile, &preferences, &memory, "What does he do?", &[]);
        assert!(prompt.contains("Current Query: What does he do?"));
    }

    #[test]
    fn test_prompt_contains_profile_and_preferences() {
        let (profile, preferences, memory) = fixture();
        let prompt = compose(&profile, &preferences, &memory, "anything", &[]);

        assert!(prompt.contains("I enjoy hiking."));
        assert!(prompt.contains("\"communication_style\":\"professional\""));
        assert!(prompt.contains("French"));
        assert!(prompt.contains("Conversation Tone: friendly"));
        assert!(prompt.contains("Response Guidelines:"));
    }

    #[test]
    fn test_prompt_includes_topics() {
        let (profile, preferences, mut memory) = fixture();
        memory.observe("tell me about mountains");
        let prompt = compose(&profile, &preferences, &memory, "more", &[]);
        assert!(prompt.contains("Previous Conversation Topics: tell, about, mountains"));
    }

    #[test]
    fn test_history_limited_to_trailing_turns() {
        let (profile, preferences, memory) = fixture();
        let history = vec![
            Turn::user("first"),
            Turn::assistant("second"),
            Turn::user("third"),
            Turn::assistant("fourth"),
        ];

        let prompt = compose(&profile, &preferences, &memory, "now", &history);

        assert!(!prompt.contains("user: first"));
        assert!(prompt.contains("assistant: second"));
        assert!(prompt.contains("user: third"));
        assert!(prompt.contains("assistant: fourth"));
    }

    #[test]
    fn test_no_history_section_when_empty() {
        let (profile, preferences, memory) = fixture();
        let prompt = compose(&profile, &preferences, &memory, "hello", &[]);
        assert!(!prompt.contains("Recent Conversation History:"));
    }
}
