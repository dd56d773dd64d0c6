//! Rolling topic memory.
//!
//! A bounded FIFO of recently seen query keywords. Keywords are word
//! tokens of at least four characters; each query contributes at most
//! three, and only the five most recent entries are retained.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of topics retained.
const MAX_TOPICS: usize = 5;

/// Keywords taken from each query.
const TOPICS_PER_TURN: usize = 3;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w{4,}\b").expect("word pattern is valid"));

/// Bounded rolling list of recently seen query keywords.
#[derive(Debug, Clone, Default)]
pub struct TopicMemory {
    topics: Vec<String>,
}

impl TopicMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the topics of a query, then truncate to the most recent
    /// entries. There is no deduplication across turns.
    pub fn observe(&mut self, query: &str) {
        self.topics.extend(extract_topics(query));
        if self.topics.len() > MAX_TOPICS {
            self.topics.drain(..self.topics.len() - MAX_TOPICS);
        }
    }

    /// The retained topics, oldest first.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Extract up to [`TOPICS_PER_TURN`] unique keywords from the text.
///
/// Tokens are lowercased word runs of length >= 4, kept in first
/// occurrence order, so the same query always yields the same topics.
fn extract_topics(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut topics: Vec<String> = Vec::new();

    for m in WORD_PATTERN.find_iter(&lower) {
        let word = m.as_str();
        if topics.iter().any(|t| t == word) {
            continue;
        }
        topics.push(word.to_string());
        if topics.len() == TOPICS_PER_TURN {
            break;
        }
    }

    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_excluded() {
        assert_eq!(extract_topics("What are his hobbies?"), vec!["what", "hobbies"]);
    }

    #[test]
    fn test_at_most_three_per_query() {
        let topics = extract_topics("favorite books movies games music");
        assert_eq!(topics, vec!["favorite", "books", "movies"]);
    }

    #[test]
    fn test_duplicates_within_query_collapse() {
        let topics = extract_topics("work work work balance");
        assert_eq!(topics, vec!["work", "balance"]);
    }

    #[test]
    fn test_memory_never_exceeds_capacity() {
        let mut memory = TopicMemory::new();
        for i in 0..20 {
            memory.observe(&format!("question number{i} about things"));
        }
        assert_eq!(memory.len(), MAX_TOPICS);
    }

    #[test]
    fn test_memory_keeps_most_recent() {
        let mut memory = TopicMemory::new();
        memory.observe("alpha bravo charlie");
        memory.observe("delta echoes foxtrot");

        assert_eq!(
            memory.topics(),
            ["bravo", "charlie", "delta", "echoes", "foxtrot"]
        );
    }

    #[test]
    fn test_no_deduplication_across_turns() {
        let mut memory = TopicMemory::new();
        memory.observe("hobbies");
        memory.observe("hobbies");
        assert_eq!(memory.topics(), ["hobbies", "hobbies"]);
    }
}
