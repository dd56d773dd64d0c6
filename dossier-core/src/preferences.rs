//! Preference derivation from the profile text.
//!
//! Everything here is best-effort string matching over the cleaned
//! profile. The snapshot is computed once at assistant construction and
//! never recomputed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::profile::Profile;

/// Trigger phrases that introduce an interest fragment.
const INTEREST_TRIGGERS: [&str; 5] = ["hobby", "interest", "passionate about", "enjoy", "like to"];

/// The fixed language allow-list for the membership test.
const KNOWN_LANGUAGES: [&str; 10] = [
    "English",
    "Spanish",
    "French",
    "German",
    "Mandarin",
    "Arabic",
    "Hindi",
    "Portuguese",
    "Russian",
    "Japanese",
];

// One pattern per trigger: capture the run from the trigger (an optional
// colon allowed) up to the next sentence or line boundary.
static INTEREST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    INTEREST_TRIGGERS
        .iter()
        .map(|trigger| {
            Regex::new(&format!(
                r"(?i){}\s*:?\s*(.+?)[\n.]",
                regex::escape(trigger)
            ))
            .expect("interest pattern is valid")
        })
        .collect()
});

/// Derived communication style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Professional,
    Casual,
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunicationStyle::Professional => write!(f, "professional"),
            CommunicationStyle::Casual => write!(f, "casual"),
        }
    }
}

/// Snapshot of preferences derived from the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub communication_style: CommunicationStyle,
    pub interests: Vec<String>,
    pub languages: Vec<String>,
}

impl Preferences {
    /// Derive preferences from a profile.
    pub fn derive(profile: &Profile) -> Self {
        let text = profile.text();
        let lower = text.to_lowercase();

        let communication_style = if lower.contains("professional") {
            CommunicationStyle::Professional
        } else {
            CommunicationStyle::Casual
        };

        Self {
            communication_style,
            interests: find_interests(text, &lower),
            languages: find_languages(&lower),
        }
    }
}

/// Scan for trigger phrases and capture the fragment after each one.
///
/// Duplicates across triggers collapse via set semantics; the output is
/// sorted so the order is stable.
fn find_interests(text: &str, lower: &str) -> Vec<String> {
    let mut interests = BTreeSet::new();

    for (trigger, pattern) in INTEREST_TRIGGERS.iter().zip(INTEREST_PATTERNS.iter()) {
        if !lower.contains(trigger) {
            continue;
        }
        for caps in pattern.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                let fragment = m.as_str().trim();
                if !fragment.is_empty() {
                    interests.insert(fragment.to_string());
                }
            }
        }
    }

    interests.into_iter().collect()
}

/// Literal case-insensitive membership test against the fixed list. No
/// normalization for synonyms or abbreviations.
fn find_languages(lower: &str) -> Vec<String> {
    KNOWN_LANGUAGES
        .iter()
        .filter(|lang| lower.contains(&lang.to_lowercase()))
        .map(|lang| lang.to_string())
        .collect()
}
