//! Fixed conversation templates.
//!
//! Greetings and follow-ups are chosen pseudo-randomly from these fixed
//! sets. The random source is injected by the caller so selection can be
//! made deterministic in tests.

use rand::Rng;

const GREETINGS: [&str; 3] = [
    "Hi there! I'm {name}'s personal assistant. How can I help you today?",
    "Hello! I'm ready to answer any questions you might have about {name}.",
    "Greetings! What would you like to know about {name}?",
];

const FOLLOW_UPS: [&str; 3] = [
    "Is there anything else you'd like to know?",
    "Feel free to ask me more!",
    "I'm happy to provide more details if you're interested.",
];

/// Pick a greeting, personalized with the subject's name.
pub fn greeting<R: Rng + ?Sized>(rng: &mut R, subject_name: &str) -> String {
    let template = GREETINGS[rng.gen_range(0..GREETINGS.len())];
    template.replace("{name}", subject_name)
}

/// Pick a follow-up prompt.
pub fn follow_up<R: Rng + ?Sized>(rng: &mut R) -> String {
    FOLLOW_UPS[rng.gen_range(0..FOLLOW_UPS.len())].to_string()
}
