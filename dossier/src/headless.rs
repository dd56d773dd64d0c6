//! Headless mode for the dossier chat.
//!
//! This module provides a simple line-oriented interface for running a
//! session without a TUI. It's designed for scripting and automated
//! testing.

use dossier_core::{ChatSession, SessionConfig, SessionError};
use std::io::{self, BufRead, Write};

/// Run the chat in headless mode.
///
/// Queries are read one per line; lines starting with `#` are commands.
pub async fn run_headless(config: SessionConfig) -> Result<(), SessionError> {
    let mut session = ChatSession::new(config)?;

    println!("=== Dossier Headless Mode ===");
    println!("Subject: {}", session.subject_name());
    if session.assistant().profile().is_empty() {
        println!("Warning: no text could be extracted from the document.");
    }
    println!();
    println!("Commands:");
    println!("  #quit     - Exit");
    println!("  #topics   - Show the rolling topic memory");
    println!("  #profile  - Show the derived preference snapshot");
    println!("  #help     - Show this help");
    println!();

    if let Some(greeting) = session.turns().first() {
        println!("[ASSISTANT]");
        println!("{}", greeting.content);
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Handle commands
        if let Some(command) = line.strip_prefix('#') {
            match command.split_whitespace().next() {
                Some("quit") | Some("exit") => {
                    println!("Goodbye!");
                    break;
                }
                Some("topics") => {
                    let topics = session.assistant().memory().topics();
                    if topics.is_empty() {
                        println!("[TOPICS] (none yet)");
                    } else {
                        println!("[TOPICS] {}", topics.join(", "));
                    }
                }
                Some("profile") => {
                    let preferences = session.assistant().preferences();
                    match serde_json::to_string_pretty(preferences) {
                        Ok(json) => println!("[PROFILE]\n{json}"),
                        Err(e) => println!("[ERROR] {e}"),
                    }
                }
                Some("help") => {
                    println!("[HELP]");
                    println!("  #quit     - Exit");
                    println!("  #topics   - Show the rolling topic memory");
                    println!("  #profile  - Show the derived preference snapshot");
                    println!("  #help     - Show this help");
                    println!("  (anything else is sent as a question)");
                }
                _ => {
                    println!("[ERROR] Unknown command. Type #help for help.");
                }
            }
            stdout.flush().ok();
            continue;
        }

        // Send the question to the assistant
        print!("[THINKING]");
        stdout.flush().ok();

        let reply = session.submit(line).await;

        // Clear the thinking indicator
        print!("\r          \r");
        stdout.flush().ok();

        println!("[ASSISTANT]");
        println!("{}", reply.text);
        if let Some(follow_up) = reply.follow_up {
            println!("({follow_up})");
        }
        println!();
    }

    Ok(())
}
