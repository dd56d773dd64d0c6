//! Dossier chat TUI application.
//!
//! An interactive assistant that answers questions about one person,
//! grounded in the text of their résumé PDF.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for
//! scripting and automated testing:
//!
//! ```bash
//! cargo run -p dossier -- resume.pdf --name "Jordan" --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dossier_core::{ChatSession, SessionConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;
use ui::widgets::transcript::TranscriptKind;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the chat transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dossier=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // The API credential comes from the environment, never from flags.
    if std::env::var("ANTHROPIC_API_KEY").is_err() {
        eprintln!("Error: ANTHROPIC_API_KEY environment variable not set.");
        eprintln!("Please set it in .env file or with: export ANTHROPIC_API_KEY=your_key_here");
        std::process::exit(1);
    }

    let config = match parse_config_from_args(&args) {
        Some(config) => config,
        None => {
            eprintln!("Error: no document path given.\n");
            print_help();
            std::process::exit(1);
        }
    };

    tracing::info!(
        document = %config.document_path.display(),
        subject = %config.subject_name,
        "starting session"
    );

    if args.iter().any(|a| a == "--headless") {
        return headless::run_headless(config).await.map_err(|e| e.into());
    }

    let session = match ChatSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create chat session: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(session)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    // Track pending input for async processing
    let mut pending_input: Option<String> = None;

    loop {
        terminal.draw(|f| render(f, &app))?;

        // Process any pending input asynchronously. The query is echoed
        // into the transcript before the completion call so the user
        // sees it alongside the "Thinking..." status.
        if let Some(input) = pending_input.take() {
            app.add_entry(input.clone(), TranscriptKind::Query);
            app.set_status("Thinking...");
            terminal.draw(|f| render(f, &app))?;

            app.process_input(&input).await;
            app.clear_status();
            app.enter_normal_mode();
        }

        // Poll for events with a timeout so status updates stay fresh
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;

            match handle_event(&mut app, ev) {
                EventResult::Quit => {
                    return Ok(());
                }
                EventResult::ProcessInput => {
                    if let Some(input) = app.submit_input() {
                        pending_input = Some(input);
                    }
                }
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Parse session configuration from command line arguments.
fn parse_config_from_args(args: &[String]) -> Option<SessionConfig> {
    let mut document: Option<String> = None;
    let mut name: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                if let Some(value) = args.get(i + 1) {
                    name = Some(value.clone());
                    i += 1;
                }
            }
            "--headless" => {}
            arg if !arg.starts_with('-') => {
                if document.is_none() {
                    document = Some(arg.to_string());
                }
            }
            _ => {}
        }
        i += 1;
    }

    let document = document?;
    let name = name.unwrap_or_else(|| subject_from_path(&document));
    Some(SessionConfig::new(document, name))
}

/// Fall back to the document's file stem as the subject name.
fn subject_from_path(path: &str) -> String {
    std::path::Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("the subject")
        .to_string()
}

fn print_help() {
    println!("Dossier - chat assistant for one person's résumé");
    println!();
    println!("USAGE:");
    println!("  dossier <DOCUMENT.pdf> [OPTIONS]");
    println!();
    println!("ARGUMENTS:");
    println!("  <DOCUMENT.pdf>   Résumé PDF the assistant answers from");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --name <NAME>    Subject's name (default: the document's file stem)");
    println!("  --headless       Run in headless mode (line-oriented, no TUI)");
    println!();
    println!("ENVIRONMENT:");
    println!("  ANTHROPIC_API_KEY   API credential (required; .env is honored)");
    println!();
    println!("EXAMPLES:");
    println!("  dossier resume.pdf --name Jordan");
    println!("  dossier resume.pdf --headless");
}
