//! Main application state and logic

use dossier_core::ChatSession;

use crate::ui::theme::ChatTheme;
use crate::ui::widgets::transcript::{TranscriptItem, TranscriptKind};

/// Input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - free text input
    Insert,
}

/// Main application state
pub struct App {
    pub session: ChatSession,

    // UI state
    pub theme: ChatTheme,

    // Transcript display
    pub transcript: Vec<TranscriptItem>,
    pub transcript_scroll: usize,
    pub scroll_locked_to_bottom: bool,

    // Input state
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new application around a session.
    pub fn new(session: ChatSession) -> Self {
        let mut app = Self {
            session,
            theme: ChatTheme::default(),
            transcript: Vec::new(),
            transcript_scroll: 0,
            scroll_locked_to_bottom: true,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            status_message: None,
            should_quit: false,
        };

        // Echo the seeded greeting into the transcript.
        let greeting = app.session.turns().first().map(|t| t.content.clone());
        if let Some(greeting) = greeting {
            app.add_entry(greeting, TranscriptKind::Reply);
        }
        app.add_entry(
            "Press 'i' to ask a question, 'q' to quit, j/k to scroll".to_string(),
            TranscriptKind::System,
        );

        app
    }

    /// Add a transcript entry
    pub fn add_entry(&mut self, content: String, kind: TranscriptKind) {
        self.transcript.push(TranscriptItem { content, kind });

        if self.scroll_locked_to_bottom {
            self.scroll_to_bottom();
        }
    }

    /// Submit the query and append the reply (and any follow-up hint).
    pub async fn process_input(&mut self, input: &str) {
        let reply = self.session.submit(input).await;

        self.add_entry(reply.text, TranscriptKind::Reply);
        if let Some(follow_up) = reply.follow_up {
            self.add_entry(follow_up, TranscriptKind::FollowUp);
        }
    }

    /// Exit to normal mode
    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Scroll transcript to bottom and lock to bottom
    pub fn scroll_to_bottom(&mut self) {
        // Set to max value - the widget will cap it to actual max_scroll
        self.transcript_scroll = usize::MAX / 2;
        self.scroll_locked_to_bottom = true;
    }

    /// Scroll to the top and unlock from auto-scroll
    pub fn scroll_to_top(&mut self) {
        self.transcript_scroll = 0;
        self.scroll_locked_to_bottom = false;
    }

    /// Estimate max scroll based on transcript content
    /// Uses conservative estimate assuming ~60 char effective width
    fn estimate_max_scroll(&self) -> usize {
        const ESTIMATED_WIDTH: usize = 60;
        const ESTIMATED_VISIBLE_HEIGHT: usize = 20;

        let estimated_lines: usize = self
            .transcript
            .iter()
            .map(|item| {
                item.content
                    .lines()
                    .map(|line| (line.len() / ESTIMATED_WIDTH).max(1))
                    .sum::<usize>()
                    + 1 // blank line between entries
            })
            .sum();

        estimated_lines.saturating_sub(ESTIMATED_VISIBLE_HEIGHT)
    }

    /// Scroll transcript up (unlocks from bottom)
    pub fn scroll_up(&mut self, lines: usize) {
        let max_scroll = self.estimate_max_scroll();
        if self.transcript_scroll > max_scroll {
            self.transcript_scroll = max_scroll;
        }
        self.transcript_scroll = self.transcript_scroll.saturating_sub(lines);
        self.scroll_locked_to_bottom = false;
    }

    /// Scroll transcript down
    pub fn scroll_down(&mut self, lines: usize) {
        self.transcript_scroll = self.transcript_scroll.saturating_add(lines);
        let max_scroll = self.estimate_max_scroll();
        self.transcript_scroll = self.transcript_scroll.min(max_scroll + 100);
        // User must press G to re-lock to the bottom
    }

    /// Submit current input, clearing the buffer
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input_buffer.is_empty() {
            return None;
        }

        let input = std::mem::take(&mut self.input_buffer);
        self.cursor_position = 0;
        Some(input)
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Insert a character at the cursor
    pub fn type_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input_buffer.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index();
            self.input_buffer.remove(idx);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        let idx = self.byte_index();
        if idx < self.input_buffer.len() {
            self.input_buffer.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        if self.cursor_position < char_count {
            self.cursor_position += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Byte index of the cursor in the input buffer.
    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len())
    }
}
