//! Color theme and styling for the chat TUI

use ratatui::style::{Color, Modifier, Style};

/// Chat UI color theme
#[derive(Debug, Clone)]
pub struct ChatTheme {
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    pub query_text: Color,
    pub reply_text: Color,
    pub follow_up_text: Color,
    pub system_text: Color,
}

impl Default for ChatTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            query_text: Color::Cyan,
            reply_text: Color::White,
            follow_up_text: Color::Yellow,
            system_text: Color::DarkGray,
        }
    }
}

impl ChatTheme {
    /// Get style for assistant replies
    pub fn reply_style(&self) -> Style {
        Style::default().fg(self.reply_text)
    }

    /// Get style for user queries
    pub fn query_style(&self) -> Style {
        Style::default()
            .fg(self.query_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for follow-up hints
    pub fn follow_up_style(&self) -> Style {
        Style::default()
            .fg(self.follow_up_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for system messages
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}
