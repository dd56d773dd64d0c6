//! Chat transcript widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget, Wrap,
    },
};

use crate::ui::theme::ChatTheme;

/// What kind of entry a transcript line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptKind {
    /// A user query
    Query,
    /// An assistant reply (or apology)
    Reply,
    /// A supplementary follow-up hint
    FollowUp,
    /// A system notice
    System,
}

/// A single entry in the transcript display
#[derive(Debug, Clone)]
pub struct TranscriptItem {
    pub content: String,
    pub kind: TranscriptKind,
}

/// Widget for displaying the chat transcript
pub struct TranscriptWidget<'a> {
    items: &'a [TranscriptItem],
    scroll: usize,
    theme: &'a ChatTheme,
    focused: bool,
    title: &'a str,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(items: &'a [TranscriptItem], theme: &'a ChatTheme) -> Self {
        Self {
            items,
            scroll: 0,
            theme,
            focused: false,
            title: "Conversation",
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn style_for_kind(&self, kind: TranscriptKind) -> Style {
        match kind {
            TranscriptKind::Query => self.theme.query_style(),
            TranscriptKind::Reply => self.theme.reply_style(),
            TranscriptKind::FollowUp => self.theme.follow_up_style(),
            TranscriptKind::System => self.theme.system_style(),
        }
    }
}

impl Widget for TranscriptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            format!(" {} [j/k scroll] ", self.title)
        } else {
            format!(" {} ", self.title)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        // Build lines from transcript items
        let mut lines: Vec<Line> = Vec::new();

        for item in self.items {
            let style = self.style_for_kind(item.kind);

            let prefix = match item.kind {
                TranscriptKind::Query => "> ",
                TranscriptKind::FollowUp => "* ",
                TranscriptKind::System => "[ ",
                TranscriptKind::Reply => "",
            };

            let suffix = match item.kind {
                TranscriptKind::System => " ]",
                _ => "",
            };

            let text = format!("{}{}{}", prefix, item.content, suffix);

            for line in text.lines() {
                lines.push(Line::from(Span::styled(line.to_string(), style)));
            }

            // Blank line between entries
            lines.push(Line::from(""));
        }

        // Calculate scroll position
        let visible_height = inner.height as usize;
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false });

        paragraph.render(inner, buf);

        // Render scrollbar if content exceeds visible area
        if total_lines > visible_height {
            let scrollbar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .thumb_style(Style::default().fg(Color::DarkGray))
                .track_style(Style::default().fg(Color::Black));

            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);
            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
