//! Top-level rendering for the chat TUI

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use crate::ui::widgets::input::InputWidget;
use crate::ui::widgets::transcript::TranscriptWidget;

/// Render the whole application frame
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let transcript = TranscriptWidget::new(&app.transcript, &app.theme)
        .scroll(app.transcript_scroll)
        .focused(app.input_mode == InputMode::Normal)
        .title(app.session.subject_name());
    f.render_widget(transcript, chunks[0]);

    let input = InputWidget::new(app.input_buffer(), &app.theme)
        .cursor_position(app.cursor_position())
        .active(app.input_mode == InputMode::Insert);
    f.render_widget(input, chunks[1]);

    render_status_line(f, app, chunks[2]);
}

fn render_status_line(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let text = match app.status_message() {
        Some(message) => message.to_string(),
        None => match app.input_mode {
            InputMode::Normal => "NORMAL  i: type  j/k: scroll  ?: help  q: quit".to_string(),
            InputMode::Insert => "INSERT  Enter: send  Esc: back to normal".to_string(),
        },
    };

    let line = Line::from(Span::styled(text, app.theme.system_style()));
    f.render_widget(Paragraph::new(line), area);
}
