//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("Up/Down", theme.key_style()),
        Span::raw(": sequence | "),
        Span::styled("Left/Right", theme.key_style()),
        Span::raw(": terms | "),
        Span::styled("Enter", theme.key_style()),
        Span::raw(": generate | "),
        Span::styled("q", theme.key_style()),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
