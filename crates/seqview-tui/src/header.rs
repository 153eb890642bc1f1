//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, kind: &str, terms: i64) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("seqview", theme.header_style()),
        Span::raw(format!(" | Sequence: {kind} | Terms: {terms}")),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Sequence Explorer ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
