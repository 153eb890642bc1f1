//! Outcome panel showing the generated sequence or an error.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// What the outcome panel should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent<'a> {
    /// No generation has run yet.
    Idle,
    /// The last generation succeeded.
    Success(&'a str),
    /// The last generation failed.
    Error(&'a str),
}

/// Render the outcome panel.
pub fn render_outcome(frame: &mut Frame, area: Rect, content: PanelContent<'_>) {
    let theme = ColorTheme::default();
    let (text, style, title) = match content {
        PanelContent::Idle => (
            "Press Enter to generate the selected sequence.",
            theme.muted_style(),
            " Result ",
        ),
        PanelContent::Success(message) => (message, theme.success_style(), " Result "),
        PanelContent::Error(message) => (message, theme.error_style(), " Error "),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style);
    let paragraph = Paragraph::new(text)
        .style(style)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
