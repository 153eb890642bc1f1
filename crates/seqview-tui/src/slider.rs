//! Term count slider panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use seqview_core::constants::TERMS_PAGE;
use seqview_core::TermCount;

use crate::styles::ColorTheme;

/// Render the term count slider as a gauge with adjustment hints.
pub fn render_terms_slider(frame: &mut Frame, area: Rect, terms: TermCount) {
    let theme = ColorTheme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Number of Terms "),
        )
        .gauge_style(Style::default().fg(theme.secondary))
        .ratio(terms.ratio().clamp(0.0, 1.0))
        .label(format!("{} terms", terms.get()));
    frame.render_widget(gauge, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("PgUp/PgDn", theme.key_style()),
        Span::raw(format!(": +/-{TERMS_PAGE} | ")),
        Span::styled("Home/End", theme.key_style()),
        Span::raw(format!(": {}/{}", TermCount::min(), TermCount::max())),
    ]))
    .style(theme.muted_style());
    frame.render_widget(hint, chunks[1]);
}
