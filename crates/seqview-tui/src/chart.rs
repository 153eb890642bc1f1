//! Sequence line chart.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use seqview_present::PlotBounds;

use crate::styles::ColorTheme;

/// Render the sequence as a line chart with point markers.
///
/// An empty point set renders only the titled frame.
#[allow(clippy::cast_precision_loss)]
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    points: &[(f64, f64)],
    bounds: PlotBounds,
    title: &str,
) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(theme.border));

    if points.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let x_upper = points.len().saturating_sub(1).max(1) as f64;
    let (y_lower, y_upper) = display_bounds(bounds);

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.primary))
            .data(points),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.secondary))
            .data(points),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Index")
                .style(Style::default().fg(theme.border))
                .bounds([0.0, x_upper])
                .labels(tick_labels(0.0, x_upper)),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(Style::default().fg(theme.border))
                .bounds([y_lower, y_upper])
                .labels(tick_labels(y_lower, y_upper)),
        );

    frame.render_widget(chart, area);
}

/// Widen a zero-height range so the axis keeps distinct endpoints.
fn display_bounds(bounds: PlotBounds) -> (f64, f64) {
    if bounds.span() > f64::EPSILON {
        (bounds.lower, bounds.upper)
    } else {
        (bounds.lower - 0.5, bounds.upper + 0.5)
    }
}

/// Three tick labels (low, mid, high) for an axis.
fn tick_labels(lower: f64, upper: f64) -> Vec<String> {
    let mid = (lower + upper) / 2.0;
    vec![format_tick(lower), format_tick(mid), format_tick(upper)]
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 1e6 {
        format!("{value:.2e}")
    } else if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
