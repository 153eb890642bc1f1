//! Sequence type selector panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use seqview_core::SequenceKind;

use crate::styles::ColorTheme;

/// Render the sequence type list with the current selection highlighted.
pub fn render_selector(frame: &mut Frame, area: Rect, selected: SequenceKind) {
    let theme = ColorTheme::default();

    let items: Vec<ListItem> = SequenceKind::ALL
        .iter()
        .map(|&kind| {
            let marker = if kind == selected { "> " } else { "  " };
            let style = if kind == selected {
                theme.header_style()
            } else if kind.is_implemented() {
                theme.text_style()
            } else {
                theme.muted_style()
            };
            ListItem::new(Line::raw(format!("{marker}{}", kind.label()))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sequence Type "),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_rows(selected: SequenceKind) -> Vec<String> {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_selector(frame, area, selected);
            })
            .unwrap();

        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn lists_all_four_kinds() {
        let rows = rendered_rows(SequenceKind::Fibonacci);
        let content = rows.join("\n");
        assert!(content.contains("Fibonacci"));
        assert!(content.contains("Arithmetic Progression"));
        assert!(content.contains("Geometric Progression"));
        assert!(content.contains("Word-Based Sequence"));
    }

    #[test]
    fn marks_the_selected_kind() {
        let rows = rendered_rows(SequenceKind::Geometric);
        assert!(rows[3].contains("> Geometric Progression"));
        assert!(rows[1].contains("  Fibonacci"));
    }

    #[test]
    fn title_names_the_panel() {
        let rows = rendered_rows(SequenceKind::Fibonacci);
        assert!(rows[0].contains("Sequence Type"));
    }
}
