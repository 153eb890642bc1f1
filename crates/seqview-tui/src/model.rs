//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{info, warn};

use seqview_core::{generate_sequence, SequenceKind, TermCount};
use seqview_present::{plot_points, sequence_text, PlotBounds};

use crate::chart::render_chart;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::panel::{render_outcome, PanelContent};
use crate::selector::render_selector;
use crate::slider::render_terms_slider;

/// Result of the last generation, retained until the next trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A generated sequence with its presentation artifacts.
    Sequence {
        /// Kind that produced the sequence.
        kind: SequenceKind,
        /// Success message with the full rendered sequence.
        text: String,
        /// (index, value) pairs for the chart.
        points: Vec<(f64, f64)>,
        /// Padded y-axis bounds.
        bounds: PlotBounds,
    },
    /// Generation failed.
    Failed {
        /// Error message for the panel.
        message: String,
    },
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Currently selected sequence kind.
    pub kind: SequenceKind,
    /// Current term count.
    pub terms: TermCount,
    /// Outcome of the last trigger, if any.
    pub outcome: Option<Outcome>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Number of completed triggers.
    generations: u64,
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new(SequenceKind::default(), TermCount::default())
    }
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(kind: SequenceKind, terms: TermCount) -> Self {
        Self {
            kind,
            terms,
            outcome: None,
            should_quit: false,
            generations: 0,
        }
    }

    /// Get the number of completed triggers.
    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Handle a keyboard action (Elm Update).
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::PrevKind => {
                self.kind = self.kind.prev();
            }
            KeyAction::NextKind => {
                self.kind = self.kind.next();
            }
            KeyAction::IncTerms => {
                self.terms = self.terms.increment();
            }
            KeyAction::DecTerms => {
                self.terms = self.terms.decrement();
            }
            KeyAction::PageUpTerms => {
                self.terms = self.terms.page_up();
            }
            KeyAction::PageDownTerms => {
                self.terms = self.terms.page_down();
            }
            KeyAction::MinTerms => {
                self.terms = TermCount::min();
            }
            KeyAction::MaxTerms => {
                self.terms = TermCount::max();
            }
            KeyAction::Generate => {
                self.trigger();
            }
            KeyAction::None => {}
        }
    }

    /// Generate the selected sequence and record the outcome.
    ///
    /// Generation runs synchronously inside the update cycle; the counts
    /// this UI accepts stay cheap enough that no worker thread is needed.
    pub fn trigger(&mut self) {
        self.generations += 1;
        match generate_sequence(self.kind, self.terms.get()) {
            Ok(values) => {
                info!(
                    kind = %self.kind,
                    terms = self.terms.get(),
                    len = values.len(),
                    "sequence generated"
                );
                self.outcome = Some(Outcome::Sequence {
                    kind: self.kind,
                    text: format!("{}: {}", self.kind.title(), sequence_text(&values)),
                    points: plot_points(&values),
                    bounds: PlotBounds::from_values(&values),
                });
            }
            Err(err) => {
                warn!(kind = %self.kind, "generation failed: {err}");
                self.outcome = Some(Outcome::Failed {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Compute the main vertical layout.
    ///
    /// Returns (header, controls, outcome, chart, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(6), // controls (selector + slider)
                Constraint::Length(5), // outcome panel
                Constraint::Min(8),    // chart
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3], outer[4])
    }

    /// Compute the controls sub-layout (selector left, slider right).
    #[must_use]
    pub fn compute_controls_layout(controls_area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(controls_area);

        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, controls_area, outcome_area, chart_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, self.kind.label(), self.terms.get());

        let (selector_area, slider_area) = Self::compute_controls_layout(controls_area);
        render_selector(frame, selector_area, self.kind);
        render_terms_slider(frame, slider_area, self.terms);

        let content = match &self.outcome {
            None => PanelContent::Idle,
            Some(Outcome::Sequence { text, .. }) => PanelContent::Success(text),
            Some(Outcome::Failed { message }) => PanelContent::Error(message),
        };
        render_outcome(frame, outcome_area, content);

        if let Some(Outcome::Sequence {
            kind,
            points,
            bounds,
            ..
        }) = &self.outcome
        {
            render_chart(frame, chart_area, points, *bounds, kind.title());
        } else {
            render_chart(
                frame,
                chart_area,
                &[],
                PlotBounds::from_values(&[]),
                "Sequence Plot",
            );
        }

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            // Poll for events with tick rate timeout; a resize falls
            // through and the next draw picks up the new frame size.
            if event::poll(tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    let action = map_key(key_event);
                    self.handle_key_action(action);
                }
            }
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
