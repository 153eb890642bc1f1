//! # seqview-tui
//!
//! Interactive sequence explorer TUI using ratatui with Elm architecture.
//!
//! The model ([`TuiApp`]) owns the selected sequence kind and term count;
//! a trigger runs generation synchronously inside the update cycle and the
//! next draw renders the outcome panel and chart from the stored result.

pub mod chart;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod model;
pub mod panel;
pub mod selector;
pub mod slider;
pub mod styles;

pub use keymap::{map_key, KeyAction};
pub use model::{Outcome, TuiApp};
pub use panel::PanelContent;
pub use styles::ColorTheme;
