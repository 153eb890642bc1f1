//! # seqview-present
//!
//! Presentation adapter between the sequence generator and the UI:
//! text rendering of a sequence, (index, value) pairs for plotting,
//! and padded y-axis bounds.

pub mod bounds;
pub mod points;
pub mod text;

pub use bounds::PlotBounds;
pub use points::plot_points;
pub use text::sequence_text;
