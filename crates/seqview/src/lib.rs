//! seqview library — application logic for the sequence explorer.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
pub mod version;
