//! Punchcard TUI Library
//!
//! Terminal user interface for the Punchcard employee time clock: the
//! application event loop, screens, theme, and report export.

pub mod app;
pub mod reports;
pub mod ui;
pub mod utils;

pub use app::App;
