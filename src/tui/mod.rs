//! Terminal front ends.
//!
//! State and logic for the two TUI views live here so they can be tested
//! without a terminal; the binaries in `src/bin/` own the actual
//! ratatui/crossterm event loops.
//!
//! - [`app`]: the real-time animated orbit display
//! - [`panel`]: the control-panel view with a background simulation thread

pub mod app;
pub mod panel;
