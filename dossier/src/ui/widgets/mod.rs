//! Widgets for the chat TUI

pub mod input;
pub mod transcript;
