//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Field, HistoryEntry, Message, MessageStyle, Statistics, run_tui};
