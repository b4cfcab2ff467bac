//! # Tide - Deep Work Session Tracking
//!
//! A command-line utility for focused, single-tasking work sessions:
//! start, pause, resume, and end a deep work interval, keep an append-only
//! history of completed sessions, and analyze where the focus time went.
//!
//! ## Features
//!
//! - **Session Lifecycle**: One active session at a time, with pause
//!   accounting that never conflates working time and paused time
//! - **Append-Only History**: Completed sessions stored as JSON Lines in
//!   monthly partitions, tolerant of partial corruption
//! - **Focus Insights**: Statistics, busiest-day analysis, top activities
//! - **Dashboard**: Yearly contribution graph with streak tracking
//! - **Gentle Reminders**: A watch loop with debounced nudges
//! - **Data Export**: CSV and JSON export of session history
//! - **Hooks**: User scripts invoked on lifecycle events
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tide::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
