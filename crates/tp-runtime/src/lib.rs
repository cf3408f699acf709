//! # Runtime
//!
//! Terminal front end for the address subsystems.
//!
//! ## Modular Structure
//!
//! - `cli` - Command-line arguments (`suggest`, `form`)
//! - `commands` - Line commands of the interactive form session
//! - `surface` - Presentation surface that prints to the terminal
//! - `logging` - `tracing` subscriber setup
//!
//! ## Form Session
//!
//! ```text
//! stdin line ──parse──→ FormCommand ──→ CascadingResolver ──spawn──→ fetch task
//!                                             ↑                          │
//!                                             └──── FetchOutcome ────────┘
//! ```
//!
//! Input and fetch outcomes are multiplexed with `tokio::select!`, so the
//! resolver stays owned by a single task.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod surface;

pub use cli::{Cli, Command, LevelArg};
pub use commands::{CommandError, FormCommand};
pub use surface::TerminalSurface;
