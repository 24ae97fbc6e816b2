//! Menu-driven shell around the ledger, reports, and snapshots.

pub mod commands;
pub mod formatting;
pub mod input;
pub mod io;
pub mod menus;
pub mod output;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, run_loop};
pub use shell_context::{CliMode, CommandError, CommandResult, ShellContext};
