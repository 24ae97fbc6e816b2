//! Handlers behind each main-menu entry.

pub mod expense;
pub mod income;
pub mod listing;
pub mod report;
pub mod snapshot;
pub mod subscription;

use crate::ledger::EntryKind;

use super::{
    io, output,
    shell_context::{CommandResult, ShellContext},
};

/// Asks for an index and removes that entry; an unusable index changes nothing.
pub(crate) fn delete_entry(context: &mut ShellContext, kind: EntryKind) -> CommandResult {
    let Some(index) = io::read_index(context.input.as_mut())? else {
        return Ok(());
    };
    if context.ledger.remove_at(kind, index).is_some() {
        output::success(format!("{kind} deleted."));
    }
    Ok(())
}
