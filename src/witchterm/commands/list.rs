use crate::commands::{CmdResult, CommandContext};
use crate::error::{Result, WitchError};

/// Lists the deck in catalog order. Before the catalog arrives this warns
/// "not loaded", same as `draw` and `show`.
pub fn run(ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
    if !ctx.engine.is_loaded() {
        return Err(WitchError::EmptyCatalog);
    }
    Ok(CmdResult::default().with_listed(ctx.engine.list_all()))
}
