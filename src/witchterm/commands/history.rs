use crate::commands::{CmdMessage, CmdResult, CommandContext};
use crate::error::Result;

pub fn run(ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
    let recent = ctx.engine.recent_history(ctx.config.recent_limit);
    if recent.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "No cards drawn yet. Try \"draw\".",
        )));
    }
    Ok(CmdResult::default().with_history(recent))
}
