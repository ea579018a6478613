use crate::commands::{CmdResult, CommandContext, Verb};
use crate::error::{Result, WitchError};

/// `show <number|name>`: the whole rest of the line is the argument.
pub fn run(arg: &str, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(WitchError::MissingArgument {
            verb: Verb::Show.name(),
            usage: Verb::Show.usage(),
        });
    }
    let card = ctx.engine.resolve_argument(arg)?;
    ctx.display.render(&card);
    Ok(CmdResult::default().with_card(card))
}
