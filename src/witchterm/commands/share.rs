use crate::commands::{CmdMessage, CmdResult, CommandContext};
use crate::error::{Result, WitchError};
use crate::share::{ShareOutcome, SharePayload};

/// Never fails: whatever the share target does ends up as a message.
pub fn run(ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
    let payload = SharePayload::for_card(&ctx.config.share_url, ctx.engine.current());
    let message = match ctx.share.share(&payload) {
        Ok(ShareOutcome::Copied) => CmdMessage::success("Link copied to clipboard."),
        Ok(ShareOutcome::Shared) => CmdMessage::success("Shared."),
        Ok(ShareOutcome::Cancelled) => CmdMessage::info("Share cancelled."),
        Err(e) => {
            let e = match e {
                WitchError::Share(_) => e,
                other => WitchError::Share(other.to_string()),
            };
            tracing::debug!(error = %e, "share failed");
            CmdMessage::warning(e.to_string())
        }
    };
    Ok(CmdResult::default().with_message(message))
}
