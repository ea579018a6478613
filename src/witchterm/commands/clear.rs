use crate::commands::CmdResult;
use crate::error::Result;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_clear_screen())
}
