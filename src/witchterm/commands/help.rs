use crate::commands::{CmdResult, Verb};
use crate::error::Result;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_help(Verb::ALL.to_vec()))
}
