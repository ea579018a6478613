//! # Templates
//!
//! Output is produced from minijinja templates kept as standalone files so
//! they can be edited and diffed without touching Rust code.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a block tag
//! on its own line leaves no trace in the output. Line breaks come only from
//! lines that print something. A block tag at the END of a printing line
//! swallows that line's newline, so keep conditionals out of line endings and
//! precompute optional pieces in Rust instead.

pub const CARD_TEMPLATE: &str = include_str!("templates/card.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const HISTORY_TEMPLATE: &str = include_str!("templates/history.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const BANNER_TEMPLATE: &str = include_str!("templates/banner.tmp");

/// Kept inline: the trailing space matters.
pub const PROMPT_TEMPLATE: &str =
    r#"{{ identity | style("prompt_user") }}:{{ "~" | style("prompt_path") }}$ "#;

/// Name/source pairs registered on every renderer.
pub const ALL: [(&str, &str); 7] = [
    ("card", CARD_TEMPLATE),
    ("list", LIST_TEMPLATE),
    ("history", HISTORY_TEMPLATE),
    ("help", HELP_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("banner", BANNER_TEMPLATE),
    ("prompt", PROMPT_TEMPLATE),
];
