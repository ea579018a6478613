//! # Command Layer
//!
//! Every verb the prompt understands is a [`Verb`] variant, and every variant has
//! exactly one handler module (`commands/<verb>.rs`) with the same shape:
//! take the argument string and a [`CommandContext`], return a [`CmdResult`].
//!
//! Handlers never write to the terminal. They return structured data (the card
//! to print, list rows, messages) and the session renders it. Failures come
//! back as `Err(WitchError)` and the session turns them into a single warning
//! line, so a handler can use `?` freely without ever taking the prompt down.
//!
//! [`CommandTable`] maps lowercased tokens (names and aliases) to verbs. It is
//! built once and only read afterwards.

use crate::config::WitchConfig;
use crate::display::CardDisplay;
use crate::engine::{DrawEngine, ListEntry};
use crate::error::{Result, WitchError};
use crate::model::{CardRecord, DrawRecord};
use crate::share::ShareTarget;
use std::collections::HashMap;

pub mod clear;
pub mod draw;
pub mod help;
pub mod history;
pub mod list;
pub mod share;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Help,
    Draw,
    Show,
    List,
    History,
    Share,
    Clear,
}

impl Verb {
    /// All verbs in help order.
    pub const ALL: [Verb; 7] = [
        Verb::Help,
        Verb::Draw,
        Verb::Show,
        Verb::List,
        Verb::History,
        Verb::Share,
        Verb::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Draw => "draw",
            Verb::Show => "show",
            Verb::List => "list",
            Verb::History => "history",
            Verb::Share => "share",
            Verb::Clear => "clear",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Verb::Draw => &["d", "next"],
            _ => &[],
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Verb::Show => "show <number|name>",
            other => other.name(),
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Verb::Help => "Show this list of commands",
            Verb::Draw => "Draw a random card (never the same one twice in a row)",
            Verb::Show => "Show a card by its number or (part of) its name",
            Verb::List => "List every card in the deck",
            Verb::History => "Show the last cards you drew",
            Verb::Share => "Share a link to the current card",
            Verb::Clear => "Clear the screen",
        }
    }

    pub fn run(self, arg: &str, ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
        match self {
            Verb::Help => help::run(),
            Verb::Draw => draw::run(ctx),
            Verb::Show => show::run(arg, ctx),
            Verb::List => list::run(ctx),
            Verb::History => history::run(ctx),
            Verb::Share => share::run(ctx),
            Verb::Clear => clear::run(),
        }
    }
}

/// A parsed line: the verb and the trimmed rest of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub verb: Verb,
    pub arg: &'a str,
}

#[derive(Debug, Clone)]
pub struct CommandTable {
    verbs: HashMap<&'static str, Verb>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        let mut verbs = HashMap::new();
        for verb in Verb::ALL {
            verbs.insert(verb.name(), verb);
            for alias in verb.aliases() {
                verbs.insert(*alias, verb);
            }
        }
        Self { verbs }
    }

    pub fn lookup(&self, token: &str) -> Option<Verb> {
        self.verbs.get(token.to_lowercase().as_str()).copied()
    }

    /// `None` for a blank line, otherwise the invocation or an
    /// `UnknownCommand` error carrying the verb as typed.
    pub fn parse<'a>(&self, line: &'a str) -> Option<Result<Invocation<'a>>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (line, ""),
        };
        Some(
            self.lookup(token)
                .map(|verb| Invocation { verb, arg: rest })
                .ok_or_else(|| WitchError::UnknownCommand(token.to_string())),
        )
    }

    /// Parses and runs one line. A blank line runs nothing.
    pub fn dispatch(&self, line: &str, ctx: &mut CommandContext<'_>) -> Option<Result<CmdResult>> {
        let invocation = match self.parse(line)? {
            Ok(invocation) => invocation,
            Err(e) => return Some(Err(e)),
        };
        tracing::debug!(verb = invocation.verb.name(), arg = invocation.arg, "dispatch");
        Some(invocation.verb.run(invocation.arg, ctx))
    }
}

/// Everything a handler may touch.
pub struct CommandContext<'a> {
    pub engine: &'a mut DrawEngine,
    pub display: &'a mut dyn CardDisplay,
    pub share: &'a mut dyn ShareTarget,
    pub config: &'a WitchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub card: Option<CardRecord>,
    pub listed: Vec<ListEntry>,
    pub history: Vec<DrawRecord>,
    pub help: Vec<Verb>,
    pub clear_screen: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_card(mut self, card: CardRecord) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_listed(mut self, rows: Vec<ListEntry>) -> Self {
        self.listed = rows;
        self
    }

    pub fn with_history(mut self, history: Vec<DrawRecord>) -> Self {
        self.history = history;
        self
    }

    pub fn with_help(mut self, verbs: Vec<Verb>) -> Self {
        self.help = verbs;
        self
    }

    pub fn with_clear_screen(mut self) -> Self {
        self.clear_screen = true;
        self
    }
}
