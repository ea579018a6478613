//! # Rendering
//!
//! Turns [`CmdResult`]s, messages, the prompt and the banner into ANSI text.
//!
//! Structure lives in minijinja templates (see [`templates`]); colors live in a
//! [`Theme`] of named `console::Style`s applied through the `style` filter:
//!
//! ```jinja
//! {{ card.name | style("card_name") }}
//! ```
//!
//! Whether ANSI codes are emitted is decided once, when the [`Renderer`] is
//! built. With color off the filter still validates the style name, so a typo
//! in a template shows up as `(!?)` in plain output too.
//!
//! Layout math (padding, time formatting) stays in Rust; templates only place
//! precomputed strings.

use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::engine::ListEntry;
use crate::model::{CardRecord, DrawRecord};
use chrono::Utc;
use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

pub mod styles;
pub mod templates;

use styles::names;

/// Prefix shown when a template asks for a style the theme does not have.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub const BANNER_TITLE: &str = "Web3 Witch Terminal ready.";
pub const CURRENT_MARKER: &str = "→";

/// A set of named styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

#[derive(Serialize)]
struct CardView<'a> {
    name: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct CardData<'a> {
    card: CardView<'a>,
}

#[derive(Serialize)]
struct ListRow<'a> {
    marker: &'static str,
    position: String,
    name: &'a str,
}

#[derive(Serialize)]
struct ListData<'a> {
    rows: Vec<ListRow<'a>>,
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    position: usize,
    name: &'a str,
    ago: String,
}

#[derive(Serialize)]
struct HistoryData<'a> {
    entries: Vec<HistoryRow<'a>>,
}

#[derive(Serialize)]
struct HelpRow {
    usage: &'static str,
    padding: String,
    about: &'static str,
    aliases: String,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpRow>,
}

#[derive(Serialize)]
struct MessageView<'a> {
    icon: &'static str,
    style: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageView<'a>>,
}

#[derive(Serialize)]
struct PromptData {
    identity: String,
}

#[derive(Serialize)]
struct BannerData {
    title: &'static str,
}

/// Compiled templates plus a theme, with color fixed at construction.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: Theme, use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, theme, use_color);
        for (name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// The default witch theme.
    pub fn witch(use_color: bool) -> Result<Self, Error> {
        Self::new(styles::WITCH_THEME.clone(), use_color)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    fn render_or_report<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.render(name, data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn prompt(&self, user: &str, host: &str) -> String {
        let data = PromptData {
            identity: format!("{}@{}", user, host),
        };
        self.render("prompt", &data)
            .unwrap_or_else(|_| format!("{}@{}:~$ ", user, host))
    }

    pub fn banner(&self) -> String {
        self.render_or_report("banner", &BannerData { title: BANNER_TITLE })
    }

    pub fn card(&self, card: &CardRecord) -> String {
        let data = CardData {
            card: CardView {
                name: &card.name,
                text: &card.display_text,
            },
        };
        self.render_or_report("card", &data)
    }

    pub fn list(&self, rows: &[ListEntry]) -> String {
        let rows = rows
            .iter()
            .map(|row| ListRow {
                marker: if row.is_current { CURRENT_MARKER } else { " " },
                position: format!("{:>2}", row.position),
                name: &row.name,
            })
            .collect();
        self.render_or_report("list", &ListData { rows })
    }

    pub fn history(&self, entries: &[DrawRecord]) -> String {
        let formatter = timeago::Formatter::new();
        let now = Utc::now();
        let entries = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| HistoryRow {
                position: i + 1,
                name: &entry.name,
                ago: formatter.convert(
                    now.signed_duration_since(entry.drawn_at)
                        .to_std()
                        .unwrap_or_default(),
                ),
            })
            .collect();
        self.render_or_report("history", &HistoryData { entries })
    }

    pub fn help(&self, verbs: &[crate::commands::Verb]) -> String {
        let width = verbs.iter().map(|v| v.usage().width()).max().unwrap_or(0);
        let commands = verbs
            .iter()
            .map(|verb| {
                let aliases = verb.aliases();
                HelpRow {
                    usage: verb.usage(),
                    padding: " ".repeat(width - verb.usage().width()),
                    about: verb.about(),
                    aliases: if aliases.is_empty() {
                        String::new()
                    } else {
                        format!(" (also: {})", aliases.join(", "))
                    },
                }
            })
            .collect();
        self.render_or_report("help", &HelpData { commands })
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let messages = messages
            .iter()
            .map(|msg| {
                let (icon, style) = match msg.level {
                    MessageLevel::Info => ("•", names::INFO),
                    MessageLevel::Success => ("✔", names::SUCCESS),
                    MessageLevel::Warning => ("✖", names::WARNING),
                };
                MessageView {
                    icon,
                    style,
                    content: &msg.content,
                }
            })
            .collect();
        self.render_or_report("messages", &MessagesData { messages })
    }

    /// Everything a command produced, in a fixed order: card, list, history,
    /// help, then messages. Screen clearing is not text and is left to the
    /// caller.
    pub fn result(&self, result: &CmdResult) -> String {
        let mut out = String::new();
        if let Some(card) = &result.card {
            out.push_str(&self.card(card));
        }
        if !result.listed.is_empty() {
            out.push_str(&self.list(&result.listed));
        }
        if !result.history.is_empty() {
            out.push_str(&self.history(&result.history));
        }
        if !result.help.is_empty() {
            out.push_str(&self.help(&result.help));
        }
        out.push_str(&self.messages(&result.messages));
        out
    }
}

/// Registers the `style` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });
}
