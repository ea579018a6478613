//! # REPL Session
//!
//! [`ReplSession`] is the whole interactive program minus the real terminal.
//! It owns the draw engine, the command table and the line editor, and talks
//! to the outside through three sinks:
//!
//! - a [`Terminal`] for text,
//! - a [`CardDisplay`] for the active card,
//! - a [`ShareTarget`] for `share`.
//!
//! Callers feed it keys ([`ReplSession::feed`]) and, once the background load
//! finishes, the catalog ([`ReplSession::catalog_loaded`]). Whatever a command
//! does, the prompt is drawn again afterwards; a failing command produces one
//! warning line and nothing else.

use crate::commands::{CmdMessage, CommandContext, CommandTable};
use crate::config::WitchConfig;
use crate::display::CardDisplay;
use crate::engine::DrawEngine;
use crate::error::Result;
use crate::line_editor::{EditorEffect, KeyInput, LineEditor, ERASE_SEQUENCE, INTERRUPT_MARKER};
use crate::model::Catalog;
use crate::render::Renderer;
use crate::share::ShareTarget;
use crate::terminal::Terminal;

pub struct ReplSession<T: Terminal, D: CardDisplay, S: ShareTarget> {
    terminal: T,
    display: D,
    share: S,
    engine: DrawEngine,
    table: CommandTable,
    config: WitchConfig,
    renderer: Renderer,
    editor: LineEditor,
    echo: bool,
}

impl<T: Terminal, D: CardDisplay, S: ShareTarget> ReplSession<T, D, S> {
    pub fn new(
        terminal: T,
        display: D,
        share: S,
        engine: DrawEngine,
        config: WitchConfig,
        renderer: Renderer,
    ) -> Self {
        Self {
            terminal,
            display,
            share,
            engine,
            table: CommandTable::new(),
            config,
            renderer,
            editor: LineEditor::new(),
            echo: true,
        }
    }

    /// Turns key echo off, for input the terminal already shows (line mode).
    pub fn without_echo(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Banner, then the first prompt.
    pub fn start(&mut self) {
        let banner = self.renderer.banner();
        self.terminal.write(&banner);
        self.write_prompt();
    }

    pub fn feed(&mut self, key: KeyInput) {
        for effect in self.editor.handle(key) {
            self.apply(effect);
        }
    }

    /// Types `line` and presses Enter.
    pub fn feed_line(&mut self, line: &str) {
        for c in line.chars() {
            self.feed(KeyInput::Char(c));
        }
        self.feed(KeyInput::Enter);
    }

    fn apply(&mut self, effect: EditorEffect) {
        match effect {
            EditorEffect::Echo(c) => {
                if self.echo {
                    let mut buf = [0u8; 4];
                    self.terminal.write(c.encode_utf8(&mut buf));
                }
            }
            EditorEffect::EraseLast => {
                if self.echo {
                    self.terminal.write(ERASE_SEQUENCE);
                }
            }
            EditorEffect::Newline => {
                if self.echo {
                    self.terminal.write("\n");
                }
            }
            EditorEffect::Interrupted => self.terminal.write(INTERRUPT_MARKER),
            EditorEffect::Submit(line) => {
                self.execute_line(&line);
                for effect in self.editor.finish() {
                    self.apply(effect);
                }
            }
            EditorEffect::Prompt => self.write_prompt(),
        }
    }

    /// Runs one already-trimmed line. A blank line prints nothing.
    fn execute_line(&mut self, line: &str) {
        let mut ctx = CommandContext {
            engine: &mut self.engine,
            display: &mut self.display,
            share: &mut self.share,
            config: &self.config,
        };
        let result = match self.table.dispatch(line, &mut ctx) {
            None => return,
            Some(result) => result,
        };

        match result {
            Ok(result) => {
                if result.clear_screen {
                    self.terminal.clear();
                }
                let output = self.renderer.result(&result);
                self.terminal.write(&output);
            }
            Err(e) => {
                tracing::debug!(error = %e, line, "command failed");
                let output = self.renderer.messages(&[CmdMessage::warning(e.to_string())]);
                self.terminal.write(&output);
            }
        }
    }

    /// Installs a freshly loaded catalog, or reports why there is none.
    ///
    /// A failure is printed on its own line; the prompt and whatever the user
    /// had typed are then drawn again.
    pub fn catalog_loaded(&mut self, result: Result<Catalog>) {
        match result {
            Ok(catalog) => self.engine.install(catalog),
            Err(e) => {
                tracing::debug!(error = %e, "catalog load failed");
                let output = self.renderer.messages(&[CmdMessage::warning(e.to_string())]);
                self.terminal.write("\n");
                self.terminal.write(&output);
                self.write_prompt();
                if self.echo {
                    let pending = self.editor.buffer().to_string();
                    self.terminal.write(&pending);
                }
            }
        }
    }

    /// Prints a warning outside of any command, e.g. a bad config file.
    pub fn warn(&mut self, message: impl Into<String>) {
        let output = self.renderer.messages(&[CmdMessage::warning(message)]);
        self.terminal.write(&output);
    }

    fn write_prompt(&mut self) {
        let prompt = self
            .renderer
            .prompt(&self.config.prompt_user, &self.config.prompt_host);
        self.terminal.write(&prompt);
    }

    pub fn buffer(&self) -> &str {
        self.editor.buffer()
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn share(&self) -> &S {
        &self.share
    }
}
