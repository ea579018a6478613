//! # Witchterm Architecture
//!
//! Witchterm is a tarot-card prompt: type `draw`, get a card. The interactive
//! program is a **library** first; the binary only wires it to a real terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Arguments, logging, raw-mode keys, stdout                │
//! │  - Loads the catalog on a background thread                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ keys, catalog
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, line_editor.rs, render/)              │
//! │  - Key reducer, prompt, ANSI output through `Terminal`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ one line
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per verb, returns `Result<CmdResult>`        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Draw Engine (engine.rs) over a Catalog (model.rs)          │
//! │  - Random / positional / by-name selection, draw history    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! Nothing in this crate writes to stdout or reads stdin. Text goes to a
//! [`terminal::Terminal`], the active card to a [`display::CardDisplay`], links
//! to a [`share::ShareTarget`]. Tests use [`terminal::ScreenBuffer`] and
//! [`display::RecordingDisplay`].
//!
//! ## Module Overview
//!
//! - [`catalog`]: Catalog providers (file, built-in, fallback chain)
//! - [`engine`]: Draw engine and selection state
//! - [`commands`]: Command table and per-verb handlers
//! - [`line_editor`]: Key reducer for the prompt
//! - [`session`]: The REPL itself
//! - [`render`]: Templates and theme
//! - [`config`]: `config.json`
//! - [`share`]: Share payloads and the clipboard target
//! - [`error`]: Error types

pub mod catalog;
pub mod commands;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod line_editor;
pub mod model;
pub mod render;
pub mod session;
pub mod share;
pub mod terminal;

#[cfg(test)]
mod test_utils;
