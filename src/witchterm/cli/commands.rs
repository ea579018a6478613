//! # CLI Layer
//!
//! One possible client for the witchterm session: a real terminal.
//!
//! This is the only place that:
//! - Parses arguments and sets up logging
//! - Touches stdin, stdout and stderr
//! - Puts the terminal into raw mode
//! - Spawns the catalog loader thread
//!
//! ## Modes
//!
//! **Key mode** (stdin is a terminal): raw mode, one crossterm key event at a
//! time. `Ctrl+D` on an empty line exits.
//!
//! **Line mode** (stdin is piped, or `--line-mode`): every stdin line is typed
//! into the session followed by Enter. The terminal already shows what was
//! typed, so there is no echo. EOF exits.
//!
//! In both modes the catalog loads on a background thread. Key mode polls for
//! it between key events; line mode waits for it before reading input so that
//! piped scripts never race the load.

use super::logging;
use super::panel::CardPanel;
use super::setup::Cli;
use super::terminal::StdoutTerminal;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Stderr};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use witchterm::catalog::{CatalogProvider, FallbackCatalog, JsonFileCatalog, StaticCatalog};
use witchterm::config::WitchConfig;
use witchterm::engine::DrawEngine;
use witchterm::error::{Result, WitchError};
use witchterm::terminal::Terminal;
use witchterm::line_editor::KeyInput;
use witchterm::model::Catalog;
use witchterm::render::Renderer;
use witchterm::session::ReplSession;
use witchterm::share::ClipboardShare;

type CliSession = ReplSession<StdoutTerminal, CardPanel<Stderr>, ClipboardShare>;
type Provider = Box<dyn CatalogProvider + Send>;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let line_mode = cli.line_mode || !io::stdin().is_terminal();
    logging::init(cli.log_level.as_deref(), cli.verbose, !line_mode);

    let (config, config_warning) = load_config(&cli);
    let provider = build_provider(&cli, &config);
    let loader = spawn_loader(provider);

    let engine = match cli.seed {
        Some(seed) => DrawEngine::with_seed(seed),
        None => DrawEngine::from_entropy(),
    };
    let use_color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    let renderer = Renderer::witch(use_color)?;

    let raw = !line_mode;
    let mut session = ReplSession::new(
        StdoutTerminal::new(raw),
        CardPanel::new(io::stderr(), raw),
        ClipboardShare,
        engine,
        config,
        renderer,
    );

    if line_mode {
        session = session.without_echo();
        if let Some(warning) = config_warning {
            session.warn(warning);
        }
        run_line_mode(session, loader)
    } else {
        crossterm::terminal::enable_raw_mode()?;
        if let Some(warning) = config_warning {
            session.warn(warning);
        }
        let result = run_key_mode(&mut session, loader);
        let restored = crossterm::terminal::disable_raw_mode();
        result.and(restored.map_err(WitchError::from))
    }
}

/// A broken config file is not fatal: the session starts on defaults and the
/// reason is shown once.
fn load_config(cli: &Cli) -> (WitchConfig, Option<String>) {
    let dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "witchweb3", "witchterm").map(|d| d.config_dir().to_path_buf())
    });
    let Some(dir) = dir else {
        tracing::debug!("no config directory, using defaults");
        return (WitchConfig::default(), None);
    };
    match WitchConfig::load(&dir) {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::debug!(error = %e, "config ignored");
            (WitchConfig::default(), Some(e.to_string()))
        }
    }
}

/// `--catalog` paths are used strictly. Configured paths fall back to the
/// built-in deck, and no paths at all means the built-in deck.
fn build_provider(cli: &Cli, config: &WitchConfig) -> Provider {
    if !cli.catalogs.is_empty() {
        return Box::new(JsonFileCatalog::new(&cli.catalogs));
    }
    if config.catalog_paths.is_empty() {
        return Box::new(StaticCatalog::arcana());
    }
    let paths: Vec<PathBuf> = config.catalog_paths.iter().map(PathBuf::from).collect();
    Box::new(FallbackCatalog::new(
        JsonFileCatalog::new(&paths),
        StaticCatalog::arcana(),
    ))
}

fn spawn_loader(provider: Provider) -> Receiver<Result<Catalog>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = provider.load();
        // The session may already be gone.
        let _ = tx.send(result);
    });
    rx
}

fn loader_stopped() -> WitchError {
    WitchError::Load("catalog loader stopped unexpectedly".to_string())
}

fn run_line_mode(mut session: CliSession, loader: Receiver<Result<Catalog>>) -> Result<()> {
    session.start();
    session.catalog_loaded(loader.recv().unwrap_or_else(|_| Err(loader_stopped())));

    let mut stdin = io::stdin().lock();
    let mut raw_line = Vec::new();
    loop {
        raw_line.clear();
        if stdin.read_until(b'\n', &mut raw_line)? == 0 {
            return Ok(());
        }
        session.feed_line(&decode_line(&raw_line));
    }
}

/// Strips the line ending. Bytes that are not UTF-8 become U+FFFD instead of
/// ending the session.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

fn run_key_mode(session: &mut CliSession, loader: Receiver<Result<Catalog>>) -> Result<()> {
    session.start();
    let mut pending = Some(loader);

    loop {
        if let Some(rx) = &pending {
            match rx.try_recv() {
                Ok(result) => {
                    session.catalog_loaded(result);
                    pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    session.catalog_loaded(Err(loader_stopped()));
                    pending = None;
                }
            }
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_end_of_input(&key) && session.buffer().is_empty() {
            session.terminal_mut().write("\n");
            return Ok(());
        }
        session.feed(map_key(&key));
    }
}

fn is_end_of_input(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn map_key(key: &KeyEvent) -> KeyInput {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyInput::Interrupt,
        KeyCode::Char(_) if ctrl => KeyInput::Ignored,
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Tab => KeyInput::Char('\t'),
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Enter => KeyInput::Enter,
        _ => KeyInput::Ignored,
    }
}
