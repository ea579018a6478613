//! Shared fixtures for unit tests.

use crate::commands::CommandContext;
use crate::config::WitchConfig;
use crate::display::RecordingDisplay;
use crate::engine::DrawEngine;
use crate::error::{Result, WitchError};
use crate::model::{CardRecord, Catalog};
use crate::share::{ShareOutcome, SharePayload, ShareTarget};

pub fn catalog(names: &[&str]) -> Catalog {
    Catalog::new(
        names
            .iter()
            .map(|n| CardRecord::new(*n, format!("{} meaning", n), format!("{}.png", n)))
            .collect(),
    )
    .expect("test catalog")
}

/// Share target that answers with a canned outcome and records payloads.
#[derive(Debug)]
pub struct StubShare {
    pub outcome: std::result::Result<ShareOutcome, String>,
    pub payloads: Vec<SharePayload>,
}

impl StubShare {
    pub fn answering(outcome: ShareOutcome) -> Self {
        Self {
            outcome: Ok(outcome),
            payloads: Vec::new(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            payloads: Vec::new(),
        }
    }
}

impl ShareTarget for StubShare {
    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome> {
        self.payloads.push(payload.clone());
        self.outcome.clone().map_err(WitchError::Share)
    }
}

pub struct Fixture {
    pub engine: DrawEngine,
    pub display: RecordingDisplay,
    pub share: StubShare,
    pub config: WitchConfig,
}

impl Fixture {
    pub fn unloaded() -> Self {
        Self {
            engine: DrawEngine::with_seed(42),
            display: RecordingDisplay::default(),
            share: StubShare::answering(ShareOutcome::Copied),
            config: WitchConfig::default(),
        }
    }

    pub fn loaded(names: &[&str]) -> Self {
        let mut fx = Self::unloaded();
        fx.engine.install(catalog(names));
        fx
    }

    pub fn ctx(&mut self) -> CommandContext<'_> {
        CommandContext {
            engine: &mut self.engine,
            display: &mut self.display,
            share: &mut self.share,
            config: &self.config,
        }
    }
}
