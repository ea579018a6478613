//! # Draw Engine
//!
//! Owns the session's [`Catalog`] and the mutable [`DrawState`]. Every card the
//! user sees goes through here, so this is the only place `last_index` and the
//! draw history change.
//!
//! The engine starts unloaded. Until [`DrawEngine::install`] is called every
//! selecting operation fails with [`WitchError::EmptyCatalog`], which the
//! command layer reports as "not loaded yet".

use crate::error::{Result, WitchError};
use crate::model::{CardRecord, Catalog, DrawRecord, HISTORY_CAPACITY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::VecDeque;

/// Mutable per-session selection state.
#[derive(Debug, Default)]
pub struct DrawState {
    last_index: Option<usize>,
    history: VecDeque<DrawRecord>,
}

impl DrawState {
    fn record(&mut self, index: usize, card: &CardRecord) {
        self.last_index = Some(index);
        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(DrawRecord::now(card.name.clone()));
    }
}

/// A row of the `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub position: usize,
    pub name: String,
    pub is_current: bool,
}

pub struct DrawEngine {
    catalog: Option<Catalog>,
    state: DrawState,
    rng: StdRng,
}

impl DrawEngine {
    pub fn new(rng: StdRng) -> Self {
        Self {
            catalog: None,
            state: DrawState::default(),
            rng,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Takes ownership of a freshly loaded catalog. Selection state is reset
    /// because indexes from a previous catalog mean nothing in the new one.
    pub fn install(&mut self, catalog: Catalog) {
        tracing::debug!(cards = catalog.len(), "catalog installed");
        self.catalog = Some(catalog);
        self.state.last_index = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn len(&self) -> usize {
        self.catalog.as_ref().map_or(0, Catalog::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.last_index
    }

    pub fn current(&self) -> Option<&CardRecord> {
        let idx = self.state.last_index?;
        self.catalog.as_ref()?.get(idx)
    }

    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    fn catalog(&self) -> Result<&Catalog> {
        match &self.catalog {
            Some(c) if !c.is_empty() => Ok(c),
            _ => Err(WitchError::EmptyCatalog),
        }
    }

    fn select(&mut self, index: usize) -> Result<CardRecord> {
        let card = self
            .catalog()?
            .get(index)
            .cloned()
            .ok_or_else(|| WitchError::IndexOutOfRange {
                index: (index + 1).to_string(),
                len: self.len(),
            })?;
        self.state.record(index, &card);
        Ok(card)
    }

    /// Picks a random card that differs from the previous pick whenever the
    /// deck has more than one card.
    pub fn draw_random(&mut self) -> Result<CardRecord> {
        let len = self.catalog()?.len();
        let index = if len == 1 {
            0
        } else {
            loop {
                let i = self.rng.gen_range(0..len);
                if Some(i) != self.state.last_index {
                    break i;
                }
            }
        };
        tracing::debug!(index, "random draw");
        self.select(index)
    }

    /// Selects by 1-based position.
    pub fn show_by_index(&mut self, one_based: i64) -> Result<CardRecord> {
        let len = self.catalog()?.len();
        if one_based < 1 || one_based as u64 > len as u64 {
            return Err(WitchError::IndexOutOfRange {
                index: one_based.to_string(),
                len,
            });
        }
        self.select((one_based - 1) as usize)
    }

    /// Case-insensitive lookup: exact name first, then the first name in
    /// catalog order containing the query.
    pub fn show_by_name(&mut self, query: &str) -> Result<CardRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WitchError::EmptyQuery);
        }
        let needle = query.to_lowercase();
        let catalog = self.catalog()?;
        let position = catalog
            .iter()
            .position(|c| c.name.to_lowercase() == needle)
            .or_else(|| {
                catalog
                    .iter()
                    .position(|c| c.name.to_lowercase().contains(&needle))
            })
            .ok_or_else(|| WitchError::NotFound(query.to_string()))?;
        self.select(position)
    }

    /// Anything written as an integer is a position, everything else is a
    /// name query. Integers too large for `i64` are out of range.
    pub fn resolve_argument(&mut self, arg: &str) -> Result<CardRecord> {
        let arg = arg.trim();
        if !is_integer(arg) {
            return self.show_by_name(arg);
        }
        match arg.parse::<i64>() {
            Ok(n) => self.show_by_index(n),
            Err(_) => Err(WitchError::IndexOutOfRange {
                index: arg.to_string(),
                len: self.catalog()?.len(),
            }),
        }
    }

    pub fn list_all(&self) -> Vec<ListEntry> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };
        catalog
            .iter()
            .enumerate()
            .map(|(i, card)| ListEntry {
                position: i + 1,
                name: card.name.clone(),
                is_current: self.state.last_index == Some(i),
            })
            .collect()
    }

    /// Up to `limit` entries, most recent first.
    pub fn recent_history(&self, limit: usize) -> Vec<DrawRecord> {
        self.state.history.iter().rev().take(limit).cloned().collect()
    }
}

/// An optional sign followed by ASCII digits only.
fn is_integer(arg: &str) -> bool {
    let digits = arg.strip_prefix(['+', '-']).unwrap_or(arg);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
