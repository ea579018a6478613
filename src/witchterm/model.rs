use crate::error::{Result, WitchError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most recent draws kept per session.
pub const HISTORY_CAPACITY: usize = 20;

/// Rows shown by `history` unless configured otherwise.
pub const DEFAULT_RECENT: usize = 5;

/// A single card as it appears in `cards.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(rename = "textEn", alias = "text", default)]
    pub display_text: String,
    #[serde(rename = "filename", alias = "image", default)]
    pub image_ref: String,
}

impl CardRecord {
    pub fn new(
        name: impl Into<String>,
        display_text: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_text: display_text.into(),
            image_ref: image_ref.into(),
        }
    }

    /// URL fragment form of the name: lowercase ascii words joined by dashes.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

/// The ordered, immutable deck for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<CardRecord>,
}

impl Catalog {
    pub fn new(cards: Vec<CardRecord>) -> Result<Self> {
        if cards.is_empty() {
            return Err(WitchError::Load("catalog is empty".to_string()));
        }
        if let Some(pos) = cards.iter().position(|c| c.name.trim().is_empty()) {
            return Err(WitchError::Load(format!(
                "card at position {} has no name",
                pos + 1
            )));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardRecord> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }
}

/// One entry of the in-memory draw log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    pub name: String,
    pub drawn_at: DateTime<Utc>,
}

impl DrawRecord {
    pub fn now(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            drawn_at: Utc::now(),
        }
    }
}
