//! # Catalog Providers
//!
//! The REPL core only needs "give me the deck, or tell me why not". Where the
//! deck comes from, and how hard we try, is a policy of the provider:
//!
//! - [`JsonFileCatalog`] walks an ordered list of candidate files and takes the
//!   first one holding a non-empty card array.
//! - [`StaticCatalog`] serves a built-in deck.
//! - [`FallbackCatalog`] chains two providers.
//!
//! Providers never retry on their own beyond the candidates they were given.

use crate::error::{Result, WitchError};
use crate::model::{CardRecord, Catalog};
use std::fs;
use std::path::{Path, PathBuf};

pub trait CatalogProvider {
    fn load(&self) -> Result<Catalog>;
}

/// Parses a `cards.json` document: a JSON array of card records.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let cards: Vec<CardRecord> = serde_json::from_str(json)?;
    Catalog::new(cards)
}

#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    candidates: Vec<PathBuf>,
}

impl JsonFileCatalog {
    pub fn new<P: AsRef<Path>>(candidates: &[P]) -> Self {
        Self {
            candidates: candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        }
    }

    fn load_one(path: &Path) -> Result<Catalog> {
        let content = fs::read_to_string(path)?;
        parse_catalog(&content)
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn load(&self) -> Result<Catalog> {
        let mut failures = Vec::with_capacity(self.candidates.len());
        for path in &self.candidates {
            match Self::load_one(path) {
                Ok(catalog) => {
                    tracing::debug!(path = %path.display(), cards = catalog.len(), "catalog loaded");
                    return Ok(catalog);
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "catalog candidate rejected");
                    failures.push(format!("{} ({})", path.display(), e));
                }
            }
        }
        if failures.is_empty() {
            return Err(WitchError::Load("no catalog paths configured".to_string()));
        }
        Err(WitchError::Load(failures.join("; ")))
    }
}

/// A deck compiled into the binary.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    cards: Vec<CardRecord>,
}

impl StaticCatalog {
    pub fn new(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    /// The five Major Arcana the site launched with.
    pub fn arcana() -> Self {
        Self::new(vec![
            CardRecord::new(
                "The Initiate 🌒",
                "Every path starts with a single key. Generate yours.",
                "initiate.png",
            ),
            CardRecord::new(
                "The Guardian 🜂",
                "Protect the seed phrase as you would your true name.",
                "guardian.png",
            ),
            CardRecord::new(
                "The Fracture 🜄",
                "Forks are not failures. Something new grows from the split.",
                "fracture.png",
            ),
            CardRecord::new(
                "The Gate 🜃",
                "A bridge opens. Check the address twice before you cross.",
                "gate.png",
            ),
            CardRecord::new(
                "The Oracle 🜁",
                "The chain remembers everything. Act accordingly.",
                "oracle.png",
            ),
        ])
    }
}

impl CatalogProvider for StaticCatalog {
    fn load(&self) -> Result<Catalog> {
        Catalog::new(self.cards.clone())
    }
}

/// Tries `primary`, then `secondary`. The error from the secondary is
/// reported only if both fail.
pub struct FallbackCatalog<A, B> {
    primary: A,
    secondary: B,
}

impl<A: CatalogProvider, B: CatalogProvider> FallbackCatalog<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: CatalogProvider, B: CatalogProvider> CatalogProvider for FallbackCatalog<A, B> {
    fn load(&self) -> Result<Catalog> {
        match self.primary.load() {
            Ok(catalog) => Ok(catalog),
            Err(first) => {
                tracing::debug!(error = %first, "primary catalog failed, using fallback");
                self.secondary.load()
            }
        }
    }
}

impl<T: CatalogProvider + ?Sized> CatalogProvider for Box<T> {
    fn load(&self) -> Result<Catalog> {
        (**self).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARDS: &str = r#"[
        {"name": "The Sun", "textEn": "Shine.", "filename": "sun.png"},
        {"name": "The Moon", "textEn": "Dream.", "filename": "moon.png"}
    ]"#;

    struct Failing;

    impl CatalogProvider for Failing {
        fn load(&self) -> Result<Catalog> {
            Err(WitchError::Load("offline".to_string()))
        }
    }

    #[test]
    fn test_parse_catalog_keeps_order() {
        let catalog = parse_catalog(TWO_CARDS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "The Sun");
        assert_eq!(catalog.get(1).unwrap().name, "The Moon");
    }

    #[test]
    fn test_parse_catalog_rejects_empty_array() {
        assert!(matches!(parse_catalog("[]"), Err(WitchError::Load(_))));
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"name":"x"}"#),
            Err(WitchError::Serialization(_))
        ));
    }

    #[test]
    fn test_json_file_catalog_uses_first_valid_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.json");
        let good = dir.path().join("cards.json");
        fs::write(&empty, "[]").unwrap();
        fs::write(&good, TWO_CARDS).unwrap();

        let missing = dir.path().join("missing.json");
        let provider = JsonFileCatalog::new(&[missing, empty, good]);
        let catalog = provider.load().unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_json_file_catalog_reports_every_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let err = JsonFileCatalog::new(&[&a, &b]).load().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a.json"));
        assert!(msg.contains("b.json"));
    }

    #[test]
    fn test_json_file_catalog_without_candidates() {
        let paths: [PathBuf; 0] = [];
        let err = JsonFileCatalog::new(&paths).load().unwrap_err();
        assert!(err.to_string().contains("no catalog paths"));
    }

    #[test]
    fn test_static_arcana() {
        let catalog = StaticCatalog::arcana().load().unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_fallback_catalog() {
        let provider = FallbackCatalog::new(Failing, StaticCatalog::arcana());
        assert_eq!(provider.load().unwrap().len(), 5);

        let provider = FallbackCatalog::new(Failing, Failing);
        assert!(provider.load().is_err());
    }
}
