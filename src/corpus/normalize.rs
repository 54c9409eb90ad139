//! Allograph variant to canonical sign mapping

use crate::corpus::inscription::Inscription;
use crate::io::configuration::ALLOGRAPH_COMMENT_KEY;
use crate::io::error::{AnalysisError, Result, WithPath, input_format};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Maps variant glyph forms onto their canonical sign
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllographMap {
    rules: HashMap<String, String>,
}

impl AllographMap {
    /// Create a map from `(variant, canonical)` pairs
    pub fn from_pairs<I, V, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, C)>,
        V: Into<String>,
        C: Into<String>,
    {
        Self {
            rules: pairs
                .into_iter()
                .map(|(variant, canonical)| (variant.into(), canonical.into()))
                .collect(),
        }
    }

    /// Load a map stored as a JSON object of `variant: canonical` strings
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not such an object
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read allograph map")?;
        let document: Value =
            serde_json::from_str(&text).map_err(|source| AnalysisError::CorpusParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_value(&document, &path.display().to_string())
    }

    /// Build a map from a parsed JSON object
    ///
    /// The `comment` entry is ignored; every other value must be a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object or a mapping target is not a string
    pub fn from_json_value(document: &Value, source_name: &str) -> Result<Self> {
        let object = document.as_object().ok_or_else(|| {
            input_format(&source_name, &"allograph map must be a JSON object")
        })?;

        let mut rules = HashMap::with_capacity(object.len());
        for (variant, canonical) in object {
            if variant == ALLOGRAPH_COMMENT_KEY {
                continue;
            }
            let canonical = canonical.as_str().ok_or_else(|| {
                input_format(&source_name, &format!("allograph '{variant}' must map to a string"))
            })?;
            rules.insert(variant.clone(), canonical.to_string());
        }

        Ok(Self { rules })
    }

    /// Number of variant rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the map holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Canonical form of a sign, or the sign itself when it has no rule
    pub fn canonical<'a>(&'a self, sign: &'a str) -> &'a str {
        self.rules.get(sign).map_or(sign, String::as_str)
    }

    /// Replace every mapped sign in the inscription with its canonical form
    pub fn normalize(&self, inscription: &mut Inscription) {
        for sign in &mut inscription.signs {
            if let Some(canonical) = self.rules.get(sign.as_str()) {
                sign.clone_from(canonical);
            }
        }
    }

    /// Normalize every inscription and return the sorted canonical vocabulary
    pub fn normalize_all(&self, inscriptions: &mut [Inscription]) -> BTreeSet<String> {
        let mut vocabulary = BTreeSet::new();
        for inscription in inscriptions.iter_mut() {
            self.normalize(inscription);
            vocabulary.extend(inscription.signs.iter().cloned());
        }
        vocabulary
    }
}
