//! Corpus loading from JSON documents, JSON Lines streams and raw transcriptions
//!
//! A JSON corpus is an object whose `inscriptions` array holds one object per
//! record. A JSON Lines corpus holds one such record object per line. Records
//! without a usable token list load as empty inscriptions so the length filter
//! drops them later. A raw transcription is a text file holding a single
//! inscription as whitespace-separated signs, named by its file name.

use crate::corpus::inscription::Inscription;
use crate::io::configuration::{
    DEFAULT_SIGN_KEY, ID_KEY, ID_KEYS, INSCRIPTIONS_KEY, JSON_LINES_EXTENSION, TRANSCRIPTION_EXTENSION,
};
use crate::io::error::{AnalysisError, Result, WithPath, input_format};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Counts gathered while reading a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of records read
    pub records: usize,
    /// Records whose token list was absent, null or not an array
    pub missing_tokens: usize,
}

/// Inscriptions read from one corpus source
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Records in source order
    pub inscriptions: Vec<Inscription>,
    /// Load statistics
    pub summary: LoadSummary,
}

/// Reads inscription records, taking signs from a configurable record key
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    sign_key: String,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new(DEFAULT_SIGN_KEY)
    }
}

impl CorpusLoader {
    /// Create a loader reading sign tokens from `sign_key`
    pub fn new(sign_key: impl Into<String>) -> Self {
        Self {
            sign_key: sign_key.into(),
        }
    }

    /// Record key the sign tokens are read from
    pub fn sign_key(&self) -> &str {
        &self.sign_key
    }

    /// Load a corpus file, choosing the format from its extension
    ///
    /// Files ending in `.jsonl` are read line by line and `.txt` files as one
    /// raw transcription. Everything else is read as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid JSON
    /// - The top-level structure or a record is not recognized
    pub fn load_path(&self, path: &Path) -> Result<Corpus> {
        let extension = path.extension().and_then(|ext| ext.to_str());
        if extension == Some(TRANSCRIPTION_EXTENSION) {
            return load_transcriptions(&[path.to_path_buf()]);
        }

        let text = std::fs::read_to_string(path).with_path(path, "read corpus")?;
        let source_name = path.display().to_string();

        if extension == Some(JSON_LINES_EXTENSION) {
            self.parse_json_lines(&text, &source_name)
        } else {
            let document: Value =
                serde_json::from_str(&text).map_err(|source| AnalysisError::CorpusParse {
                    path: path.to_path_buf(),
                    source,
                })?;
            self.read_document(&document, &source_name)
        }
    }

    /// Parse a JSON corpus document held in memory
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or its structure is not recognized
    pub fn parse_document(&self, text: &str, source_name: &str) -> Result<Corpus> {
        let document: Value =
            serde_json::from_str(text).map_err(|source| AnalysisError::CorpusParse {
                path: source_name.into(),
                source,
            })?;
        self.read_document(&document, source_name)
    }

    /// Parse a JSON Lines corpus held in memory, skipping blank lines
    ///
    /// # Errors
    ///
    /// Returns an error if a line is not JSON or is not a record object
    pub fn parse_json_lines(&self, text: &str, source_name: &str) -> Result<Corpus> {
        let mut corpus = Corpus::default();

        for (line_index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: Value =
                serde_json::from_str(line).map_err(|source| AnalysisError::CorpusParse {
                    path: format!("{source_name}:{}", line_index + 1).into(),
                    source,
                })?;
            self.push_record(&mut corpus, &record, line_index, source_name)?;
        }

        Ok(corpus)
    }

    /// Extract inscriptions from an already parsed corpus document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not an object with an
    /// `inscriptions` array, or if any record is not an object
    pub fn read_document(&self, document: &Value, source_name: &str) -> Result<Corpus> {
        let records = document
            .as_object()
            .and_then(|object| object.get(INSCRIPTIONS_KEY))
            .and_then(Value::as_array)
            .ok_or_else(|| {
                input_format(
                    &source_name,
                    &format!("expected a top-level object with an '{INSCRIPTIONS_KEY}' array"),
                )
            })?;

        let mut corpus = Corpus {
            inscriptions: Vec::with_capacity(records.len()),
            summary: LoadSummary::default(),
        };
        for (index, record) in records.iter().enumerate() {
            self.push_record(&mut corpus, record, index, source_name)?;
        }

        Ok(corpus)
    }

    /// Write inscriptions as JSON Lines records this loader reads back
    ///
    /// Each line holds the `id`, when known, and the signs under this loader's
    /// sign key.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails
    pub fn write_json_lines<W: Write>(
        &self,
        out: &mut W,
        inscriptions: &[Inscription],
    ) -> std::io::Result<()> {
        for inscription in inscriptions {
            let mut record = Map::with_capacity(2);
            if let Some(id) = &inscription.id {
                record.insert(ID_KEY.to_string(), Value::String(id.clone()));
            }
            let signs = inscription.signs().iter().cloned().map(Value::String);
            record.insert(self.sign_key.clone(), Value::Array(signs.collect()));

            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn push_record(
        &self,
        corpus: &mut Corpus,
        record: &Value,
        index: usize,
        source_name: &str,
    ) -> Result<()> {
        let object = record.as_object().ok_or_else(|| {
            input_format(&source_name, &format!("record {index} is not an object"))
        })?;

        let id = record_id(object);
        let signs = match object.get(&self.sign_key) {
            Some(Value::Array(tokens)) => tokens.iter().map(token_to_sign).collect(),
            // Absent, null and non-array token lists all load as empty sequences
            _ => {
                log::warn!(
                    "record {} in {source_name} has no '{}' token list; treating it as empty",
                    id.as_deref().unwrap_or("<unnamed>"),
                    self.sign_key
                );
                corpus.summary.missing_tokens += 1;
                Vec::new()
            }
        };

        corpus.summary.records += 1;
        corpus.inscriptions.push(Inscription::new(id, signs));
        Ok(())
    }
}

fn record_id(object: &Map<String, Value>) -> Option<String> {
    ID_KEYS
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::Null => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        })
}

/// Read raw transcription files, one inscription per file
///
/// Each file name becomes the inscription id. Blank files hold no inscription
/// and are skipped with a warning.
///
/// # Errors
///
/// Returns an error if a file cannot be read
pub fn load_transcriptions(paths: &[PathBuf]) -> Result<Corpus> {
    let mut corpus = Corpus {
        inscriptions: Vec::with_capacity(paths.len()),
        summary: LoadSummary::default(),
    };

    for path in paths {
        let text = std::fs::read_to_string(path).with_path(path, "read transcription")?;
        let id = path.file_name().map(|name| name.to_string_lossy().into_owned());
        let Some(inscription) = parse_transcription(&text, id) else {
            log::warn!("transcription {} is blank; skipping it", path.display());
            continue;
        };
        corpus.summary.records += 1;
        corpus.inscriptions.push(inscription);
    }

    Ok(corpus)
}

/// Split a raw transcription into one inscription, or `None` if it is blank
///
/// Signs are separated by any run of whitespace, so line breaks and repeated
/// spaces never produce empty signs.
pub fn parse_transcription(text: &str, id: Option<String>) -> Option<Inscription> {
    let signs: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    (!signs.is_empty()).then(|| Inscription::new(id, signs))
}

/// Render a JSON token as a sign string
///
/// Strings are taken verbatim; numbers, booleans and nested values use their
/// JSON text, so `12` and `"12"` name the same sign.
pub fn token_to_sign(token: &Value) -> String {
    match token {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
