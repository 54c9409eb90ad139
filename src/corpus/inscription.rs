//! Inscription records as ordered sign sequences

/// One corpus record: an optional identifier and its signs in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inscription {
    /// Identifier carried by the source record, if any
    pub id: Option<String>,
    /// Sign tokens in sequence order, possibly empty
    pub signs: Vec<String>,
}

impl Inscription {
    /// Create an inscription from an identifier and its signs
    pub const fn new(id: Option<String>, signs: Vec<String>) -> Self {
        Self { id, signs }
    }

    /// Create an unnamed inscription from anything that converts to sign strings
    pub fn from_signs<I, S>(signs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            signs: signs.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of signs in the sequence
    pub const fn len(&self) -> usize {
        self.signs.len()
    }

    /// Whether the inscription carries no signs at all
    pub const fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    /// Signs in sequence order
    pub fn signs(&self) -> &[String] {
        &self.signs
    }

    /// Sign at the terminal position
    pub fn terminal(&self) -> Option<&str> {
        self.signs.last().map(String::as_str)
    }
}
