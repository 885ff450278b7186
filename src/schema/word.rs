/// Orthographic atoms: words, infinitives and adjectives.
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("invalid word {0:?}: expected a non-empty sequence of letters")]
    InvalidWord(String),
}

/// A non-empty run of letters.
///
/// Construction is the only validation point, so every `Word` in a tree
/// is known to be well formed. There is no lossy constructor
/// that strips offending characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    pub fn new(raw: impl Into<String>) -> Result<Word, WordError> {
        let raw = raw.into();
        if raw.is_empty() || !raw.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidWord(raw));
        }
        Ok(Word(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a letters-only suffix. Only used with literal suffixes
    /// (`s`, `ing`, `ed`, `k`), so the result is still a valid word.
    pub(crate) fn suffixed(&self, suffix: &str) -> Word {
        debug_assert!(suffix.chars().all(char::is_alphabetic));
        let mut raw = String::with_capacity(self.0.len() + suffix.len());
        raw.push_str(&self.0);
        raw.push_str(suffix);
        Word(raw)
    }

    /// Builds a word from characters already taken from a valid word.
    pub(crate) fn from_letters(letters: impl IntoIterator<Item = char>) -> Word {
        let raw: String = letters.into_iter().collect();
        debug_assert!(!raw.is_empty() && raw.chars().all(char::is_alphabetic));
        Word(raw)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(value)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Word::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// "to" followed by a valid base word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Infinitive(Word);

impl Infinitive {
    const MARKER: &'static str = "to ";

    pub fn from_base(base: &Word) -> Infinitive {
        Infinitive(base.clone())
    }

    /// Parse `"to <word>"`; anything else is rejected.
    pub fn parse(raw: &str) -> Result<Infinitive, WordError> {
        let base = raw
            .strip_prefix(Self::MARKER)
            .ok_or_else(|| WordError::InvalidWord(raw.to_string()))?;
        Ok(Infinitive(Word::new(base)?))
    }

    pub fn base(&self) -> &Word {
        &self.0
    }
}

impl fmt::Display for Infinitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::MARKER, self.0)
    }
}

/// An adjective modifying the head of a noun phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjective(pub Word);

impl fmt::Display for Adjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
