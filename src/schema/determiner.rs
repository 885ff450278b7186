use serde::{Deserialize, Serialize};
use std::fmt;

/// Determiners that can stand as a whole noun phrase: "Each impressed me."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeterminerUsableInIsolation {
    Many,
    Each,
    Few,
    Some,
    All,
}

impl DeterminerUsableInIsolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Many => "many",
            Self::Each => "each",
            Self::Few => "few",
            Self::Some => "some",
            Self::All => "all",
        }
    }
}

impl fmt::Display for DeterminerUsableInIsolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determiner categories preceding a head noun.
///
/// Only `Definite` renders; the rest are recognized but unimplemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Determiner {
    /// the
    Definite,
    /// this, these
    Proximal,
    /// that, those
    Distal,
    /// my, their
    Possessive,
    /// all, some, many, few, no
    Quantifier,
    /// each, any, either, neither
    Distributive,
}
