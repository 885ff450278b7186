use serde::{Deserialize, Serialize};
use std::fmt;

use super::word::Word;

/// A noun with a plural, e.g. "map", "bike".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountableNoun {
    pub singular: Word,
}

/// A noun with no plural, e.g. "news", "physics".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UncountableNoun {
    pub singular: Word,
}

/// A noun naming a group, treated as singular, e.g. "family", "team".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectiveNoun {
    pub singular: Word,
}

/// Any noun that exposes a plural form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluralisableNoun {
    Countable(CountableNoun),
    Collective(CollectiveNoun),
}

impl PluralisableNoun {
    pub fn singular(&self) -> &Word {
        match self {
            Self::Countable(noun) => &noun.singular,
            Self::Collective(noun) => &noun.singular,
        }
    }

    /// Naive "+s" plural; irregular plurals are not modelled.
    pub fn plural(&self) -> Word {
        self.singular().suffixed("s")
    }
}

impl From<CountableNoun> for PluralisableNoun {
    fn from(noun: CountableNoun) -> Self {
        Self::Countable(noun)
    }
}

impl From<CollectiveNoun> for PluralisableNoun {
    fn from(noun: CollectiveNoun) -> Self {
        Self::Collective(noun)
    }
}

/// Any noun usable as a bare singular.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Noun {
    Pluralisable(PluralisableNoun),
    Uncountable(UncountableNoun),
}

impl Noun {
    pub fn singular(&self) -> &Word {
        match self {
            Self::Pluralisable(noun) => noun.singular(),
            Self::Uncountable(noun) => &noun.singular,
        }
    }

    /// `None` for uncountable nouns, which never pluralise.
    pub fn plural(&self) -> Option<Word> {
        match self {
            Self::Pluralisable(noun) => Some(noun.plural()),
            Self::Uncountable(_) => None,
        }
    }

    pub fn as_pluralisable(&self) -> Option<&PluralisableNoun> {
        match self {
            Self::Pluralisable(noun) => Some(noun),
            Self::Uncountable(_) => None,
        }
    }
}

impl From<PluralisableNoun> for Noun {
    fn from(noun: PluralisableNoun) -> Self {
        Self::Pluralisable(noun)
    }
}

impl From<UncountableNoun> for Noun {
    fn from(noun: UncountableNoun) -> Self {
        Self::Uncountable(noun)
    }
}

impl From<CountableNoun> for Noun {
    fn from(noun: CountableNoun) -> Self {
        Self::Pluralisable(noun.into())
    }
}

impl From<CollectiveNoun> for Noun {
    fn from(noun: CollectiveNoun) -> Self {
        Self::Pluralisable(noun.into())
    }
}

/// Personal pronoun class associated with a proper noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalPronoun {
    I,
    He,
    She,
    It,
    They,
}

impl PersonalPronoun {
    /// Nominative/subject form: "I", "he", "she", "it", "they".
    pub fn subject(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::He => "he",
            Self::She => "she",
            Self::It => "it",
            Self::They => "they",
        }
    }

    /// Possessive standalone: "mine", "his", "hers", "its", "theirs".
    pub fn possessive_standalone(&self) -> &'static str {
        match self {
            Self::I => "mine",
            Self::He => "his",
            Self::She => "hers",
            Self::It => "its",
            Self::They => "theirs",
        }
    }

    /// Reflexive: "myself", "himself", "herself", "itself", "themselves".
    pub fn reflexive(&self) -> &'static str {
        match self {
            Self::I => "myself",
            Self::He => "himself",
            Self::She => "herself",
            Self::It => "itself",
            Self::They => "themselves",
        }
    }

    pub fn is_third_person_singular(&self) -> bool {
        matches!(self, Self::He | Self::She | Self::It)
    }
}

impl fmt::Display for PersonalPronoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subject())
    }
}

/// A person, place or thing identified by name, e.g. "Steven", "London".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProperNoun {
    pub name: Word,
    pub pronoun: PersonalPronoun,
}

impl ProperNoun {
    pub fn new(name: Word, pronoun: PersonalPronoun) -> Self {
        Self { name, pronoun }
    }
}
