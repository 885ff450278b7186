/// Lexicon tables: nouns and verbs loaded from RON, with headword lookup.

use ron::extensions::Extensions;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::noun::{
    CollectiveNoun, CountableNoun, Noun, PersonalPronoun, PluralisableNoun, ProperNoun,
    UncountableNoun,
};
use crate::schema::verb::{IrregularVerb, RegularVerb, Verb};
use crate::schema::word::{Word, WordError};

const BUILTIN_LEXICON: &str = include_str!("../../lexicon_data/english.ron");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid word in lexicon: {0}")]
    Word(#[from] WordError),
    #[error("irregular verb '{0}' has a past participle but no simple past")]
    InvalidIrregular(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

// RON file shape. Words are read as plain strings and validated while
// building the lexicon so that errors name the offending entry.

#[derive(Debug, Deserialize)]
struct RonProperNoun {
    name: String,
    pronoun: PersonalPronoun,
}

#[derive(Debug, Deserialize)]
struct RonIrregularVerb {
    base: String,
    #[serde(default)]
    simple_past: Option<String>,
    #[serde(default)]
    past_participle: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename = "Lexicon")]
struct RonLexicon {
    #[serde(default)]
    countable: Vec<String>,
    #[serde(default)]
    uncountable: Vec<String>,
    #[serde(default)]
    collective: Vec<String>,
    #[serde(default)]
    proper: Vec<RonProperNoun>,
    #[serde(default)]
    regular_verbs: Vec<String>,
    #[serde(default)]
    irregular_verbs: Vec<RonIrregularVerb>,
}

impl RonIrregularVerb {
    fn classify(self) -> Result<IrregularVerb, LexiconError> {
        let base = Word::new(self.base)?;
        let simple_past = self.simple_past.map(Word::new).transpose()?;
        let past_participle = self.past_participle.map(Word::new).transpose()?;
        let name = base.to_string();
        IrregularVerb::classify(base, simple_past, past_participle)
            .ok_or(LexiconError::InvalidIrregular(name))
    }
}

/// Read-only word tables shared by everything that builds phrases.
///
/// Entries keep insertion order. Inserting a headword that is already
/// present replaces the earlier entry in place.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    nouns: Vec<Noun>,
    proper_nouns: Vec<ProperNoun>,
    verbs: Vec<Verb>,
    noun_index: FxHashMap<Word, usize>,
    proper_index: FxHashMap<Word, usize>,
    verb_index: FxHashMap<Word, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// The English table compiled into the crate.
    pub fn builtin() -> Result<Lexicon, LexiconError> {
        Self::parse_ron(BUILTIN_LEXICON)
    }

    /// Load a lexicon from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Lexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        let lexicon = Self::parse_ron(&contents)?;
        log::debug!("loaded lexicon {}", path.display());
        Ok(lexicon)
    }

    /// Parse a lexicon from a RON string.
    pub fn parse_ron(input: &str) -> Result<Lexicon, LexiconError> {
        let raw: RonLexicon = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(input)?;
        let mut lexicon = Lexicon::new();

        for singular in raw.countable {
            lexicon.insert_noun(CountableNoun {
                singular: Word::new(singular)?,
            });
        }
        for singular in raw.collective {
            lexicon.insert_noun(CollectiveNoun {
                singular: Word::new(singular)?,
            });
        }
        for singular in raw.uncountable {
            lexicon.insert_noun(UncountableNoun {
                singular: Word::new(singular)?,
            });
        }
        for proper in raw.proper {
            lexicon.insert_proper_noun(ProperNoun::new(Word::new(proper.name)?, proper.pronoun));
        }
        for base in raw.regular_verbs {
            lexicon.insert_verb(RegularVerb {
                base: Word::new(base)?,
            });
        }
        for irregular in raw.irregular_verbs {
            lexicon.insert_verb(irregular.classify()?);
        }

        log::debug!(
            "parsed lexicon: {} nouns, {} proper nouns, {} verbs",
            lexicon.nouns.len(),
            lexicon.proper_nouns.len(),
            lexicon.verbs.len()
        );
        Ok(lexicon)
    }

    pub fn insert_noun(&mut self, noun: impl Into<Noun>) {
        let noun = noun.into();
        let key = noun.singular().clone();
        upsert(&mut self.nouns, &mut self.noun_index, key, noun, "noun");
    }

    pub fn insert_proper_noun(&mut self, proper: ProperNoun) {
        let key = proper.name.clone();
        upsert(
            &mut self.proper_nouns,
            &mut self.proper_index,
            key,
            proper,
            "proper noun",
        );
    }

    pub fn insert_verb(&mut self, verb: impl Into<Verb>) {
        let verb = verb.into();
        let key = verb.base().clone();
        upsert(&mut self.verbs, &mut self.verb_index, key, verb, "verb");
    }

    /// Merge another lexicon into this one. Entries from `other`
    /// override entries in `self` with the same headword.
    pub fn merge(&mut self, other: Lexicon) {
        for noun in other.nouns {
            self.insert_noun(noun);
        }
        for proper in other.proper_nouns {
            self.insert_proper_noun(proper);
        }
        for verb in other.verbs {
            self.insert_verb(verb);
        }
    }

    pub fn noun(&self, singular: &str) -> Option<&Noun> {
        self.noun_index.get(singular).map(|&i| &self.nouns[i])
    }

    pub fn proper_noun(&self, name: &str) -> Option<&ProperNoun> {
        self.proper_index.get(name).map(|&i| &self.proper_nouns[i])
    }

    pub fn verb(&self, base: &str) -> Option<&Verb> {
        self.verb_index.get(base).map(|&i| &self.verbs[i])
    }

    pub fn nouns(&self) -> &[Noun] {
        &self.nouns
    }

    pub fn pluralisable_nouns(&self) -> impl Iterator<Item = &PluralisableNoun> {
        self.nouns.iter().filter_map(Noun::as_pluralisable)
    }

    pub fn proper_nouns(&self) -> &[ProperNoun] {
        &self.proper_nouns
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn regular_verbs(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.iter().filter(|v| !v.is_irregular())
    }

    pub fn irregular_verbs(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.iter().filter(|v| v.is_irregular())
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty() && self.proper_nouns.is_empty() && self.verbs.is_empty()
    }
}

fn upsert<T>(
    entries: &mut Vec<T>,
    index: &mut FxHashMap<Word, usize>,
    key: Word,
    entry: T,
    kind: &str,
) {
    if let Some(&i) = index.get(&key) {
        log::warn!("{} '{}' redefined; later entry wins", kind, key);
        entries[i] = entry;
    } else {
        index.insert(key, entries.len());
        entries.push(entry);
    }
}

/// Builder for assembling a `Lexicon` from several sources.
///
/// Sources are applied in this order, each overriding the last:
/// the built-in table, directly provided lexicons, files, directories.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    builtin: bool,
    lexicons: Vec<Lexicon>,
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl LexiconBuilder {
    pub fn builtin(mut self) -> Self {
        self.builtin = true;
        self
    }

    /// Provide a lexicon directly (for testing without files).
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicons.push(lexicon);
        self
    }

    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Every `.ron` file in the directory, in file-name order.
    pub fn lexicon_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.push(path.into());
        self
    }

    pub fn build(self) -> Result<Lexicon, LexiconError> {
        let mut lexicon = if self.builtin {
            Lexicon::builtin()?
        } else {
            Lexicon::new()
        };

        for provided in self.lexicons {
            lexicon.merge(provided);
        }

        for path in &self.files {
            lexicon.merge(Lexicon::load_from_ron(path)?);
        }

        for dir in &self.dirs {
            load_ron_files_from_dir(dir, |path| {
                lexicon.merge(Lexicon::load_from_ron(path)?);
                Ok(())
            })?;
        }

        Ok(lexicon)
    }
}

/// Load all .ron files from a directory, calling `loader` for each.
fn load_ron_files_from_dir<F>(dir: &Path, mut loader: F) -> Result<(), LexiconError>
where
    F: FnMut(&Path) -> Result<(), LexiconError>,
{
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    paths.sort();
    for path in &paths {
        loader(path)?;
    }
    Ok(())
}
