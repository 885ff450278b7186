/// Phrase model: tags and phrases composed from lexemes.
///
/// These are closed sets of alternatives with no behaviour beyond
/// composition; turning them into text is the job of `core::render`.

use serde::{Deserialize, Serialize};

use crate::schema::determiner::{Determiner, DeterminerUsableInIsolation};
use crate::schema::noun::{Noun, PersonalPronoun, PluralisableNoun, ProperNoun};
use crate::schema::verb::Verb;
use crate::schema::word::Adjective;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NounTag {
    /// NN
    SingularNoun(Noun),
    /// NNS
    PluralNoun(PluralisableNoun),
    /// NNP
    ProperNoun(ProperNoun),
    /// NNPS, e.g. "the Hendersons"
    PluralProperNoun(ProperNoun),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PronounTag {
    /// I, he, she, it, they
    Personal(ProperNoun),
    /// mine, his, hers, its, theirs
    Possessive(PersonalPronoun),
    /// myself, himself, herself, itself, themselves
    Reflexive(PersonalPronoun),
    /// each other, one another
    Reciprocal,
    /// this, that, these, those
    Demonstrative,
    /// that, which, who, whose, whom
    Relative,
    /// who, what, why, whatever
    Interrogative,
    /// anything, someone, nobody, none
    Indefinite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NounPhrase {
    Base(NounTag),
    /// A determiner forming the whole phrase: "Each impressed me."
    Isolation(DeterminerUsableInIsolation),
    /// "a" + modifiers + adjunct nouns + noun.
    Indefinite {
        modifiers: Vec<Adjective>,
        adjuncts: Vec<NounTag>,
        noun: Noun,
    },
    /// Determiner + modifiers + adjunct nouns + head.
    Determined {
        determiner: Determiner,
        modifiers: Vec<Adjective>,
        adjuncts: Vec<NounTag>,
        head: NounTag,
    },
    Proform(PronounTag),
    Pronoun(PronounTag),
}

impl NounPhrase {
    /// "the <head>" with no modifiers.
    pub fn definite(head: NounTag) -> Self {
        Self::Determined {
            determiner: Determiner::Definite,
            modifiers: Vec::new(),
            adjuncts: Vec::new(),
            head,
        }
    }

    /// "a <noun>" with no modifiers.
    pub fn indefinite(noun: Noun) -> Self {
        Self::Indefinite {
            modifiers: Vec::new(),
            adjuncts: Vec::new(),
            noun,
        }
    }

    pub fn personal(proper: ProperNoun) -> Self {
        Self::Pronoun(PronounTag::Personal(proper))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerbTag {
    Past(Verb),
    Present(Verb),
    PresentThirdPersonPlural(Verb),
    /// G-form
    PresentParticiple(Verb),
    /// N-form
    PastParticiple(Verb),
}

impl VerbTag {
    pub fn verb(&self) -> &Verb {
        match self {
            Self::Past(verb)
            | Self::Present(verb)
            | Self::PresentThirdPersonPlural(verb)
            | Self::PresentParticiple(verb)
            | Self::PastParticiple(verb) => verb,
        }
    }
}

/// Auxiliary categories (be, have, do and the modals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuxiliaryVerbTag {
    Tense,
    Mood,
    Voice,
    Modal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerbPhrase {
    Base(VerbTag),
    Auxiliary(AuxiliaryVerbTag, Box<VerbPhrase>),
    Distransitive(VerbTag, NounPhrase, NounPhrase),
}

impl VerbPhrase {
    pub fn auxiliary(tag: AuxiliaryVerbTag, inner: VerbPhrase) -> Self {
        Self::Auxiliary(tag, Box::new(inner))
    }
}
