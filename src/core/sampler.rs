/// Seeded construction of example sentences from a lexicon.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::lexicon::Lexicon;
use crate::core::phrase::{NounPhrase, NounTag, VerbPhrase, VerbTag};
use crate::core::sentence::Sentence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NounShape {
    Bare,
    Plural,
    Definite,
    Indefinite,
    Proper,
    Pronoun,
}

/// Builds random simple sentences using only shapes that render.
///
/// The same lexicon and seed always yield the same sequence.
pub struct SentenceSampler<'a> {
    lexicon: &'a Lexicon,
    rng: StdRng,
}

impl<'a> SentenceSampler<'a> {
    pub fn new(lexicon: &'a Lexicon, seed: u64) -> Self {
        Self {
            lexicon,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `None` when the lexicon has no common nouns or no verbs.
    pub fn sample(&mut self) -> Option<Sentence> {
        if self.lexicon.nouns().is_empty() || self.lexicon.verbs().is_empty() {
            return None;
        }
        let subject = self.noun_phrase(true)?;
        let verb = self.verb_phrase()?;
        let object = if self.rng.gen_bool(0.5) {
            self.noun_phrase(false)
        } else {
            None
        };
        Some(Sentence::simple(subject, verb, object))
    }

    pub fn sample_many(&mut self, count: usize) -> Vec<Sentence> {
        (0..count).map_while(|_| self.sample()).collect()
    }

    /// Personal pronouns only appear as subjects; the renderer has no
    /// object case.
    fn noun_phrase(&mut self, as_subject: bool) -> Option<NounPhrase> {
        let noun = self.lexicon.nouns().choose(&mut self.rng)?.clone();

        let mut shapes = vec![NounShape::Bare, NounShape::Definite, NounShape::Indefinite];
        if noun.as_pluralisable().is_some() {
            shapes.push(NounShape::Plural);
        }
        if !self.lexicon.proper_nouns().is_empty() {
            shapes.push(NounShape::Proper);
            if as_subject {
                shapes.push(NounShape::Pronoun);
            }
        }

        let shape = *shapes.choose(&mut self.rng)?;
        Some(match shape {
            NounShape::Bare => NounPhrase::Base(NounTag::SingularNoun(noun)),
            NounShape::Plural => match noun.as_pluralisable() {
                Some(plural) => NounPhrase::definite(NounTag::PluralNoun(plural.clone())),
                None => NounPhrase::Base(NounTag::SingularNoun(noun)),
            },
            NounShape::Definite => NounPhrase::definite(NounTag::SingularNoun(noun)),
            NounShape::Indefinite => NounPhrase::indefinite(noun),
            NounShape::Proper => {
                let proper = self.lexicon.proper_nouns().choose(&mut self.rng)?.clone();
                NounPhrase::Base(NounTag::ProperNoun(proper))
            }
            NounShape::Pronoun => {
                let proper = self.lexicon.proper_nouns().choose(&mut self.rng)?.clone();
                NounPhrase::personal(proper)
            }
        })
    }

    fn verb_phrase(&mut self) -> Option<VerbPhrase> {
        let verb = self.lexicon.verbs().choose(&mut self.rng)?.clone();
        let tag = match self.rng.gen_range(0..4) {
            0 => VerbTag::Past(verb),
            1 => VerbTag::Present(verb),
            2 => VerbTag::PresentParticiple(verb),
            _ => VerbTag::PastParticiple(verb),
        };
        Some(VerbPhrase::Base(tag))
    }
}
