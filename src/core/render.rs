/// Renderer: recursive conversion of phrase trees to surface text.

use thiserror::Error;

use crate::core::phrase::{NounPhrase, NounTag, PronounTag, VerbPhrase, VerbTag};
use crate::schema::determiner::Determiner;
use crate::schema::word::Adjective;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A recognized grammatical shape that has no rendering yet.
    #[error("rendering is not implemented for {0}")]
    NotImplemented(&'static str),
}

/// Conversion of a grammatical value to its surface string.
pub trait Render {
    fn render(&self) -> Result<String, RenderError>;
}

impl Render for NounTag {
    fn render(&self) -> Result<String, RenderError> {
        Ok(match self {
            Self::SingularNoun(noun) => noun.singular().to_string(),
            Self::PluralNoun(noun) => noun.plural().to_string(),
            Self::ProperNoun(proper) => proper.name.to_string(),
            Self::PluralProperNoun(proper) => proper.name.suffixed("s").to_string(),
        })
    }
}

impl Render for PronounTag {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            Self::Personal(proper) => Ok(proper.pronoun.subject().to_string()),
            Self::Possessive(pronoun) => Ok(pronoun.possessive_standalone().to_string()),
            Self::Reflexive(pronoun) => Ok(pronoun.reflexive().to_string()),
            Self::Reciprocal => Err(RenderError::NotImplemented("reciprocal pronoun")),
            Self::Demonstrative => Err(RenderError::NotImplemented("demonstrative pronoun")),
            Self::Relative => Err(RenderError::NotImplemented("relative pronoun")),
            Self::Interrogative => Err(RenderError::NotImplemented("interrogative pronoun")),
            Self::Indefinite => Err(RenderError::NotImplemented("indefinite pronoun")),
        }
    }
}

impl Render for NounPhrase {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            Self::Base(tag) => tag.render(),
            Self::Isolation(determiner) => Ok(determiner.to_string()),
            Self::Indefinite {
                modifiers,
                adjuncts,
                noun,
            } => {
                let body = modified_head(modifiers, adjuncts, noun.singular().to_string())?;
                Ok(format!("{} {}", indefinite_article(&body), body))
            }
            Self::Determined {
                determiner,
                modifiers,
                adjuncts,
                head,
            } => {
                let article = match determiner {
                    Determiner::Definite => "the",
                    Determiner::Proximal => {
                        return Err(RenderError::NotImplemented("proximal determiner"))
                    }
                    Determiner::Distal => {
                        return Err(RenderError::NotImplemented("distal determiner"))
                    }
                    Determiner::Possessive => {
                        return Err(RenderError::NotImplemented("possessive determiner"))
                    }
                    Determiner::Quantifier => {
                        return Err(RenderError::NotImplemented("quantifier determiner"))
                    }
                    Determiner::Distributive => {
                        return Err(RenderError::NotImplemented("distributive determiner"))
                    }
                };
                let body = modified_head(modifiers, adjuncts, head.render()?)?;
                Ok(format!("{} {}", article, body))
            }
            Self::Proform(_) => Err(RenderError::NotImplemented("proform noun phrase")),
            Self::Pronoun(tag) => tag.render(),
        }
    }
}

impl Render for VerbTag {
    fn render(&self) -> Result<String, RenderError> {
        Ok(match self {
            Self::Past(verb) => verb.simple_past().to_string(),
            Self::Present(verb) | Self::PresentThirdPersonPlural(verb) => verb.base().to_string(),
            Self::PresentParticiple(verb) => verb.present_participle().to_string(),
            Self::PastParticiple(verb) => verb.past_participle().to_string(),
        })
    }
}

impl Render for VerbPhrase {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            Self::Base(tag) => tag.render(),
            Self::Auxiliary(..) => Err(RenderError::NotImplemented("auxiliary verb phrase")),
            Self::Distransitive(..) => {
                Err(RenderError::NotImplemented("distransitive verb phrase"))
            }
        }
    }
}

/// Adjectives first, then noun adjuncts, then the head.
fn modified_head(
    modifiers: &[Adjective],
    adjuncts: &[NounTag],
    head: String,
) -> Result<String, RenderError> {
    let mut words: Vec<String> = modifiers.iter().map(|m| m.to_string()).collect();
    for adjunct in adjuncts {
        words.push(adjunct.render()?);
    }
    words.push(head);
    Ok(words.join(" "))
}

fn indefinite_article(next: &str) -> &'static str {
    match next.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::phrase::AuxiliaryVerbTag;
    use crate::schema::determiner::DeterminerUsableInIsolation;
    use crate::schema::noun::{
        CountableNoun, PersonalPronoun, PluralisableNoun, ProperNoun, UncountableNoun,
    };
    use crate::schema::verb::{IrregularVerb, Verb};
    use crate::schema::word::Word;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn countable(s: &str) -> PluralisableNoun {
        CountableNoun { singular: word(s) }.into()
    }

    fn steven() -> ProperNoun {
        ProperNoun::new(word("Steven"), PersonalPronoun::He)
    }

    #[test]
    fn noun_tags() {
        assert_eq!(NounTag::SingularNoun(countable("map").into()).render().unwrap(), "map");
        assert_eq!(NounTag::PluralNoun(countable("map")).render().unwrap(), "maps");
        assert_eq!(NounTag::ProperNoun(steven()).render().unwrap(), "Steven");
        let hendersons = ProperNoun::new(word("Henderson"), PersonalPronoun::They);
        assert_eq!(
            NounTag::PluralProperNoun(hendersons).render().unwrap(),
            "Hendersons"
        );
    }

    #[test]
    fn pronoun_tags() {
        assert_eq!(PronounTag::Personal(steven()).render().unwrap(), "he");
        assert_eq!(
            PronounTag::Possessive(PersonalPronoun::She).render().unwrap(),
            "hers"
        );
        assert_eq!(
            PronounTag::Reflexive(PersonalPronoun::It).render().unwrap(),
            "itself"
        );
        assert_eq!(
            PronounTag::Reciprocal.render(),
            Err(RenderError::NotImplemented("reciprocal pronoun"))
        );
    }

    #[test]
    fn every_pronoun_form_renders() {
        let expected = [
            (PersonalPronoun::I, "I", "mine", "myself"),
            (PersonalPronoun::He, "he", "his", "himself"),
            (PersonalPronoun::She, "she", "hers", "herself"),
            (PersonalPronoun::It, "it", "its", "itself"),
            (PersonalPronoun::They, "they", "theirs", "themselves"),
        ];
        for (pronoun, subject, possessive, reflexive) in expected {
            let proper = ProperNoun::new(word("Sam"), pronoun);
            assert_eq!(PronounTag::Personal(proper).render().unwrap(), subject);
            assert_eq!(PronounTag::Possessive(pronoun).render().unwrap(), possessive);
            assert_eq!(PronounTag::Reflexive(pronoun).render().unwrap(), reflexive);
        }
    }

    #[test]
    fn isolation_determiner() {
        let np = NounPhrase::Isolation(DeterminerUsableInIsolation::Each);
        assert_eq!(np.render().unwrap(), "each");
    }

    #[test]
    fn indefinite_article_choice() {
        assert_eq!(NounPhrase::indefinite(countable("map").into()).render().unwrap(), "a map");
        let news = UncountableNoun { singular: word("information") };
        assert_eq!(
            NounPhrase::indefinite(news.into()).render().unwrap(),
            "an information"
        );
    }

    #[test]
    fn indefinite_with_modifiers() {
        let np = NounPhrase::Indefinite {
            modifiers: vec![Adjective(word("old"))],
            adjuncts: vec![NounTag::SingularNoun(countable("school").into())],
            noun: countable("map").into(),
        };
        assert_eq!(np.render().unwrap(), "an old school map");
    }

    #[test]
    fn definite_determiner() {
        let np = NounPhrase::definite(NounTag::PluralNoun(countable("map")));
        assert_eq!(np.render().unwrap(), "the maps");

        let np = NounPhrase::Determined {
            determiner: Determiner::Definite,
            modifiers: vec![Adjective(word("small"))],
            adjuncts: vec![NounTag::SingularNoun(countable("train").into())],
            head: NounTag::SingularNoun(countable("station").into()),
        };
        assert_eq!(np.render().unwrap(), "the small train station");
    }

    #[test]
    fn unimplemented_determiners() {
        for (determiner, name) in [
            (Determiner::Proximal, "proximal determiner"),
            (Determiner::Distal, "distal determiner"),
            (Determiner::Possessive, "possessive determiner"),
            (Determiner::Quantifier, "quantifier determiner"),
            (Determiner::Distributive, "distributive determiner"),
        ] {
            let np = NounPhrase::Determined {
                determiner,
                modifiers: Vec::new(),
                adjuncts: Vec::new(),
                head: NounTag::SingularNoun(countable("map").into()),
            };
            assert_eq!(np.render(), Err(RenderError::NotImplemented(name)));
        }
    }

    #[test]
    fn proform_not_implemented() {
        let np = NounPhrase::Proform(PronounTag::Personal(steven()));
        assert_eq!(
            np.render(),
            Err(RenderError::NotImplemented("proform noun phrase"))
        );
    }

    #[test]
    fn verb_tags() {
        let walk = Verb::regular(word("walk"));
        assert_eq!(VerbTag::Past(walk.clone()).render().unwrap(), "walked");
        assert_eq!(VerbTag::Present(walk.clone()).render().unwrap(), "walk");
        assert_eq!(
            VerbTag::PresentThirdPersonPlural(walk.clone()).render().unwrap(),
            "walk"
        );
        assert_eq!(
            VerbTag::PresentParticiple(walk.clone()).render().unwrap(),
            "walking"
        );
        assert_eq!(VerbTag::PastParticiple(walk).render().unwrap(), "walked");

        let run = Verb::from(IrregularVerb::BaseParticiple {
            base: word("run"),
            simple_past: word("ran"),
        });
        assert_eq!(VerbTag::Past(run.clone()).render().unwrap(), "ran");
        assert_eq!(VerbTag::PastParticiple(run).render().unwrap(), "run");
    }

    #[test]
    fn nested_auxiliary_not_implemented() {
        let walk = VerbPhrase::Base(VerbTag::Present(Verb::regular(word("walk"))));
        let vp = VerbPhrase::auxiliary(
            AuxiliaryVerbTag::Modal,
            VerbPhrase::auxiliary(AuxiliaryVerbTag::Tense, walk),
        );
        assert_eq!(
            vp.render(),
            Err(RenderError::NotImplemented("auxiliary verb phrase"))
        );
    }

    #[test]
    fn distransitive_not_implemented() {
        let vp = VerbPhrase::Distransitive(
            VerbTag::Past(Verb::regular(word("hand"))),
            NounPhrase::personal(steven()),
            NounPhrase::indefinite(countable("map").into()),
        );
        assert_eq!(
            vp.render(),
            Err(RenderError::NotImplemented("distransitive verb phrase"))
        );
    }
}
