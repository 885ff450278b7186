/// Subject–verb agreement.

use crate::core::phrase::{NounPhrase, PronounTag, VerbPhrase, VerbTag};
use crate::core::render::RenderError;

/// True only for a personal pronoun subject of class he/she/it.
///
/// Common-noun and proper-noun subjects ("the dog", "Steven") are never
/// treated as third person singular, so they do not trigger the `-s`
/// suffix.
pub fn is_third_person_singular(subject: &NounPhrase) -> bool {
    match subject {
        NounPhrase::Pronoun(PronounTag::Personal(proper)) => {
            proper.pronoun.is_third_person_singular()
        }
        _ => false,
    }
}

pub fn is_present_tense(verb: &VerbPhrase) -> Result<bool, RenderError> {
    match verb {
        VerbPhrase::Base(tag) => Ok(is_present_tag(tag)),
        VerbPhrase::Auxiliary(..) => Err(RenderError::NotImplemented("auxiliary verb phrase")),
        VerbPhrase::Distransitive(..) => {
            Err(RenderError::NotImplemented("distransitive verb phrase"))
        }
    }
}

fn is_present_tag(tag: &VerbTag) -> bool {
    match tag {
        VerbTag::Present(_) | VerbTag::PresentThirdPersonPlural(_) => true,
        VerbTag::Past(_) | VerbTag::PresentParticiple(_) | VerbTag::PastParticiple(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::phrase::{AuxiliaryVerbTag, NounTag};
    use crate::schema::noun::{CountableNoun, Noun, PersonalPronoun, ProperNoun};
    use crate::schema::verb::Verb;
    use crate::schema::word::Word;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pronoun(pronoun: PersonalPronoun) -> NounPhrase {
        NounPhrase::personal(ProperNoun::new(word("Sam"), pronoun))
    }

    fn walk() -> Verb {
        Verb::regular(word("walk"))
    }

    #[test]
    fn he_she_it_are_third_person_singular() {
        assert!(is_third_person_singular(&pronoun(PersonalPronoun::He)));
        assert!(is_third_person_singular(&pronoun(PersonalPronoun::She)));
        assert!(is_third_person_singular(&pronoun(PersonalPronoun::It)));
    }

    #[test]
    fn i_and_they_are_not() {
        assert!(!is_third_person_singular(&pronoun(PersonalPronoun::I)));
        assert!(!is_third_person_singular(&pronoun(PersonalPronoun::They)));
    }

    #[test]
    fn nouns_are_never_third_person_singular() {
        let dog = Noun::from(CountableNoun { singular: word("dog") });
        assert!(!is_third_person_singular(&NounPhrase::Base(NounTag::SingularNoun(dog.clone()))));
        assert!(!is_third_person_singular(&NounPhrase::definite(NounTag::SingularNoun(dog))));
        let steven = ProperNoun::new(word("Steven"), PersonalPronoun::He);
        assert!(!is_third_person_singular(&NounPhrase::Base(NounTag::ProperNoun(steven))));
    }

    #[test]
    fn proform_personal_is_not_a_pronoun_subject() {
        let np = NounPhrase::Proform(PronounTag::Personal(ProperNoun::new(
            word("Sam"),
            PersonalPronoun::He,
        )));
        assert!(!is_third_person_singular(&np));
    }

    #[test]
    fn present_tense_tags() {
        assert!(is_present_tense(&VerbPhrase::Base(VerbTag::Present(walk()))).unwrap());
        assert!(
            is_present_tense(&VerbPhrase::Base(VerbTag::PresentThirdPersonPlural(walk())))
                .unwrap()
        );
        assert!(!is_present_tense(&VerbPhrase::Base(VerbTag::Past(walk()))).unwrap());
        assert!(
            !is_present_tense(&VerbPhrase::Base(VerbTag::PresentParticiple(walk()))).unwrap()
        );
        assert!(!is_present_tense(&VerbPhrase::Base(VerbTag::PastParticiple(walk()))).unwrap());
    }

    #[test]
    fn present_tense_of_unsupported_phrases() {
        let aux = VerbPhrase::auxiliary(
            AuxiliaryVerbTag::Voice,
            VerbPhrase::Base(VerbTag::Present(walk())),
        );
        assert!(matches!(
            is_present_tense(&aux),
            Err(RenderError::NotImplemented(_))
        ));
    }
}
