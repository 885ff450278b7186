/// Lexicon loading and sentence rendering integration tests.

use narrative_syntax::core::lexicon::{Lexicon, LexiconError};
use narrative_syntax::core::phrase::{NounPhrase, NounTag, VerbPhrase, VerbTag};
use narrative_syntax::core::render::{Render, RenderError};
use narrative_syntax::core::sampler::SentenceSampler;
use narrative_syntax::core::sentence::Sentence;
use narrative_syntax::schema::verb::Verb;
use narrative_syntax::schema::word::{Adjective, Word, WordError};
use std::path::Path;

fn test_lexicon() -> Lexicon {
    Lexicon::load_from_ron(Path::new("tests/fixtures/test_lexicon.ron")).unwrap()
}

fn subject(lexicon: &Lexicon, name: &str) -> NounPhrase {
    NounPhrase::personal(lexicon.proper_noun(name).unwrap().clone())
}

fn verb(lexicon: &Lexicon, tag: fn(Verb) -> VerbTag, base: &str) -> VerbPhrase {
    VerbPhrase::Base(tag(lexicon.verb(base).unwrap().clone()))
}

#[test]
fn test_lexicon_loads() {
    let lexicon = test_lexicon();
    assert_eq!(lexicon.nouns().len(), 4);
    assert_eq!(lexicon.proper_nouns().len(), 3);
    assert_eq!(lexicon.verbs().len(), 11);
}

#[test]
fn he_walks_they_walk() {
    let lexicon = test_lexicon();
    let he = Sentence::simple(
        subject(&lexicon, "Steven"),
        verb(&lexicon, VerbTag::Present, "walk"),
        None,
    );
    assert_eq!(he.render().unwrap(), "he walks");

    let they = Sentence::simple(
        subject(&lexicon, "Henderson"),
        verb(&lexicon, VerbTag::Present, "walk"),
        None,
    );
    assert_eq!(they.render().unwrap(), "they walk");
}

#[test]
fn tenses_render() {
    let lexicon = test_lexicon();
    let cases: [(fn(Verb) -> VerbTag, &str, &str); 5] = [
        (VerbTag::Past, "begin", "she began"),
        (VerbTag::Present, "begin", "she begins"),
        (VerbTag::PresentThirdPersonPlural, "begin", "she begins"),
        (VerbTag::PresentParticiple, "begin", "she beginning"),
        (VerbTag::PastParticiple, "begin", "she begun"),
    ];
    for (tag, base, expected) in cases {
        let sentence =
            Sentence::simple(subject(&lexicon, "Sarah"), verb(&lexicon, tag, base), None);
        assert_eq!(sentence.render().unwrap(), expected);
    }
}

#[test]
fn common_and_proper_noun_subjects_do_not_agree() {
    let lexicon = test_lexicon();
    let map = lexicon.noun("map").unwrap().clone();
    let the_map = Sentence::simple(
        NounPhrase::definite(NounTag::SingularNoun(map)),
        verb(&lexicon, VerbTag::Present, "cost"),
        None,
    );
    assert_eq!(the_map.render().unwrap(), "the map cost");

    let steven = lexicon.proper_noun("Steven").unwrap().clone();
    let named = Sentence::simple(
        NounPhrase::Base(NounTag::ProperNoun(steven)),
        verb(&lexicon, VerbTag::Present, "want"),
        None,
    );
    assert_eq!(named.render().unwrap(), "Steven want");
}

#[test]
fn sentence_with_object() {
    let lexicon = test_lexicon();
    let maps = lexicon.noun("map").unwrap().as_pluralisable().unwrap().clone();
    let sentence = Sentence::simple(
        subject(&lexicon, "Sarah"),
        verb(&lexicon, VerbTag::Past, "bring"),
        Some(NounPhrase::definite(NounTag::PluralNoun(maps))),
    );
    assert_eq!(sentence.render().unwrap(), "she brought the maps");
}

#[test]
fn modified_indefinite_object() {
    let lexicon = test_lexicon();
    let map = lexicon.noun("map").unwrap().clone();
    let object = NounPhrase::Indefinite {
        modifiers: vec![Adjective(Word::new("old").unwrap())],
        adjuncts: vec![],
        noun: map,
    };
    let sentence = Sentence::simple(
        subject(&lexicon, "Steven"),
        verb(&lexicon, VerbTag::Present, "want"),
        Some(object),
    );
    assert_eq!(sentence.render().unwrap(), "he wants an old map");
}

#[test]
fn unsupported_verb_phrase_is_an_error() {
    let lexicon = test_lexicon();
    let walk = lexicon.verb("walk").unwrap().clone();
    let sentence = Sentence::simple(
        subject(&lexicon, "Steven"),
        VerbPhrase::Distransitive(
            VerbTag::Present(walk),
            NounPhrase::Base(NounTag::SingularNoun(lexicon.noun("map").unwrap().clone())),
            NounPhrase::Base(NounTag::SingularNoun(lexicon.noun("news").unwrap().clone())),
        ),
        None,
    );
    assert_eq!(
        sentence.render(),
        Err(RenderError::NotImplemented("distransitive verb phrase"))
    );
}

#[test]
fn override_lexicon_wins() {
    let lexicon = Lexicon::builder()
        .lexicon_file("tests/fixtures/test_lexicon.ron")
        .lexicon_file("tests/fixtures/override_lexicon.ron")
        .build()
        .unwrap();

    let walk = lexicon.verb("walk").unwrap();
    assert!(walk.is_irregular());
    assert_eq!(walk.simple_past().as_str(), "walkt");
    assert_eq!(walk.past_participle().as_str(), "walkt");
    assert!(lexicon.noun("lantern").is_some());
    assert!(lexicon.noun("map").is_some());
    assert_eq!(lexicon.verbs().len(), 11);
}

#[test]
fn directory_loading_is_ordered() {
    // invalid_lexicon.ron sorts first and fails the whole build
    let result = Lexicon::builder().lexicon_dir("tests/fixtures").build();
    assert!(matches!(
        result,
        Err(LexiconError::Word(WordError::InvalidWord(ref raw))) if raw == "was/were"
    ));
}

#[test]
fn invalid_lexicon_rejected() {
    let result = Lexicon::load_from_ron(Path::new("tests/fixtures/invalid_lexicon.ron"));
    match result {
        Err(LexiconError::Word(WordError::InvalidWord(raw))) => assert_eq!(raw, "was/were"),
        other => panic!("expected invalid word error, got {:?}", other),
    }
}

#[test]
fn readme_lexicon_example_parses() {
    let readme = include_str!("../README.md");
    let start = readme.find("```ron\n").expect("README has a ron block") + "```ron\n".len();
    let len = readme[start..].find("```").expect("ron block is closed");
    let lexicon = Lexicon::parse_ron(&readme[start..start + len]).unwrap();

    let bring = lexicon.verb("bring").unwrap();
    assert!(bring.is_irregular());
    assert_eq!(bring.simple_past().as_str(), "brought");
    assert_eq!(bring.past_participle().as_str(), "brought");
    assert_eq!(lexicon.verb("begin").unwrap().past_participle().as_str(), "begun");
    assert_eq!(lexicon.verb("cost").unwrap().simple_past().as_str(), "cost");
}

#[test]
fn builtin_lexicon_has_irregular_forms() {
    let lexicon = Lexicon::builtin().unwrap();
    assert_eq!(lexicon.verb("catch").unwrap().simple_past().as_str(), "caught");
    assert_eq!(lexicon.verb("run").unwrap().past_participle().as_str(), "run");
    assert_eq!(lexicon.verb("choose").unwrap().past_participle().as_str(), "chosen");
}

#[test]
fn sentence_survives_ron_roundtrip() {
    let lexicon = test_lexicon();
    let sentence = Sentence::simple(
        subject(&lexicon, "Steven"),
        verb(&lexicon, VerbTag::Present, "look"),
        None,
    );
    let text = ron::to_string(&sentence).unwrap();
    let parsed: Sentence = ron::from_str(&text).unwrap();
    assert_eq!(parsed.render().unwrap(), "he looks");
}

#[test]
fn sampled_sentences_use_lexicon_verbs() {
    let lexicon = test_lexicon();
    let mut sampler = SentenceSampler::new(&lexicon, 3);
    for sentence in sampler.sample_many(20) {
        let Sentence::Simple { verb, .. } = &sentence;
        if let VerbPhrase::Base(tag) = verb {
            assert!(lexicon.verb(tag.verb().base().as_str()).is_some());
        }
        assert!(sentence.render().is_ok());
    }
}
