/// Sentence assembly and rendering.

use serde::{Deserialize, Serialize};

use crate::core::agreement::{is_present_tense, is_third_person_singular};
use crate::core::phrase::{NounPhrase, VerbPhrase};
use crate::core::render::{Render, RenderError};

/// A clause built fresh per utterance and consumed by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentence {
    /// Subject–verb–(object).
    Simple {
        subject: NounPhrase,
        verb: VerbPhrase,
        object: Option<NounPhrase>,
    },
}

impl Sentence {
    pub fn simple(subject: NounPhrase, verb: VerbPhrase, object: Option<NounPhrase>) -> Self {
        Self::Simple {
            subject,
            verb,
            object,
        }
    }
}

impl Render for Sentence {
    /// Subject and verb are rendered independently; a third person
    /// singular subject with a present tense verb gets a bare `s`
    /// appended to the verb, with no spelling adjustment.
    fn render(&self) -> Result<String, RenderError> {
        match self {
            Self::Simple {
                subject,
                verb,
                object,
            } => {
                let mut words = vec![subject.render()?];

                let mut verb_text = verb.render()?;
                if is_third_person_singular(subject) && is_present_tense(verb)? {
                    verb_text.push('s');
                }
                words.push(verb_text);

                if let Some(object) = object {
                    words.push(object.render()?);
                }

                Ok(words.join(" "))
            }
        }
    }
}
