use serde::{Deserialize, Serialize};

use super::word::{Infinitive, Word};
use crate::core::morphology;

/// A verb whose past forms are both root + "ed".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegularVerb {
    pub base: Word,
}

/// The four irregular shapes, by which forms coincide with the base.
///
/// Serialized as its three forms and re-classified on the way back in,
/// so a deserialized value is always in its smallest class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IrregularForms", into = "IrregularForms")]
pub enum IrregularVerb {
    /// Base, simple past and past participle identical: cost, cost, cost.
    Invariant { base: Word },
    /// Simple past and past participle shared: bring, brought, brought.
    SharedPast { base: Word, simple_past: Word },
    /// Past participle is the base: come, came, come.
    BaseParticiple { base: Word, simple_past: Word },
    /// All three distinct: begin, began, begun.
    Distinct {
        base: Word,
        simple_past: Word,
        past_participle: Word,
    },
}

impl IrregularVerb {
    /// Pick the class from which forms coincide. A missing simple past
    /// means the base is used throughout; a missing participle means it
    /// matches the simple past. `None` when only the participle is given.
    pub fn classify(
        base: Word,
        simple_past: Option<Word>,
        past_participle: Option<Word>,
    ) -> Option<IrregularVerb> {
        let (simple_past, past_participle) = match (simple_past, past_participle) {
            (None, None) => return Some(Self::Invariant { base }),
            (None, Some(_)) => return None,
            (Some(past), None) => (past.clone(), past),
            (Some(past), Some(participle)) => (past, participle),
        };

        Some(if simple_past == base && past_participle == base {
            Self::Invariant { base }
        } else if simple_past == past_participle {
            Self::SharedPast { base, simple_past }
        } else if past_participle == base {
            Self::BaseParticiple { base, simple_past }
        } else {
            Self::Distinct {
                base,
                simple_past,
                past_participle,
            }
        })
    }

    pub fn base(&self) -> &Word {
        match self {
            Self::Invariant { base }
            | Self::SharedPast { base, .. }
            | Self::BaseParticiple { base, .. }
            | Self::Distinct { base, .. } => base,
        }
    }

    pub fn simple_past(&self) -> &Word {
        match self {
            Self::Invariant { base } => base,
            Self::SharedPast { simple_past, .. }
            | Self::BaseParticiple { simple_past, .. }
            | Self::Distinct { simple_past, .. } => simple_past,
        }
    }

    pub fn past_participle(&self) -> &Word {
        match self {
            Self::Invariant { base } | Self::BaseParticiple { base, .. } => base,
            Self::SharedPast { simple_past, .. } => simple_past,
            Self::Distinct {
                past_participle, ..
            } => past_participle,
        }
    }

    /// Class number 1–4 in the usual textbook grouping.
    pub fn class(&self) -> u8 {
        match self {
            Self::Invariant { .. } => 1,
            Self::SharedPast { .. } => 2,
            Self::BaseParticiple { .. } => 3,
            Self::Distinct { .. } => 4,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct IrregularForms {
    base: Word,
    #[serde(default)]
    simple_past: Option<Word>,
    #[serde(default)]
    past_participle: Option<Word>,
}

impl TryFrom<IrregularForms> for IrregularVerb {
    type Error = String;

    fn try_from(forms: IrregularForms) -> Result<Self, Self::Error> {
        let base = forms.base.clone();
        IrregularVerb::classify(forms.base, forms.simple_past, forms.past_participle)
            .ok_or_else(|| format!("irregular verb '{}' has a past participle but no simple past", base))
    }
}

impl From<IrregularVerb> for IrregularForms {
    fn from(verb: IrregularVerb) -> Self {
        IrregularForms {
            simple_past: Some(verb.simple_past().clone()),
            past_participle: Some(verb.past_participle().clone()),
            base: verb.base().clone(),
        }
    }
}

/// Any verb, regular or irregular.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Regular(RegularVerb),
    Irregular(IrregularVerb),
}

impl Verb {
    pub fn regular(base: Word) -> Self {
        Self::Regular(RegularVerb { base })
    }

    pub fn base(&self) -> &Word {
        match self {
            Self::Regular(verb) => &verb.base,
            Self::Irregular(verb) => verb.base(),
        }
    }

    pub fn infinitive(&self) -> Infinitive {
        Infinitive::from_base(self.base())
    }

    pub fn gerund(&self) -> Word {
        morphology::form_gerund(self.base())
    }

    pub fn present_participle(&self) -> Word {
        morphology::form_present(self.base())
    }

    pub fn simple_past(&self) -> Word {
        match self {
            Self::Regular(verb) => morphology::form_past(&verb.base),
            Self::Irregular(verb) => verb.simple_past().clone(),
        }
    }

    pub fn past_participle(&self) -> Word {
        match self {
            Self::Regular(verb) => morphology::form_past(&verb.base),
            Self::Irregular(verb) => verb.past_participle().clone(),
        }
    }

    pub fn is_irregular(&self) -> bool {
        matches!(self, Self::Irregular(_))
    }

    pub fn conjugation(&self) -> Conjugation {
        Conjugation {
            base: self.base().clone(),
            infinitive: self.infinitive().to_string(),
            gerund: self.gerund(),
            present_participle: self.present_participle(),
            simple_past: self.simple_past(),
            past_participle: self.past_participle(),
            irregular: self.is_irregular(),
        }
    }
}

impl From<RegularVerb> for Verb {
    fn from(verb: RegularVerb) -> Self {
        Self::Regular(verb)
    }
}

impl From<IrregularVerb> for Verb {
    fn from(verb: IrregularVerb) -> Self {
        Self::Irregular(verb)
    }
}

/// Every form of one verb, as listed by the `conjugate` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conjugation {
    pub base: Word,
    pub infinitive: String,
    pub gerund: Word,
    pub present_participle: Word,
    pub simple_past: Word,
    pub past_participle: Word,
    pub irregular: bool,
}
