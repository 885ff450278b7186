//! Narrative Syntax: typed English phrase trees rendered to text.
//!
//! Nouns and verbs from a lexicon are composed into phrase trees and
//! sentences. Rendering walks the tree, deriving verb forms
//! with a rule-based morphology engine and resolving subject–verb
//! agreement along the way.

pub mod core;
pub mod schema;

pub use crate::core::lexicon::{Lexicon, LexiconError};
pub use crate::core::render::{Render, RenderError};
pub use crate::core::sentence::Sentence;
pub use crate::schema::word::{Word, WordError};
