//! WASM bindings for narrative-syntax: powers the interactive web demo.

use wasm_bindgen::prelude::*;

use narrative_syntax::core::lexicon::Lexicon;
use narrative_syntax::core::render::Render;
use narrative_syntax::core::sampler::SentenceSampler;
use narrative_syntax::core::sentence::Sentence;
use narrative_syntax::schema::verb::Verb;
use narrative_syntax::schema::word::Word;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct SampleOutput {
    text: String,
    sentence: Sentence,
}

// ---------------------------------------------------------------------------
// SyntaxDemo: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct SyntaxDemo {
    lexicon: Lexicon,
    seed: u64,
    draws: u64,
}

#[wasm_bindgen]
impl SyntaxDemo {
    /// Create a demo over the built-in English lexicon.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<SyntaxDemo, JsError> {
        let lexicon = Lexicon::builtin()
            .map_err(|e| JsError::new(&format!("Lexicon parse error: {e}")))?;
        Ok(SyntaxDemo {
            lexicon,
            seed,
            draws: 0,
        })
    }

    /// Every form of a verb as JSON. Unknown verbs conjugate as regular.
    pub fn conjugate(&self, base: &str) -> Result<String, JsError> {
        let verb = match self.lexicon.verb(base) {
            Some(verb) => verb.clone(),
            None => Verb::regular(
                Word::new(base).map_err(|e| JsError::new(&format!("Invalid verb: {e}")))?,
            ),
        };
        serde_json::to_string(&verb.conjugation())
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Render a sentence tree given as JSON.
    pub fn render(&self, sentence_json: &str) -> Result<String, JsError> {
        let sentence: Sentence = serde_json::from_str(sentence_json)
            .map_err(|e| JsError::new(&format!("Invalid sentence JSON: {e}")))?;
        sentence
            .render()
            .map_err(|e| JsError::new(&format!("Render error: {e}")))
    }

    /// Sample `count` sentences; returns a JSON array of `{text, sentence}`.
    pub fn sample(&mut self, count: usize) -> Result<String, JsError> {
        let mut sampler = SentenceSampler::new(&self.lexicon, self.seed.wrapping_add(self.draws));
        self.draws += 1;

        let mut output = Vec::with_capacity(count);
        for sentence in sampler.sample_many(count) {
            let text = sentence
                .render()
                .map_err(|e| JsError::new(&format!("Render error: {e}")))?;
            output.push(SampleOutput { text, sentence });
        }
        serde_json::to_string(&output)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Restart sampling from a new seed.
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.draws = 0;
    }

    pub fn nouns(&self) -> String {
        let headwords: Vec<&str> = self
            .lexicon
            .nouns()
            .iter()
            .map(|n| n.singular().as_str())
            .collect();
        serde_json::to_string(&headwords).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn verbs(&self) -> String {
        let headwords: Vec<&str> = self
            .lexicon
            .verbs()
            .iter()
            .map(|v| v.base().as_str())
            .collect();
        serde_json::to_string(&headwords).unwrap_or_else(|_| "[]".to_string())
    }
}
