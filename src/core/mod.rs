pub mod agreement;
pub mod lexicon;
pub mod morphology;
pub mod phrase;
pub mod render;
pub mod sampler;
pub mod sentence;
