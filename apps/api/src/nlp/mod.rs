//! Linguistic resources and text normalization for the classification pipeline.

pub mod lexicon;
pub mod normalizer;

pub use lexicon::Lexicon;
pub use normalizer::TextNormalizer;
