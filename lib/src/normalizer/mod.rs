pub mod alphabetic;
pub mod case;
pub mod punctuation;
pub mod stopwords;

pub use {
    alphabetic::Alphabetic, case::Lowercase, punctuation::TrailingPunctuation,
    stopwords::Stopwords,
};

use crate::token::Tokens;

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

/// A single normalization stage.
///
/// Stages rewrite tokens in place or drop them from the stream; a dropped
/// token is simply not a keyword. No stage fails.
pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&mut self, tokens: &mut Tokens);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

/// Ordered chain of normalization stages.
///
/// The keyword test is the full chain: strip trailing punctuation,
/// lowercase, reject non-alphabetic tokens, reject noise words. Tokens
/// surviving every stage are the indexable keywords.
#[derive(Clone, Debug)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl Default for NormalizerPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn run(&mut self, tokens: &mut Tokens) {
        self.0.iter_mut().for_each(|normalizer| {
            normalizer.normalize(tokens);
        })
    }
}
