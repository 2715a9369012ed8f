extern crate hashbrown;

use hashbrown::HashSet;

use crate::{normalizer::TextNormalizer, token::Tokens};

/// Noise-word filter.
///
/// Membership is an exact match against the loaded set; the set is built
/// once (from the noise-word file or a literal list in tests) and read-only
/// afterwards.
#[derive(Clone, Debug)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = words.into_iter().map(Into::into).collect::<HashSet<_>>();
        Self(set)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TextNormalizer for Stopwords {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.retain_mut(|token| {
            let word = token.as_mut();
            word.make_ascii_lowercase();
            !self.0.contains(&*word)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        normalizer::{Stopwords, TextNormalizer},
        tokens,
    };

    #[test]
    fn test_normalizer_stopwords() {
        const WITH_STOPWORDS: [&str; 3] = ["the", "and", "in"];

        let mut tokens = tokens!["the", "cat", "in", "the", "hat", "and", "bat"];
        let mut normalizer = Stopwords::new(WITH_STOPWORDS);

        normalizer.normalize(&mut tokens);

        assert_eq!(tokens, tokens!["cat", "hat", "bat"]);
    }

    #[test]
    fn test_normalizer_stopwords_none() {
        const NO_STOPWORDS: [&str; 0] = [];

        let mut tokens = tokens!["one", "two", "three"];
        let mut normalizer = Stopwords::new(NO_STOPWORDS);

        normalizer.normalize(&mut tokens);

        assert_eq!(tokens, tokens!["one", "two", "three"]);
    }

    #[test]
    fn test_normalizer_stopwords_tokenless() {
        const STOPWORDS_EMPTY: [&str; 3] = ["the", "and", "in"];

        let mut tokens = tokens![];
        let mut normalizer = Stopwords::new(STOPWORDS_EMPTY);

        normalizer.normalize(&mut tokens);

        assert_eq!(tokens, tokens![]);
    }

    #[test]
    fn test_stopwords_membership() {
        let stopwords = Stopwords::new(["of", "the"]);
        assert!(stopwords.contains("of"));
        assert!(!stopwords.contains("deep"));
        assert_eq!(stopwords.len(), 2);
    }
}
