use crate::{normalizer::TextNormalizer, token::Tokens};

/// Strips the run of trailing non-alphabetic characters from each token.
///
/// Only the end of the token is cleaned: "sea." becomes "sea", while
/// "don't" keeps its embedded apostrophe and is left for the alphabetic
/// stage to reject. A token made of punctuation only shrinks to the empty
/// string.
#[derive(Clone, Debug, Default)]
pub struct TrailingPunctuation;

impl TrailingPunctuation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextNormalizer for TrailingPunctuation {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            let stripped = token
                .as_str()
                .trim_end_matches(|ch: char| !ch.is_alphabetic())
                .len();
            token.inner_mut().truncate(stripped);
        });
    }
}
