use crate::{normalizer::TextNormalizer, token::Tokens};

/// Drops tokens that are empty or contain any non-alphabetic character.
///
/// Runs after the trailing strip, so what it rejects is embedded
/// punctuation and digits anywhere in the token.
#[derive(Clone, Debug, Default)]
pub struct Alphabetic;

impl Alphabetic {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextNormalizer for Alphabetic {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.retain_mut(|token| {
            !token.is_empty() && token.chars().all(char::is_alphabetic)
        })
    }
}
