mod whitespace;

pub use whitespace::Whitespace;

use crate::token::Tokens;

/// Tokenizer dispatch.
///
/// Documents are split into whitespace-delimited raw tokens; anything
/// smarter (punctuation handling, casing) belongs to the normalizer
/// pipeline downstream.
#[derive(Clone, Debug)]
pub enum Tokenizer {
    Whitespace(Whitespace),
}

impl Tokenizer {
    pub fn tokenize(&mut self, text: &str) -> Tokens {
        match self {
            Tokenizer::Whitespace(tokenizer) => tokenizer.tokenize(text),
        }
    }
}

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens;
}
