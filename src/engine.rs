use tracing::debug;

use crate::{descriptor::Descriptor, query::Query};

use kwix::{
    core::TermCounter, index::Indexer, normalizer::NormalizerPipeline, tokenizer::Tokenizer,
};

/// Facade over the index, the tokenizer and the normalizer pipeline.
///
/// Documents stream in through [`KwixFacade::insert`] during the build
/// phase; [`KwixFacade::get`] answers queries afterwards.
#[derive(Debug)]
pub struct KwixFacade<I: Indexer> {
    pub index: I,
    pub tokenizer: Tokenizer,
    pub pipeline: NormalizerPipeline,
}

impl<I: Indexer> KwixFacade<I> {
    pub fn new(capacity: usize, tokenizer: Tokenizer, pipeline: NormalizerPipeline) -> Self {
        Self {
            index: I::new(capacity),
            tokenizer,
            pipeline,
        }
    }

    /// Tokenizes and normalizes one document, counts its keywords, and
    /// merges the counts into the master index.
    pub fn insert(&mut self, descriptor: Descriptor<<I as Indexer>::R>) {
        let mut tokens = descriptor.tokenize(&mut self.tokenizer);
        let resource = descriptor.resource();

        if !self.pipeline.is_empty() {
            self.pipeline.run(&mut tokens);
        }

        let mut counts = TermCounter::new();
        for token in tokens {
            counts.insert(token.into());
        }

        debug!(keywords = counts.len(), "merging document");
        self.index.insert(resource, counts);
    }

    pub fn get(&self, query: Query) -> Vec<<I as Indexer>::R> {
        self.index.top(query.first(), query.second())
    }
}

#[cfg(test)]
mod tests {
    use kwix::{
        index::Index,
        normalizer::{Alphabetic, Lowercase, NormalizerPipeline, Stopwords, TrailingPunctuation},
        tokenizer::{Tokenizer, Whitespace},
    };

    use crate::{descriptor::Descriptor, engine::KwixFacade, query::Query};

    fn keyword_pipeline(noise: &[&str]) -> NormalizerPipeline {
        let mut pipeline = NormalizerPipeline::new();
        pipeline.insert(Box::new(TrailingPunctuation::new()));
        pipeline.insert(Box::new(Lowercase::new()));
        pipeline.insert(Box::new(Alphabetic::new()));
        pipeline.insert(Box::new(Stopwords::new(noise.iter().copied())));
        pipeline
    }

    fn engine_with(noise: &[&str], corpus: &[(&str, &str)]) -> KwixFacade<Index<String>> {
        let tokenizer = Tokenizer::Whitespace(Whitespace::new());
        let mut engine: KwixFacade<Index<String>> =
            KwixFacade::new(10, tokenizer, keyword_pipeline(noise));

        for (name, text) in corpus {
            let descriptor = Descriptor::new(name.to_string(), (*text).into());
            engine.insert(descriptor);
        }

        engine
    }

    #[test]
    fn test_engine_worked_example() {
        let engine = engine_with(
            &[],
            &[
                ("doc1", "deep blue sea deep"),
                ("doc2", "world of deep water"),
            ],
        );

        let ranked = engine.get(Query::new("deep", "world"));
        assert_eq!(ranked, vec!["doc1", "doc2"]);
    }

    #[test]
    fn test_engine_noise_words_not_indexed() {
        let engine = engine_with(
            &["of", "the"],
            &[("doc1", "the sound of the sea"), ("doc2", "of of of")],
        );

        // "of" was stripped everywhere, so querying it matches nothing.
        assert!(engine.get(Query::new("of", "the")).is_empty());
        assert_eq!(engine.get(Query::new("sea", "sound")), vec!["doc1"]);
    }

    #[test]
    fn test_engine_punctuation_and_case() {
        let engine = engine_with(
            &[],
            &[("doc1", "Hello!! hello, HELLO"), ("doc2", "don't hello")],
        );

        // All three spellings in doc1 normalize to "hello"; doc2 keeps
        // only its trailing "hello" since "don't" is not purely
        // alphabetic.
        assert_eq!(engine.get(Query::new("HELLO", "absent")), vec!["doc1", "doc2"]);
    }

    #[test]
    fn test_engine_no_matches() {
        let engine = engine_with(&[], &[("doc1", "deep blue sea")]);

        assert!(engine.get(Query::new("absent", "nowhere")).is_empty());
    }
}
