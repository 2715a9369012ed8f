//! The [`CoreIndex`] ties the document store and the inverted index
//! together and is the only owner of both.
//!
//! Writes go through [`crate::writer::IndexWriter`] during the build
//! phase; queries go through [`crate::reader::IndexReader`] afterwards.

use std::fmt::Debug;

use crate::{
    core::{InvertedIndex, Store, TermCounter},
    rank::{Ranker, UnionRanker},
    reader::{IndexReader, ReaderContext},
    writer::{IndexWriter, ResourceState, WriterContext},
};

pub trait Indexer {
    type R: Clone + Debug;

    fn new(capacity: usize) -> Self;
    fn insert(&mut self, resource: Self::R, counts: TermCounter);
    fn top(&self, first: &str, second: &str) -> Vec<Self::R>;
    fn get_resource(&self, index: usize) -> Option<Self::R>;
}

/// # Index
///
/// Single-threaded, build-then-query. Documents are merged one at a time
/// in manifest order; once the last document is merged the index is only
/// ever read.
#[derive(Debug)]
pub struct Index<R: Clone + Debug> {
    pub core: CoreIndex<R>,
    pub capacity: usize,
}

impl<R: Clone + Debug> Indexer for Index<R> {
    type R = R;

    fn new(capacity: usize) -> Self {
        Self {
            core: CoreIndex::with_capacity(capacity),
            capacity,
        }
    }

    /// Merges one document's keyword counts into the master index.
    ///
    /// A document with no indexable keywords is skipped entirely; it can
    /// never match a query, so it is not registered either.
    fn insert(&mut self, resource: R, counts: TermCounter) {
        if counts.is_empty() {
            return;
        }

        let writer = self.core.writer();
        let context = WriterContext::<ResourceState, R>::new(writer);
        let mut entry = context.entry(resource);

        for (term, frequency) in counts {
            entry.insert_occurrence(&term, frequency);
        }
    }

    fn top(&self, first: &str, second: &str) -> Vec<R> {
        let reader = self.core.reader();
        let context = ReaderContext::new(reader);

        let ranker = UnionRanker::new(&context);
        ranker.top(first, second)
    }

    fn get_resource(&self, index: usize) -> Option<R> {
        let reader = self.core.reader();
        let context = ReaderContext::new(reader);

        context.get_resource(index)
    }
}

#[derive(Debug)]
pub struct CoreIndex<R: Clone + Debug> {
    store: Store<R>,
    index: InvertedIndex,
}

impl<R: Clone + Debug> CoreIndex<R> {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Store::with_capacity(capacity),
            index: InvertedIndex::with_capacity(capacity),
        }
    }

    /// READ access to the index.
    ///
    /// # See Also
    ///
    /// - [`IndexWriter`]: WRITE access during the build phase.
    pub fn reader(&self) -> IndexReader<R> {
        IndexReader::new(&self.store, &self.index)
    }

    /// WRITE access to the index.
    ///
    /// # See Also
    ///
    /// - [`IndexReader`]: READ access once building is over.
    pub fn writer(&mut self) -> IndexWriter<R> {
        IndexWriter::new(&mut self.store, &mut self.index)
    }
}
