use std::fmt::Debug;

use crate::core::{InvertedIndex, Occurrences, Store};

/// READ access to the index.
pub struct IndexReader<'r, R: Clone + Debug> {
    store: &'r Store<R>,
    index: &'r InvertedIndex,
}

impl<'r, R: Clone + Debug> IndexReader<'r, R> {
    pub fn new(store: &'r Store<R>, index: &'r InvertedIndex) -> Self {
        Self { store, index }
    }
}

impl<R: Clone + Debug> IndexReader<'_, R> {
    /// Number of indexed documents
    #[inline]
    pub fn total_documents(&self) -> usize {
        self.store.len()
    }

    /// Number of documents containing the term
    #[inline]
    pub fn document_frequency(&self, term: &str) -> Option<usize> {
        self.index.get_entry_with(term, Occurrences::len)
    }

    /// Get the ordered posting list for a term
    #[inline]
    pub fn get_term_entries(&self, term: &str) -> Option<&Occurrences> {
        self.index.get_term_entries(term)
    }
}

pub struct ReaderContext<'rctx, R: Clone + Debug> {
    reader: IndexReader<'rctx, R>,
}

impl<'rctx, R: Clone + Debug> ReaderContext<'rctx, R> {
    pub fn new(reader: IndexReader<'rctx, R>) -> Self {
        Self { reader }
    }

    #[inline]
    pub fn total_documents(&self) -> usize {
        self.reader.total_documents()
    }

    #[inline]
    pub fn document_frequency(&self, term: &str) -> Option<usize> {
        self.reader.document_frequency(term)
    }

    #[inline]
    pub fn get_resource(&self, index: usize) -> Option<R> {
        self.store().get(index).cloned()
    }

    #[inline]
    fn store(&self) -> &Store<R> {
        self.reader.store
    }

    // low-level function to retrieve the posting list, if it exists.
    #[inline]
    pub fn get_entry(&self, term: &str) -> Option<&Occurrences> {
        self.reader.get_term_entries(term)
    }

    // low-level function to perform read operations on the entry, if it exists.
    #[inline]
    pub fn get_entry_with<O>(&self, term: &str, f: impl FnOnce(&Occurrences) -> O) -> Option<O> {
        self.reader.index.get_entry_with(term, f)
    }
}
