use std::{fmt::Debug, marker::PhantomData};

use crate::{
    core::{InvertedIndex, Occurrence, Store},
    util::Counter,
};

/// WRITE access to the index.
///
/// Only the build phase holds one of these; once building is over, all
/// access goes through the reader side.
pub struct IndexWriter<'w, R: Clone + Debug> {
    store: &'w mut Store<R>,
    index: &'w mut InvertedIndex,
}

impl<'w, R: Clone + Debug> IndexWriter<'w, R> {
    pub fn new(store: &'w mut Store<R>, index: &'w mut InvertedIndex) -> Self {
        Self { store, index }
    }

    pub fn insert_resource(&mut self, resource: R) -> usize {
        self.store.insert(resource)
    }

    pub fn insert_occurrence(&mut self, term: &str, occurrence: Occurrence) -> Vec<usize> {
        self.index.add_occurrence(term, occurrence)
    }
}

pub struct ResourceState;

#[derive(Clone, Copy)]
pub struct TermEntryState {
    index: usize,
}

/// Typestate over [`IndexWriter`]: a document is registered first, then
/// its term counts stream in against the index it was assigned.
pub struct WriterContext<'wctx, S, R: Clone + Debug> {
    writer: IndexWriter<'wctx, R>,
    data: Option<S>,
    _marker: PhantomData<S>,
}

impl<'wctx, S, R: Clone + Debug> WriterContext<'wctx, S, R> {
    pub fn new(writer: IndexWriter<'wctx, R>) -> Self {
        Self {
            writer,
            data: None,
            _marker: PhantomData,
        }
    }

    pub fn new_with_data(writer: IndexWriter<'wctx, R>, data: S) -> Self {
        Self {
            writer,
            data: Some(data),
            _marker: PhantomData,
        }
    }
}

impl<'wctx, R: Clone + Debug> WriterContext<'wctx, ResourceState, R> {
    pub fn entry(mut self, resource: R) -> WriterContext<'wctx, TermEntryState, R> {
        let index = self.writer.insert_resource(resource);
        WriterContext::<'wctx, TermEntryState, R>::new_with_data(
            self.writer,
            TermEntryState { index },
        )
    }
}

impl<R: Clone + Debug> WriterContext<'_, TermEntryState, R> {
    /// Merges one keyword's per-document count into the posting list.
    ///
    /// Returns the binary-search probe trace of the reordering step.
    pub fn insert_occurrence(&mut self, term: &str, frequency: Counter<usize>) -> Vec<usize> {
        let index = self.data.unwrap().index;
        let occurrence = Occurrence::new(index, *frequency);
        self.writer.insert_occurrence(term, occurrence)
    }
}
