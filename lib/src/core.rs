extern crate hashbrown;

use std::cmp::Ordering;

use hashbrown::hash_map::{EntryRef, HashMap};

use crate::util::Counter;

/// One keyword hit: which document (by store index) and how often.
///
/// The frequency is accumulated by the per-document counter and fixed by
/// the time the occurrence reaches a posting list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Occurrence {
    /// Index of the document in the [`Store`].
    index: usize,

    /// Frequency of the keyword in that document.
    frequency: Counter<usize>,
}

impl Occurrence {
    pub fn new(index: usize, frequency: usize) -> Self {
        Self {
            index,
            frequency: Counter::new(frequency),
        }
    }

    #[inline]
    pub fn get_index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn get_frequency(&self) -> Counter<usize> {
        self.frequency
    }
}

/// Posting list for one keyword, kept in non-increasing frequency order.
///
/// Invariant: for all adjacent pairs (i, i+1), frequency[i] >= frequency[i+1],
/// and each document index appears at most once (a document is merged once).
#[derive(Debug, Default, PartialEq)]
pub struct Occurrences {
    inner: Vec<Occurrence>,
}

impl Occurrences {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Occurrence> {
        self.inner.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.inner.iter()
    }

    #[inline]
    pub fn push(&mut self, occurrence: Occurrence) {
        self.inner.push(occurrence)
    }

    /// Moves the just-appended last element to its ordered position.
    ///
    /// The first n-1 elements are already in non-increasing frequency
    /// order. The insertion index is found with a binary search over them
    /// (inclusive bounds, midpoint `(low + high) / 2`): a midpoint larger
    /// than the key sends the search right, smaller sends it left, equal
    /// ends it at that midpoint. On exhaustion the index is the final low
    /// bound, the leftmost position that keeps the invariant.
    ///
    /// Returns the sequence of probed midpoints, in order. The trace is
    /// consumed by tests only; it is empty when no search ran.
    pub fn insert_last(&mut self) -> Vec<usize> {
        let mut probes = Vec::new();
        let n = self.inner.len();
        if n <= 1 {
            return probes;
        }

        let key = self.inner[n - 1].get_frequency();
        let mut low = 0;
        let mut high = n - 2;

        let target = loop {
            let mid = (low + high) / 2;
            probes.push(mid);

            match self.inner[mid].get_frequency().cmp(&key) {
                Ordering::Equal => break mid,
                Ordering::Greater => {
                    if mid + 1 > high {
                        break mid + 1;
                    }
                    low = mid + 1;
                }
                Ordering::Less => {
                    if mid == low {
                        break low;
                    }
                    high = mid - 1;
                }
            }
        };

        let last = self.inner.remove(n - 1);
        self.inner.insert(target, last);

        probes
    }
}

impl From<Vec<Occurrence>> for Occurrences {
    fn from(value: Vec<Occurrence>) -> Self {
        Self { inner: value }
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The master index: keyword to ordered posting list.
#[derive(Debug)]
pub struct InvertedIndex {
    inner: HashMap<String, Occurrences>,
}

impl InvertedIndex {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Number of distinct keywords.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Merges one occurrence into the keyword's posting list.
    ///
    /// A keyword seen for the first time gets a fresh single-element list;
    /// otherwise the occurrence is appended and moved into place by
    /// [`Occurrences::insert_last`]. Returns that search's probe trace.
    pub fn add_occurrence(&mut self, term: &str, occurrence: Occurrence) -> Vec<usize> {
        match self.inner.entry_ref(term) {
            EntryRef::Occupied(entry) => {
                let occurrences = entry.into_mut();
                occurrences.push(occurrence);
                occurrences.insert_last()
            }
            EntryRef::Vacant(entry) => {
                entry.insert(Occurrences::from(vec![occurrence]));
                Vec::new()
            }
        }
    }

    /// Returns an immutable reference to the posting list for a keyword.
    #[inline]
    pub fn get_term_entries(&self, term: &str) -> Option<&Occurrences> {
        self.inner.get(term)
    }

    /// Applies `f` to the keyword's posting list, if present.
    #[inline]
    pub fn get_entry_with<O>(&self, term: &str, f: impl FnOnce(&Occurrences) -> O) -> Option<O> {
        self.get_term_entries(term).map(f)
    }
}

/// Append-only store of document identifiers.
///
/// Occurrences refer to documents by their insertion index in this store;
/// every document is registered exactly once, in manifest order.
#[derive(Debug)]
pub struct Store<R: Clone + std::fmt::Debug> {
    inner: Vec<R>,
}

impl<R: Clone + std::fmt::Debug> Store<R> {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn insert(&mut self, resource: R) -> usize {
        self.inner.push(resource);
        self.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&R> {
        self.inner.get(index)
    }
}

/// Keyword frequencies within a single document.
#[derive(Debug, Default)]
pub struct TermCounter {
    inner: HashMap<String, Counter<usize>>,
}

impl TermCounter {
    pub fn new() -> Self {
        Self {
            inner: Default::default(),
        }
    }

    pub fn insert(&mut self, key: String) {
        self.inner
            .raw_entry_mut()
            .from_key(&key)
            .and_modify(|_, counter| counter.increment())
            .or_insert_with(|| (key, Counter::new(1)));
    }

    pub fn get(&self, key: &str) -> Option<&Counter<usize>> {
        self.inner.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl IntoIterator for TermCounter {
    type Item = (String, Counter<usize>);
    type IntoIter = hashbrown::hash_map::IntoIter<String, Counter<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
