use std::fmt::Debug;

use crate::{core::Occurrences, reader::ReaderContext};

/// Upper bound on the number of ranked documents a query returns.
pub const RESULT_LIMIT: usize = 5;

pub trait Ranker<'a, R: Clone + Debug> {
    fn new(reader: &'a ReaderContext<'a, R>) -> Self;
    fn top(&self, first: &str, second: &str) -> Vec<R>;
}

/// Two-keyword OR ranking over the posting lists.
///
/// Both lists are already in non-increasing frequency order, so the union
/// is the classic merge step over two descending sequences: each round
/// emits the head with the larger frequency, the first keyword's head
/// winning ties. Documents already emitted are skipped, and the walk stops
/// at [`RESULT_LIMIT`] distinct documents.
pub struct UnionRanker<'a, R: Clone + Debug> {
    reader: &'a ReaderContext<'a, R>,
}

impl<'a, R: Clone + Debug> Ranker<'a, R> for UnionRanker<'a, R> {
    fn new(reader: &'a ReaderContext<'a, R>) -> Self {
        Self { reader }
    }

    fn top(&self, first: &str, second: &str) -> Vec<R> {
        // Query terms are folded the way indexed tokens were; noise words
        // are not filtered here, an ignored term simply matches nothing.
        let first = first.to_ascii_lowercase();
        let second = second.to_ascii_lowercase();

        let ranked = merge_top(
            self.reader.get_entry(&first),
            self.reader.get_entry(&second),
        );

        ranked
            .into_iter()
            .filter_map(|index| self.reader.get_resource(index))
            .collect()
    }
}

/// Merge walk over two descending posting lists, by document index.
///
/// A missing keyword contributes an empty list. Result order is the rank
/// order: frequencies non-increasing, first-keyword documents ahead on
/// ties.
fn merge_top(primary: Option<&Occurrences>, secondary: Option<&Occurrences>) -> Vec<usize> {
    let mut ranked: Vec<usize> = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);

    while ranked.len() < RESULT_LIMIT {
        let head_first = primary.and_then(|occurrences| occurrences.get(i));
        let head_second = secondary.and_then(|occurrences| occurrences.get(j));

        let index = match (head_first, head_second) {
            (Some(first), Some(second)) => {
                if first.get_frequency() >= second.get_frequency() {
                    i += 1;
                    first.get_index()
                } else {
                    j += 1;
                    second.get_index()
                }
            }
            (Some(first), None) => {
                i += 1;
                first.get_index()
            }
            (None, Some(second)) => {
                j += 1;
                second.get_index()
            }
            (None, None) => break,
        };

        if !ranked.contains(&index) {
            ranked.push(index);
        }
    }

    ranked
}
