extern crate num_traits;

use std::ops::{AddAssign, Deref};

use num_traits::Unsigned;

/// Frequency counter.
///
/// Counts only go up: occurrences accumulate while a document is scanned
/// and are never revoked afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn inner_ref(&self) -> &T {
        &self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.increment_by(T::one());
    }

    #[inline]
    fn increment_by(&mut self, count: T) {
        self.0 += count;
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AddAssign for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;

    #[test]
    fn test_counter_increment() {
        let mut counter = Counter::new(1usize);
        counter.increment();
        counter.increment();
        assert_eq!(*counter, 3);
    }

    #[test]
    fn test_counter_ordering() {
        assert!(Counter::new(3usize) > Counter::new(2usize));
        assert_eq!(Counter::new(2usize), Counter::new(2usize));
    }
}
