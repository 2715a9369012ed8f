/// A two-keyword OR query.
///
/// Exactly two terms; case folding happens inside the ranker, and noise
/// words are not filtered out of queries.
#[derive(Debug)]
pub struct Query<'a> {
    first: &'a str,
    second: &'a str,
}

impl<'a> Query<'a> {
    #[inline]
    pub fn new(first: &'a str, second: &'a str) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn first(&self) -> &str {
        self.first
    }

    #[inline]
    pub fn second(&self) -> &str {
        self.second
    }
}
