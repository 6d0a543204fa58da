
use lazyview_common::{Result, error::Error};

use crate::Sequence;

/// Source that counts how often it is queried and taken from.
pub(crate) struct CountingSource<I: Iterator> {
    inner: crate::IterSequence<I>,
    pub has_more_calls: usize,
    pub taken: usize,
}

impl<I: Iterator> CountingSource<I> {
    pub fn new(iter: I) -> Self {
        CountingSource {
            inner: crate::IterSequence::new(iter),
            has_more_calls: 0,
            taken: 0,
        }
    }
}

impl<I: Iterator> std::fmt::Debug for CountingSource<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountingSource")
            .field("has_more_calls", &self.has_more_calls)
            .field("taken", &self.taken)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> Sequence for CountingSource<I> {
    type Item = I::Item;

    fn has_more(&mut self) -> bool {
        self.has_more_calls += 1;
        self.inner.has_more()
    }

    fn take_next(&mut self) -> Result<I::Item> {
        let item = self.inner.take_next()?;
        self.taken += 1;
        Ok(item)
    }
}

/// Source that claims to have more elements but fails on the `fail_at`-th take.
#[derive(Debug)]
pub(crate) struct Faulty {
    pub taken: usize,
    pub fail_at: usize,
}

impl Sequence for Faulty {
    type Item = usize;

    fn has_more(&mut self) -> bool {
        true
    }

    fn take_next(&mut self) -> Result<usize> {
        if self.taken == self.fail_at {
            return Err(Error::illegal_state("source failed"));
        }
        self.taken += 1;
        Ok(self.taken - 1)
    }
}
