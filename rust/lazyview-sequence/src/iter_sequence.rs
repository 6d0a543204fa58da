//! A [`Sequence`] view over a standard [`Iterator`].
//!
//! `IterSequence<I>` answers `has_more` by pulling one item from the wrapped
//! iterator and holding it until the next call to `take_next`.

use std::iter::Fuse;

use lazyview_common::{Result, error::Error};

use crate::sequence::Sequence;

/// Sequence adapter over an iterator, with a single-item lookahead.
///
/// Removal is not supported: an iterator has no storage to remove from.
pub struct IterSequence<I: Iterator> {
    /// The underlying iterator being wrapped.
    iter: Fuse<I>,
    /// An item pulled by `has_more()` that has not been taken yet.
    peeked: Option<I::Item>,
}

impl<I: Iterator> IterSequence<I> {
    /// Creates a new `IterSequence` around the given iterator.
    pub fn new(iter: I) -> Self {
        IterSequence {
            iter: iter.fuse(),
            peeked: None,
        }
    }

    /// Returns a reference to the next item without taking it.
    pub fn peek(&mut self) -> Option<&I::Item> {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked.as_ref()
    }
}

impl<I> std::fmt::Debug for IterSequence<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterSequence")
            .field("iter", &self.iter)
            .field("peeked", &self.peeked)
            .finish()
    }
}

impl<I: Iterator> Sequence for IterSequence<I> {
    type Item = I::Item;

    #[inline]
    fn has_more(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Returns the buffered item if present; otherwise pulls from the
    /// underlying iterator.
    #[inline]
    fn take_next(&mut self) -> Result<Self::Item> {
        self.peeked
            .take()
            .or_else(|| self.iter.next())
            .ok_or_else(Error::no_more_elements)
    }
}
