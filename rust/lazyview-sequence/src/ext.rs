//! Extension traits connecting [`Sequence`] and [`Iterator`].
//!
//! - [`SequenceExt`] is implemented for every sequence and provides the
//!   adapters of this crate as methods, plus [`SequenceExt::items`] to read a
//!   sequence through the standard `Iterator` interface.
//! - [`IteratorExt`] is implemented for every iterator and turns it into a
//!   sequence.
//!
//! # Examples
//!
//! ```
//! use lazyview_sequence::{IteratorExt, SequenceExt};
//!
//! let labels: Vec<String> = (1..=5)
//!     .into_sequence()
//!     .adapt(|x| format!("#{x}"))
//!     .window(3, 10)
//!     .unwrap()
//!     .items()
//!     .collect();
//! assert_eq!(labels, vec!["#4", "#5"]);
//! ```

use lazyview_common::Result;

use crate::{
    adapting::AdaptingSequence, bounds::WindowBounds, iter_sequence::IterSequence,
    sequence::Sequence, windowed::WindowedSequence,
};

/// An [`Iterator`] over the remaining elements of a sequence.
///
/// Iteration ends at the first element the sequence cannot produce: a source
/// error ends it the same way exhaustion does. Use [`SequenceExt::try_items`]
/// to observe such errors.
///
/// This struct is created by [`SequenceExt::items`].
#[derive(Debug)]
pub struct SequenceItems<S> {
    inner: S,
}

impl<S> SequenceItems<S> {
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sequence> Iterator for SequenceItems<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inner.has_more() {
            return None;
        }
        self.inner.take_next().ok()
    }
}

/// An [`Iterator`] over the remaining elements of a sequence that reports
/// source errors as `Err` items.
///
/// After an `Err` item the iterator is finished.
///
/// This struct is created by [`SequenceExt::try_items`].
#[derive(Debug)]
pub struct TrySequenceItems<S> {
    inner: S,
    finished: bool,
}

impl<S: Sequence> Iterator for TrySequenceItems<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.inner.has_more() {
            let item = self.inner.take_next();
            self.finished = item.is_err();
            return Some(item);
        }
        self.finished = true;
        // `has_more` cannot carry an error; `take_next` tells exhaustion
        // apart from failure.
        match self.inner.take_next() {
            Err(e) if e.is_no_more_elements() => None,
            other => Some(other),
        }
    }
}

/// Adapter methods available on every [`Sequence`].
pub trait SequenceExt: Sequence + Sized {
    /// Lazily converts each element with `transform`.
    ///
    /// See [`AdaptingSequence`].
    fn adapt<F, O>(self, transform: F) -> AdaptingSequence<Self, F>
    where
        F: FnMut(Self::Item) -> O,
    {
        AdaptingSequence::new(self, transform)
    }

    /// Skips `first` elements and yields at most `count` after them.
    ///
    /// Fails with `InvalidArgument` if either value is negative.
    fn window(self, first: i64, count: i64) -> Result<WindowedSequence<Self>> {
        WindowedSequence::new(self, first, count)
    }

    /// Same as [`SequenceExt::window`], with the bounds taken from a
    /// [`WindowBounds`] value.
    fn window_bounds(self, bounds: WindowBounds) -> Result<WindowedSequence<Self>> {
        WindowedSequence::with_bounds(self, bounds)
    }

    /// Reads the remaining elements through the `Iterator` interface.
    fn items(self) -> SequenceItems<Self> {
        SequenceItems { inner: self }
    }

    /// Like [`SequenceExt::items`], but yields `Result`s so that a source
    /// error is returned instead of ending the iteration silently.
    fn try_items(self) -> TrySequenceItems<Self> {
        TrySequenceItems {
            inner: self,
            finished: false,
        }
    }
}

impl<S: Sequence> SequenceExt for S {}

/// Turns any iterator into a [`Sequence`].
pub trait IteratorExt: Iterator + Sized {
    fn into_sequence(self) -> IterSequence<Self> {
        IterSequence::new(self)
    }
}

impl<I: Iterator> IteratorExt for I {}
