//! A bounded sub-range view over a sequence.
//!
//! [`WindowedSequence`] skips the first `first` elements of its source and
//! then yields at most `count` elements. It keeps a single lookahead element
//! so that `has_more` can give a definite answer without the caller taking
//! anything:
//!
//! - While skipping, source elements are taken and dropped. Skipping is
//!   destructive for sources that cannot be restarted.
//! - Inside the window, `has_more` moves one source element into the
//!   lookahead buffer; `take_next` hands it out. Repeated `has_more` calls
//!   reuse the buffered element.
//! - Once `count` elements were produced, or the source ran dry, the window
//!   is done and the source is not queried again.
//! - A source error ends the window. If it surfaced inside `has_more`, which
//!   can only answer `false`, the next `take_next` returns it.
//!
//! ```
//! use lazyview_sequence::{IteratorExt, SequenceExt};
//!
//! let items: Vec<u32> = [10, 20, 30, 40, 50]
//!     .into_iter()
//!     .into_sequence()
//!     .window(1, 2)
//!     .unwrap()
//!     .items()
//!     .collect();
//! assert_eq!(items, vec![20, 30]);
//! ```

use lazyview_common::{Result, error::Error, verify};
use log::{debug, trace};

use crate::{bounds::WindowBounds, sequence::Sequence};

/// Logical state of a [`WindowedSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Fewer than `first` source elements have been consumed.
    Skipping,
    /// Inside the window; more elements may follow.
    Active,
    /// `count` elements were produced, or the source is exhausted.
    Done,
}

/// Sequence adapter exposing the window `[first, first + count)` of its
/// source's positions.
pub struct WindowedSequence<S: Sequence> {
    source: S,
    first: u64,
    count: u64,
    /// Number of source elements consumed so far, including skipped ones and
    /// the buffered lookahead.
    cursor_index: u64,
    /// Element fetched by `has_more()` and not yet returned.
    pending: Option<S::Item>,
    done: bool,
    /// Source error hit by `has_more()`, handed out by the next `take_next()`.
    failed: Option<Error>,
    /// Set right after `take_next()`, while the source's current element is
    /// the one that was just returned.
    removable: bool,
}

impl<S: Sequence> WindowedSequence<S> {
    /// Creates a window over `source`.
    ///
    /// Fails with `InvalidArgument` if `first` or `count` is negative. No
    /// source element is consumed during construction.
    pub fn new(source: S, first: i64, count: i64) -> Result<Self> {
        Self::with_bounds(source, WindowBounds::new(first, count))
    }

    pub fn with_bounds(source: S, bounds: WindowBounds) -> Result<Self> {
        let (first, count) = bounds.validate()?;
        Ok(WindowedSequence {
            source,
            first,
            count,
            cursor_index: 0,
            pending: None,
            done: false,
            failed: None,
            removable: false,
        })
    }

    /// Creates a window over an optional source, failing with
    /// `InvalidArgument` if the source is absent.
    pub fn from_optional(source: Option<S>, first: i64, count: i64) -> Result<Self> {
        let bounds = WindowBounds::new(first, count);
        bounds.validate()?;
        let source = verify::not_null(source, "source")?;
        Self::with_bounds(source, bounds)
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of source elements consumed so far.
    pub fn cursor_index(&self) -> u64 {
        self.cursor_index
    }

    /// Whether an element fetched from the source is waiting to be taken.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> WindowState {
        if self.pending.is_some() {
            WindowState::Active
        } else if self.done {
            WindowState::Done
        } else if self.cursor_index < self.first {
            // Skipping happens even for an empty window.
            WindowState::Skipping
        } else if self.produced() >= self.count {
            WindowState::Done
        } else {
            WindowState::Active
        }
    }

    /// Upper bound on the number of elements this window can still yield.
    pub fn remaining_bound(&self) -> u64 {
        if self.done {
            return 0;
        }
        let buffered = u64::from(self.pending.is_some());
        self.count - self.produced() + buffered
    }

    /// Elements moved out of the window so far, the buffered one included.
    #[inline]
    fn produced(&self) -> u64 {
        self.cursor_index.saturating_sub(self.first)
    }

    fn finish(&mut self) {
        if !self.done {
            trace!(
                "window [{}, +{}) done after consuming {} source elements",
                self.first, self.count, self.cursor_index
            );
        }
        self.pending = None;
        self.done = true;
    }

    /// Makes sure the lookahead buffer holds the next window element, if any.
    ///
    /// Returns `Ok(false)` once the window is done. Errors from the source
    /// end the window and are passed on.
    fn fill(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        if self.done {
            return Ok(false);
        }

        if self.cursor_index < self.first {
            while self.cursor_index < self.first {
                if !self.source.has_more() {
                    self.finish();
                    return Ok(false);
                }
                if let Err(e) = self.source.take_next() {
                    self.finish();
                    return Err(e);
                }
                self.cursor_index += 1;
            }
            trace!("window skipped {} source elements", self.first);
        }

        if self.produced() < self.count && self.source.has_more() {
            match self.source.take_next() {
                Ok(item) => {
                    self.pending = Some(item);
                    self.removable = false;
                    self.cursor_index += 1;
                    return Ok(true);
                }
                Err(e) => {
                    self.finish();
                    return Err(e);
                }
            }
        }

        self.finish();
        Ok(false)
    }
}

impl<S: Sequence> Sequence for WindowedSequence<S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        match self.fill() {
            Ok(more) => more,
            Err(e) => {
                debug!("window source failed: {e}");
                self.failed = Some(e);
                false
            }
        }
    }

    /// Returns the next window element.
    ///
    /// A source error seen by an earlier `has_more` call is returned first;
    /// after that the window reports `NoMoreElements`.
    fn take_next(&mut self) -> Result<S::Item> {
        if let Some(e) = self.failed.take() {
            return Err(e);
        }
        self.fill()?;
        match self.pending.take() {
            Some(item) => {
                self.removable = true;
                Ok(item)
            }
            None => Err(Error::no_more_elements()),
        }
    }

    /// Removes the most recently yielded element from the source.
    ///
    /// Only valid directly after `take_next`: once `has_more` has buffered
    /// the following element, the source's current element is no longer the
    /// yielded one and this fails with `IllegalState`.
    fn remove_current(&mut self) -> Result<()> {
        if !self.removable {
            return Err(Error::illegal_state(
                "no removable element: nothing yielded since the last lookahead or removal",
            ));
        }
        self.source.remove_current()?;
        self.removable = false;
        Ok(())
    }
}

impl<S> std::fmt::Debug for WindowedSequence<S>
where
    S: Sequence + std::fmt::Debug,
    S::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowedSequence")
            .field("source", &self.source)
            .field("first", &self.first)
            .field("count", &self.count)
            .field("cursor_index", &self.cursor_index)
            .field("pending", &self.pending)
            .field("failed", &self.failed)
            .field("state", &self.state())
            .finish()
    }
}
