//! The `Sequence` capability shared by sources and adapters.

use lazyview_common::{Result, error::Error};

/// A forward-only, pull-based producer of elements.
///
/// Unlike [`Iterator`], the question "is there another element?" is separated
/// from taking it, and a sequence may optionally support removing the element
/// it produced last. Both sources and the adapters in this crate implement
/// this trait, so they nest arbitrarily.
///
/// A sequence is single-pass: once `has_more` returned `false`, the sequence
/// is expected to stay exhausted.
pub trait Sequence {
    /// The type of the elements produced.
    type Item;

    /// Returns `true` if at least one more element can be taken.
    ///
    /// Calling this repeatedly without an intervening [`Sequence::take_next`]
    /// must not advance the sequence past the next element.
    fn has_more(&mut self) -> bool;

    /// Takes the next element.
    ///
    /// Fails with [`ErrorKind::NoMoreElements`](lazyview_common::error::ErrorKind::NoMoreElements)
    /// when the sequence is exhausted.
    fn take_next(&mut self) -> Result<Self::Item>;

    /// Removes the element most recently returned by [`Sequence::take_next`]
    /// from the underlying storage.
    ///
    /// Removal is an optional capability. The default implementation fails
    /// with `UnsupportedOperation`; implementations that support it fail with
    /// `IllegalState` when no element is currently removable.
    fn remove_current(&mut self) -> Result<()> {
        Err(Error::unsupported_operation("remove_current"))
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    #[inline]
    fn take_next(&mut self) -> Result<Self::Item> {
        (**self).take_next()
    }

    #[inline]
    fn remove_current(&mut self) -> Result<()> {
        (**self).remove_current()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    #[inline]
    fn take_next(&mut self) -> Result<Self::Item> {
        (**self).take_next()
    }

    #[inline]
    fn remove_current(&mut self) -> Result<()> {
        (**self).remove_current()
    }
}

/// An absent source behaves as an empty sequence.
impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.as_mut().is_some_and(|s| s.has_more())
    }

    fn take_next(&mut self) -> Result<Self::Item> {
        match self {
            Some(s) => s.take_next(),
            None => Err(Error::no_more_elements()),
        }
    }

    fn remove_current(&mut self) -> Result<()> {
        match self {
            Some(s) => s.remove_current(),
            None => Err(Error::illegal_state("no element has been taken")),
        }
    }
}
