//! Lazy element-wise conversion of a sequence.

use lazyview_common::Result;

use crate::sequence::Sequence;

/// A sequence adapter that converts each element of the source sequence
/// into another type.
///
/// The transform is invoked exactly once per element, at the moment the
/// element is taken; `has_more` only queries the source. Removal is forwarded
/// to the source unchanged.
///
/// This struct is usually created by [`SequenceExt::adapt`](crate::SequenceExt::adapt).
pub struct AdaptingSequence<S, F> {
    source: S,
    transform: F,
}

impl<S, F> AdaptingSequence<S, F> {
    pub fn new(source: S, transform: F) -> Self {
        AdaptingSequence { source, transform }
    }

    /// Creates an adapter over an optional source. An absent source is
    /// treated as an empty sequence.
    pub fn from_optional(source: Option<S>, transform: F) -> AdaptingSequence<Option<S>, F> {
        AdaptingSequence::new(source, transform)
    }

    pub fn get_ref(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for AdaptingSequence<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptingSequence")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S, F, O> Sequence for AdaptingSequence<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> O,
{
    type Item = O;

    #[inline]
    fn has_more(&mut self) -> bool {
        self.source.has_more()
    }

    #[inline]
    fn take_next(&mut self) -> Result<O> {
        let item = self.source.take_next()?;
        Ok((self.transform)(item))
    }

    #[inline]
    fn remove_current(&mut self) -> Result<()> {
        self.source.remove_current()
    }
}
