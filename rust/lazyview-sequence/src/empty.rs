use std::marker::PhantomData;

use lazyview_common::{Result, error::Error};

use crate::sequence::Sequence;

/// A sequence that never produces an element.
pub struct EmptySequence<T>(PhantomData<fn() -> T>);

impl<T> EmptySequence<T> {
    pub fn new() -> Self {
        EmptySequence(PhantomData)
    }
}

impl<T> Default for EmptySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EmptySequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EmptySequence")
    }
}

impl<T> Sequence for EmptySequence<T> {
    type Item = T;

    #[inline]
    fn has_more(&mut self) -> bool {
        false
    }

    fn take_next(&mut self) -> Result<T> {
        Err(Error::no_more_elements())
    }

    fn remove_current(&mut self) -> Result<()> {
        Err(Error::illegal_state("no element has been taken"))
    }
}
