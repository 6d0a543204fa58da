use lazyview_common::{Result, error::Error};

use crate::sequence::Sequence;

/// A sequence over the elements of a borrowed `Vec`, supporting removal.
///
/// Elements are cloned out on `take_next`. `remove_current` removes the
/// element returned by the last `take_next` from the vector; it can be called
/// at most once per taken element.
#[derive(Debug)]
pub struct VecSequence<'a, T> {
    items: &'a mut Vec<T>,
    /// Index of the next element to return.
    position: usize,
    /// Index of the last returned element, if it is still removable.
    current: Option<usize>,
}

impl<'a, T> VecSequence<'a, T> {
    pub fn new(items: &'a mut Vec<T>) -> Self {
        VecSequence {
            items,
            position: 0,
            current: None,
        }
    }
}

impl<T: Clone> Sequence for VecSequence<'_, T> {
    type Item = T;

    #[inline]
    fn has_more(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn take_next(&mut self) -> Result<T> {
        let item = self
            .items
            .get(self.position)
            .cloned()
            .ok_or_else(Error::no_more_elements)?;
        self.current = Some(self.position);
        self.position += 1;
        Ok(item)
    }

    fn remove_current(&mut self) -> Result<()> {
        let index = self.current.take().ok_or_else(|| {
            Error::illegal_state("no current element: nothing taken yet, or already removed")
        })?;
        self.items.remove(index);
        self.position -= 1;
        Ok(())
    }
}
