//! Lazy, bounded views over pull-based sequences.
//!
//! This crate provides the [`Sequence`] trait, a forward-only producer with a
//! separate "has more?" query and optional removal, along with adapters that
//! compose over it without materializing the source:
//!
//! - **Adapting**: [`AdaptingSequence`] converts each element lazily.
//! - **Windowing**: [`WindowedSequence`] exposes the sub-range
//!   `[first, first + count)` of the source's positions.
//! - **Sources**: [`IterSequence`] (any `Iterator`), [`VecSequence`] (a
//!   borrowed `Vec`, with removal) and [`EmptySequence`].
//!
//! # Key Types
//!
//! - [`SequenceExt`] - Extension trait providing the adapters as methods
//! - [`IteratorExt`] - Turns iterators into sequences
//! - [`WindowBounds`] - Serializable window parameters

pub mod adapting;
pub mod bounds;
pub mod empty;
pub mod ext;
pub mod iter_sequence;
pub mod sequence;
pub mod vec_sequence;
pub mod windowed;

#[cfg(test)]
mod tests;

pub use adapting::AdaptingSequence;
pub use bounds::WindowBounds;
pub use empty::EmptySequence;
pub use ext::{IteratorExt, SequenceExt, SequenceItems, TrySequenceItems};
pub use iter_sequence::IterSequence;
pub use sequence::Sequence;
pub use vec_sequence::VecSequence;
pub use windowed::{WindowState, WindowedSequence};
