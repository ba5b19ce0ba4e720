//! Pull-based sources feeding a stream run.
//!
//! A [`Source`] yields its elements one at a time, in order, until it is
//! exhausted. Four constructors cover the ownership modes:
//!
//! | Constructor | Element access | Origin after the run |
//! |-------------|----------------|----------------------|
//! | [`source`] | clones out of `&[T]` | unchanged |
//! | [`transfer`] | `mem::take` out of `&mut [T]` | same length, every slot `T::default()` |
//! | [`owned`] | moves out of a `Vec<T>` | consumed |
//! | [`range`] | any `IntoIterator` | whatever the iterator does |

use std::mem;

use crate::error::{Result, StreamError};

// ── Source trait ────────────────────────────────────────────────────────

/// A finite, ordered, pull-based sequence consumed by exactly one run.
pub trait Source {
    /// Element type produced by this source.
    type Item;

    /// Returns `true` once every element has been produced.
    fn is_empty(&self) -> bool;

    /// Produce the next element, or `None` when exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Number of elements still to be produced, when known.
    fn remaining(&self) -> Option<usize> {
        None
    }

    /// Produce the next element and advance by one.
    ///
    /// # Panics
    ///
    /// Panics if the source is already exhausted. Check
    /// [`is_empty`](Source::is_empty) first, or use
    /// [`try_next`](Source::try_next).
    fn next(&mut self) -> Self::Item {
        match self.pull() {
            Some(item) => item,
            None => panic!("{}", StreamError::SourceExhausted),
        }
    }

    /// Checked form of [`next`](Source::next).
    fn try_next(&mut self) -> Result<Self::Item> {
        self.pull().ok_or(StreamError::SourceExhausted)
    }
}

// ── Borrowed view ───────────────────────────────────────────────────────

/// Borrowed-mode source: clones each element, leaving the origin intact.
#[derive(Debug, Clone)]
pub struct ViewSource<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> ViewSource<'a, T> {
    /// Create a view over `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }
}

impl<T: Clone> Source for ViewSource<'_, T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.pos >= self.items.len()
    }

    fn pull(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.items.len() - self.pos)
    }
}

// ── Transfer ────────────────────────────────────────────────────────────

/// Transfer-mode source: moves each element out of its slot.
///
/// Visited slots are left holding `T::default()`; the container keeps
/// its length.
#[derive(Debug)]
pub struct TransferSource<'a, T> {
    slots: &'a mut [T],
    pos: usize,
}

impl<'a, T> TransferSource<'a, T> {
    /// Create a transferring source over `slots`.
    pub fn new(slots: &'a mut [T]) -> Self {
        Self { slots, pos: 0 }
    }
}

impl<T: Default> Source for TransferSource<'_, T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.pos >= self.slots.len()
    }

    fn pull(&mut self) -> Option<T> {
        let slot = self.slots.get_mut(self.pos)?;
        self.pos += 1;
        Some(mem::take(slot))
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.slots.len() - self.pos)
    }
}

// ── Iteration range ─────────────────────────────────────────────────────

/// Source over an arbitrary iterator.
///
/// Holds one element of lookahead so that [`Source::is_empty`] can answer
/// without mutating the iterator. The wrapped iterator therefore runs one
/// element ahead of the chain: the first element is taken at construction,
/// and element *k + 1* is produced (with any side effects) before element
/// *k* enters the chain. When a run stops early, for example on
/// [`StreamError::LimitExceeded`], the buffered element is dropped with
/// the source and is not returned to a `by_ref` iterator.
#[derive(Debug)]
pub struct RangeSource<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
}

impl<I: Iterator> RangeSource<I> {
    /// Create a source that drains `iter`.
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self { iter, head }
    }
}

impl<I: Iterator> Source for RangeSource<I> {
    type Item = I::Item;

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn pull(&mut self) -> Option<I::Item> {
        let item = self.head.take()?;
        self.head = self.iter.next();
        Some(item)
    }

    fn remaining(&self) -> Option<usize> {
        if self.head.is_none() {
            return Some(0);
        }
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => lower.checked_add(1),
            _ => None,
        }
    }
}

// ── Constructors ────────────────────────────────────────────────────────

/// Borrowed-mode source over an ordered container.
pub fn source<T: Clone>(items: &[T]) -> ViewSource<'_, T> {
    ViewSource::new(items)
}

/// Transfer-mode source: empties the caller's elements one by one as
/// they are consumed.
pub fn transfer<T: Default>(slots: &mut [T]) -> TransferSource<'_, T> {
    TransferSource::new(slots)
}

/// Source that takes ownership of a whole `Vec`.
///
/// Built on [`RangeSource`], so it reads one element ahead of the chain.
pub fn owned<T>(items: Vec<T>) -> RangeSource<std::vec::IntoIter<T>> {
    RangeSource::new(items.into_iter())
}

/// Source over an iteration range.
///
/// Reads one element ahead of the chain; see [`RangeSource`].
pub fn range<I: IntoIterator>(iter: I) -> RangeSource<I::IntoIter> {
    RangeSource::new(iter.into_iter())
}
