//! Buffering sort stage.
//!
//! Accumulates every value it receives and forwards nothing until the
//! chain flushes it. On flush the buffer is sorted with the comparator and
//! drained, in order, into the rest of the chain. Any stage that needs
//! ordered input must sit behind a `Sort`.
//!
//! The default sort is unstable; call [`Sort::stable`] when equal elements
//! must keep their arrival order.

use std::cmp::Ordering;

use tracing::trace;

use super::{Downstream, Stage};

/// Comparator used by [`sort`]: ascending natural order.
pub type Ascending<T> = fn(&T, &T) -> Ordering;

/// Accumulate-then-emit stage ordered by a comparator.
pub struct Sort<T, C> {
    buffer: Vec<T>,
    compare: C,
    stable: bool,
}

impl<T, C> Sort<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    /// Create a sort stage with the given comparator.
    pub fn new(compare: C) -> Self {
        Self {
            buffer: Vec::new(),
            compare,
            stable: false,
        }
    }

    /// Keep equal elements in arrival order.
    pub fn stable(mut self) -> Self {
        self.stable = true;
        self
    }

    /// Pre-allocate room for `capacity` buffered elements.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.buffer.reserve(capacity);
        self
    }

    /// Number of values currently buffered.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl<T, C> Stage<T> for Sort<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    type Out = T;
    const FLUSHES: bool = true;
    const NAME: &'static str = "sort";

    fn process<D: Downstream<Self::Out>>(&mut self, value: T, _rest: &mut D) {
        self.buffer.push(value);
    }

    fn flush<D: Downstream<Self::Out>>(&mut self, rest: &mut D) {
        trace!(buffered = self.buffer.len(), stable = self.stable, "sort: emitting buffer");
        let compare = &mut self.compare;
        if self.stable {
            self.buffer.sort_by(|a, b| compare(a, b));
        } else {
            self.buffer.sort_unstable_by(|a, b| compare(a, b));
        }
        for value in self.buffer.drain(..) {
            rest.push(value);
        }
    }
}

/// Sort in ascending natural order.
pub fn sort<T: Ord>() -> Sort<T, Ascending<T>> {
    Sort::new(T::cmp as Ascending<T>)
}

/// Sort with a caller-supplied comparator.
pub fn sort_by<T, C>(compare: C) -> Sort<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    Sort::new(compare)
}

/// Sort by a key extracted from each element.
pub fn sort_by_key<T, K, F>(mut key: F) -> Sort<T, impl FnMut(&T, &T) -> Ordering>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    Sort::new(move |a: &T, b: &T| key(a).cmp(&key(b)))
}
