//! Terminal accumulator.

use std::ops::Index;

use super::{Downstream, Stage};

/// Appends every value it receives, preserving arrival order.
///
/// Usually the last stage of a chain, in which case the run returns it
/// and its contents are the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collector<T> {
    values: Vec<T>,
}

impl<T> Collector<T> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty collector with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// All collected values, in arrival order.
    pub fn value(&self) -> &[T] {
        &self.values
    }

    /// The value at `index`, if collected.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Number of collected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over collected values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Take ownership of the collected values.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Collector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<'a, T> IntoIterator for &'a Collector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> IntoIterator for Collector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T> Stage<T> for Collector<T> {
    type Out = T;
    const NAME: &'static str = "collector";

    fn process<D: Downstream<Self::Out>>(&mut self, value: T, _rest: &mut D) {
        self.values.push(value);
    }
}

/// Build an empty [`Collector`].
pub fn to_vector<T>() -> Collector<T> {
    Collector::new()
}
