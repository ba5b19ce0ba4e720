//! Stateless predicate gate.

use super::{Downstream, Stage};

/// Forwards a value unchanged when the predicate holds, drops it otherwise.
pub struct Filter<P> {
    predicate: P,
}

impl<P> Filter<P> {
    /// Wrap `predicate` as a stage.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<T, P> Stage<T> for Filter<P>
where
    P: FnMut(&T) -> bool,
{
    type Out = T;
    const NAME: &'static str = "filter";

    fn process<D: Downstream<Self::Out>>(&mut self, value: T, rest: &mut D) {
        if (self.predicate)(&value) {
            rest.push(value);
        }
    }
}

/// Build a [`Filter`] stage.
pub fn filter<P>(predicate: P) -> Filter<P> {
    Filter::new(predicate)
}
