//! Stateless transform stage.

use super::{Downstream, Stage};

/// Applies a function to every value and forwards the result.
pub struct Map<F> {
    transform: F,
}

impl<F> Map<F> {
    /// Wrap `transform` as a stage.
    pub fn new(transform: F) -> Self {
        Self { transform }
    }
}

impl<In, Out, F> Stage<In> for Map<F>
where
    F: FnMut(In) -> Out,
{
    type Out = Out;
    const NAME: &'static str = "map";

    fn process<D: Downstream<Self::Out>>(&mut self, value: In, rest: &mut D) {
        rest.push((self.transform)(value));
    }
}

/// Build a [`Map`] stage.
pub fn map<F>(transform: F) -> Map<F> {
    Map::new(transform)
}
