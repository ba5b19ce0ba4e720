//! Generic terminal stage.
//!
//! A [`Sink`] hands each value to a consume function and never forwards.
//! It always declares the flush capability, even with the default no-op
//! flush action, so the chain reaches it during the flush pass.

use super::{Downstream, Stage};

/// Flush action used by [`sink`].
pub type NoFlush = fn();

fn no_flush() {}

/// Consumes values through a callback and runs an action on flush.
pub struct Sink<F, G> {
    consume: F,
    on_flush: G,
}

impl<F, G> Sink<F, G> {
    /// Create a sink from a consume function and a flush action.
    pub fn new(consume: F, on_flush: G) -> Self {
        Self { consume, on_flush }
    }
}

impl<T, F, G> Stage<T> for Sink<F, G>
where
    F: FnMut(T),
    G: FnMut(),
{
    type Out = T;
    const FLUSHES: bool = true;
    const NAME: &'static str = "sink";

    fn process<D: Downstream<Self::Out>>(&mut self, value: T, _rest: &mut D) {
        (self.consume)(value);
    }

    fn flush<D: Downstream<Self::Out>>(&mut self, _rest: &mut D) {
        (self.on_flush)();
    }
}

/// Build a [`Sink`] whose flush does nothing.
pub fn sink<F>(consume: F) -> Sink<F, NoFlush> {
    Sink::new(consume, no_flush as NoFlush)
}

/// Build a [`Sink`] with an explicit flush action.
pub fn sink_with_flush<F, G>(consume: F, on_flush: G) -> Sink<F, G> {
    Sink::new(consume, on_flush)
}
