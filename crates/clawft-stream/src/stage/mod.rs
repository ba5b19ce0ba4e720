//! Stage primitives and the stage protocol.
//!
//! A [`Stage`] receives one value at a time together with the rest of the
//! chain behind it, and decides what, if anything, to forward. Stages that
//! buffer declare the flush capability through [`Stage::FLUSHES`]; the
//! chain calls [`Stage::flush`] on exactly those stages once the source is
//! exhausted.
//!
//! | Stage | Factory | Forwards | Flush |
//! |-------|---------|----------|-------|
//! | [`Map`] | [`map`](fn@map) | transformed value, immediately | no |
//! | [`Filter`] | [`filter`](fn@filter) | value when the predicate holds | no |
//! | [`Sort`] | [`sort`](fn@sort), [`sort_by`], [`sort_by_key`] | nothing until flush | yes |
//! | [`Sink`] | [`sink`](fn@sink), [`sink_with_flush`] | nothing | yes |
//! | [`Collector`] | [`to_vector`] | nothing | no |

pub mod collector;
pub mod filter;
pub mod map;
pub mod sink;
pub mod sort;

pub use collector::{Collector, to_vector};
pub use filter::{Filter, filter};
pub use map::{Map, map};
pub use sink::{Sink, sink, sink_with_flush};
pub use sort::{Sort, sort, sort_by, sort_by_key};

/// The receiving end of a chain, as seen from the stage in front of it.
pub trait Downstream<T> {
    /// Hand one value to the next stage.
    fn push(&mut self, value: T);
}

/// One unit of the processing chain.
pub trait Stage<In> {
    /// Type of the values this stage forwards.
    type Out;

    /// Whether this stage defines an end-of-stream flush.
    const FLUSHES: bool = false;

    /// Short label used in log output.
    const NAME: &'static str;

    /// Receive one value, optionally forwarding to `rest`.
    fn process<D: Downstream<Self::Out>>(&mut self, value: In, rest: &mut D);

    /// End-of-stream signal. Only called when [`FLUSHES`](Stage::FLUSHES)
    /// is `true`. The stage may push buffered output into `rest`.
    fn flush<D: Downstream<Self::Out>>(&mut self, rest: &mut D) {
        let _ = rest;
    }
}

/// A downstream that drops everything it receives.
///
/// Sits behind the last stage of every chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl<T> Downstream<T> for Discard {
    fn push(&mut self, _value: T) {}
}

/// A `Vec` collects whatever a stage forwards into it.
///
/// Lets a single stage be driven by hand, outside a chain, with its
/// output inspected afterwards.
impl<T> Downstream<T> for Vec<T> {
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }
}
