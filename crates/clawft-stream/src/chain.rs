//! Statically composed stage chains and flush propagation.
//!
//! A chain is a nested list built once per run: [`Link`] pairs a stage
//! with the chain behind it and [`Tail`] holds the last stage. Values
//! enter through [`Downstream::push`] and travel by call-stack recursion,
//! so stage *i* can only ever reach stages *i+1..n*.
//!
//! # Flush propagation
//!
//! [`Chain::flush`] runs the two-phase pass over `[s1, .., sn]`:
//!
//! ```text
//! flush(s1..sn):
//!     if s1 flushes: s1.flush(s2..sn)   // s1 may push buffered output here
//!     flush(s2..sn)
//! ```
//!
//! A buffering stage therefore drains into the rest of the chain before
//! the rest gets its own flush, and every flushing stage is flushed
//! exactly once, in chain order. Stage flushes only receive
//! [`Downstream`], so they cannot trigger a flush further down.

use tracing::trace;

use crate::stage::{Discard, Downstream, Stage};

/// A complete, runnable sequence of stages accepting values of type `T`.
pub trait Chain<T>: Downstream<T> {
    /// The last stage, handed back to the caller after the run.
    type Terminal;

    /// Number of stages in the chain.
    const LEN: usize;

    /// Run flush propagation over the whole chain.
    fn flush(&mut self);

    /// Give up the chain and keep only its last stage.
    fn into_terminal(self) -> Self::Terminal;
}

// ── Link ────────────────────────────────────────────────────────────────

/// A stage followed by the rest of the chain.
pub struct Link<S, R> {
    stage: S,
    rest: R,
}

impl<S, R> Link<S, R> {
    /// Put `stage` in front of `rest`.
    pub fn new(stage: S, rest: R) -> Self {
        Self { stage, rest }
    }
}

impl<T, S, R> Downstream<T> for Link<S, R>
where
    S: Stage<T>,
    R: Chain<S::Out>,
{
    fn push(&mut self, value: T) {
        self.stage.process(value, &mut self.rest);
    }
}

impl<T, S, R> Chain<T> for Link<S, R>
where
    S: Stage<T>,
    R: Chain<S::Out>,
{
    type Terminal = R::Terminal;
    const LEN: usize = 1 + R::LEN;

    fn flush(&mut self) {
        if S::FLUSHES {
            trace!(stage = S::NAME, "flushing stage");
            self.stage.flush(&mut self.rest);
        }
        self.rest.flush();
    }

    fn into_terminal(self) -> R::Terminal {
        self.rest.into_terminal()
    }
}

// ── Tail ────────────────────────────────────────────────────────────────

/// The last stage of a chain. Anything it forwards is discarded.
pub struct Tail<S> {
    stage: S,
}

impl<S> Tail<S> {
    /// Make `stage` the end of a chain.
    pub fn new(stage: S) -> Self {
        Self { stage }
    }
}

impl<T, S> Downstream<T> for Tail<S>
where
    S: Stage<T>,
{
    fn push(&mut self, value: T) {
        self.stage.process(value, &mut Discard);
    }
}

impl<T, S> Chain<T> for Tail<S>
where
    S: Stage<T>,
{
    type Terminal = S;
    const LEN: usize = 1;

    fn flush(&mut self) {
        if S::FLUSHES {
            trace!(stage = S::NAME, "flushing stage");
            self.stage.flush(&mut Discard);
        }
    }

    fn into_terminal(self) -> S {
        self.stage
    }
}

/// Compose stages into a [`Chain`], first stage first.
///
/// `chain!(a, b, c)` expands to `Link::new(a, Link::new(b, Tail::new(c)))`.
#[macro_export]
macro_rules! chain {
    ($last:expr $(,)?) => {
        $crate::Tail::new($last)
    };
    ($head:expr, $($rest:expr),+ $(,)?) => {
        $crate::Link::new($head, $crate::chain!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::stage::{Collector, filter, map, sink_with_flush, sort, to_vector};

    #[test]
    fn push_travels_through_every_stage() {
        let mut chain = chain!(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0), to_vector());
        for x in 0..6 {
            chain.push(x);
        }
        Chain::<i32>::flush(&mut chain);
        let result: Collector<i32> = Chain::<i32>::into_terminal(chain);
        assert_eq!(result.value(), &[2, 4, 6]);
    }

    #[test]
    fn len_counts_stages() {
        type Three = Link<Collector<u8>, Link<Collector<u8>, Tail<Collector<u8>>>>;
        assert_eq!(<Three as Chain<u8>>::LEN, 3);
        assert_eq!(<Tail<Collector<u8>> as Chain<u8>>::LEN, 1);
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let chain = chain!(to_vector::<u8>(),);
        assert!(Chain::<u8>::into_terminal(chain).is_empty());
    }

    #[test]
    fn sort_output_reaches_downstream_before_its_flush() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let values = Rc::clone(&log);
        let flushes = Rc::clone(&log);
        let mut chain = chain!(
            sort(),
            sink_with_flush(
                move |x: i32| values.borrow_mut().push(format!("value {x}")),
                move || flushes.borrow_mut().push("flush".to_string()),
            ),
        );
        for x in [3, 1, 2] {
            chain.push(x);
        }
        assert!(log.borrow().is_empty());
        Chain::<i32>::flush(&mut chain);
        assert_eq!(*log.borrow(), vec!["value 1", "value 2", "value 3", "flush"]);
    }

    #[test]
    fn stages_without_flush_are_skipped_transparently() {
        let flushed = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&flushed);
        let mut chain = chain!(
            map(|x: u8| x),
            filter(|_: &u8| true),
            map(|x: u8| x),
            sink_with_flush(|_: u8| {}, move || *counter.borrow_mut() += 1),
        );
        Chain::<u8>::flush(&mut chain);
        assert_eq!(*flushed.borrow(), 1);
    }
}
