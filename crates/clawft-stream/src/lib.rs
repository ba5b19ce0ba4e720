//! # clawft-stream
//!
//! Synchronous, composable stream pipeline.
//!
//! A run pulls values from a [`Source`] one at a time and pushes each
//! through a fixed chain of stages. Buffering stages such as [`Sort`]
//! hold everything until the end-of-stream flush, then emit through the
//! rest of the chain. The run hands the last stage back to the caller,
//! so a [`Collector`] at the end is the result.
//!
//! ```
//! use clawft_stream::{filter, map, sort_by, source, to_vector};
//!
//! let input = vec![6, 1, 5, 2, 4, 3];
//! let result = clawft_stream::stream!(
//!     source(&input),
//!     filter(|x: &i32| *x != 4),
//!     map(|x: i32| x * 10),
//!     sort_by(|a: &i32, b: &i32| b.cmp(a)),
//!     to_vector(),
//! );
//! assert_eq!(result.value(), &[60, 50, 30, 20, 10]);
//! ```
//!
//! Modules:
//! - [`source`](mod@source): pull-based sources (borrowed, transferring, owned, range)
//! - [`stage`]: the stage protocol and the built-in stages
//! - [`chain`](mod@chain): static chain composition and flush propagation
//! - [`driver`]: [`stream`](fn@stream) and the configured [`Pipeline`]
//! - [`config`] / [`error`]: run configuration and error types
//!
//! Everything runs on the calling thread. Stage callbacks are assumed
//! total; a panic inside one unwinds through the whole run.

pub mod chain;
pub mod config;
pub mod driver;
pub mod error;
pub mod source;
pub mod stage;

pub use chain::{Chain, Link, Tail};
pub use config::StreamConfig;
pub use driver::{Pipeline, RunReport, stream};
pub use error::{Result, StreamError};
pub use source::{RangeSource, Source, TransferSource, ViewSource, owned, range, source, transfer};
pub use stage::{
    Collector, Discard, Downstream, Filter, Map, Sink, Sort, Stage, filter, map, sink,
    sink_with_flush, sort, sort_by, sort_by_key, to_vector,
};
