//! Pipeline driver: pull loop, flush pass, result extraction.
//!
//! [`stream`](fn@stream) is the plain entry point. [`Pipeline`] wraps the same loop
//! with a validated [`StreamConfig`], adding a run label for tracing and
//! an optional element limit.

use tracing::{debug, debug_span, warn};

use crate::chain::Chain;
use crate::config::StreamConfig;
use crate::error::{Result, StreamError};
use crate::source::Source;

/// Drain `source` through `chain`, flush, and return the last stage.
///
/// Every element is pushed into the first stage in source order. Once the
/// source is exhausted the chain is flushed exactly once and the terminal
/// stage is handed back by value.
pub fn stream<S, C>(mut source: S, mut chain: C) -> C::Terminal
where
    S: Source,
    C: Chain<S::Item>,
{
    let span = debug_span!("stream", name = "stream", stages = C::LEN);
    let _enter = span.enter();

    let mut pulled = 0usize;
    while !source.is_empty() {
        chain.push(source.next());
        pulled += 1;
    }
    debug!(pulled, "source exhausted, flushing chain");
    chain.flush();
    chain.into_terminal()
}

/// Drain a source through stages listed inline.
///
/// `stream!(src, a, b, c)` is `stream(src, chain!(a, b, c))`.
#[macro_export]
macro_rules! stream {
    ($source:expr, $($stage:expr),+ $(,)?) => {
        $crate::stream($source, $crate::chain!($($stage),+))
    };
}

// ── Configured driver ───────────────────────────────────────────────────

/// Counters gathered during one configured run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Elements pulled from the source and pushed into the chain.
    pub pulled: usize,
}

/// A reusable driver carrying a validated [`StreamConfig`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: StreamConfig,
}

impl Pipeline {
    /// Create a driver, rejecting invalid configuration.
    pub fn new(config: StreamConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this driver applies.
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Run like [`stream`](fn@stream), enforcing the configured element limit.
    pub fn run<S, C>(&self, source: S, chain: C) -> Result<C::Terminal>
    where
        S: Source,
        C: Chain<S::Item>,
    {
        self.run_with_report(source, chain).map(|(terminal, _)| terminal)
    }

    /// Run and also return the [`RunReport`].
    ///
    /// When the source holds more than `max_elements` elements the run
    /// stops before pushing the extra element, the chain is not flushed,
    /// and [`StreamError::LimitExceeded`] is returned.
    pub fn run_with_report<S, C>(&self, mut source: S, mut chain: C) -> Result<(C::Terminal, RunReport)>
    where
        S: Source,
        C: Chain<S::Item>,
    {
        let span = debug_span!("stream", name = %self.config.name, stages = C::LEN);
        let _enter = span.enter();

        if let Some(remaining) = source.remaining() {
            debug!(remaining, "starting run");
        }

        let mut report = RunReport::default();
        while !source.is_empty() {
            if let Some(limit) = self.config.max_elements
                && report.pulled >= limit
            {
                warn!(limit, "element limit exceeded, aborting run");
                return Err(StreamError::LimitExceeded { limit });
            }
            chain.push(source.next());
            report.pulled += 1;
        }
        debug!(pulled = report.pulled, "source exhausted, flushing chain");
        chain.flush();
        Ok((chain.into_terminal(), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{range, source};
    use crate::stage::{map, sink, to_vector};

    #[test]
    fn stream_returns_terminal_stage() {
        let input = vec![6, 1, 5, 2, 4, 3];
        let result = stream(source(&input), crate::chain!(to_vector()));
        assert_eq!(result.value(), input.as_slice());
    }

    #[test]
    fn stream_macro_builds_chain() {
        let result = crate::stream!(range(1..=3), map(|x: i32| x * 10), to_vector());
        assert_eq!(result.into_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn pipeline_rejects_invalid_config() {
        let err = Pipeline::new(StreamConfig::named("")).unwrap_err();
        assert!(matches!(err, StreamError::ConfigInvalid { .. }));
    }

    #[test]
    fn pipeline_reports_pulled_count() {
        let pipeline = Pipeline::new(StreamConfig::named("count")).unwrap();
        let (result, report) = pipeline
            .run_with_report(range(0..5), crate::chain!(to_vector()))
            .unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(report, RunReport { pulled: 5 });
    }

    #[test]
    fn pipeline_allows_source_at_limit() {
        let pipeline = Pipeline::new(StreamConfig::named("edge").with_max_elements(3)).unwrap();
        let result = pipeline.run(range(0..3), crate::chain!(to_vector())).unwrap();
        assert_eq!(result.value(), &[0, 1, 2]);
    }

    #[test]
    fn pipeline_stops_before_element_past_limit() {
        let pipeline = Pipeline::new(StreamConfig::named("bounded").with_max_elements(2)).unwrap();
        let mut seen = Vec::new();
        let Err(err) = pipeline.run(range(0..10), crate::chain!(sink(|x: i32| seen.push(x)))) else {
            panic!("run past the limit should fail");
        };
        assert!(matches!(err, StreamError::LimitExceeded { limit: 2 }));
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn limit_stops_source_with_size_hint_at_usize_max() {
        let pipeline = Pipeline::new(StreamConfig::named("guard").with_max_elements(3)).unwrap();
        let Err(err) = pipeline.run(range(0..=usize::MAX), crate::chain!(to_vector())) else {
            panic!("run over an oversized range should hit the limit");
        };
        assert!(matches!(err, StreamError::LimitExceeded { limit: 3 }));
    }

    #[test]
    fn default_pipeline_is_unbounded() {
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.config().max_elements, None);
        let result = pipeline.run(range(0..1000), crate::chain!(to_vector())).unwrap();
        assert_eq!(result.len(), 1000);
    }
}
