//! Top-level chunked query execution.

use gridfeed_types::{Granularity, GridfeedError, TimeRange};
use log::debug;

use crate::classify::{Outcome, classify};
use crate::client::{QueryParams, Transport};
use crate::paginate::{RecordParser, fetch_adaptive};
use crate::retry::RetryPolicy;

/// Runs complete range queries against the platform.
///
/// The orchestrator owns the injected transport session and the record
/// parser, and composes the whole pipeline per chunk: split the full
/// range on calendar boundaries, send each chunk through the retrying
/// transport, classify the reply, and let the adaptive paginator bisect
/// chunks that overflow the result-size limit. Chunks run strictly
/// sequentially in ascending time order, so the concatenated output
/// covers the full range in chronological order.
#[derive(Debug)]
pub struct Orchestrator<T, P> {
    transport: T,
    parser: P,
    retry: RetryPolicy,
}

impl<T, P> Orchestrator<T, P>
where
    T: Transport,
    P: RecordParser,
{
    /// Creates a new orchestrator around an existing transport session.
    ///
    /// The retry policy is validated at construction, so `run` never
    /// fails on configuration.
    #[must_use]
    pub const fn new(transport: T, parser: P, retry: RetryPolicy) -> Self {
        Self {
            transport,
            parser,
            retry,
        }
    }

    /// Returns the retry policy in effect.
    #[must_use]
    pub const fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Queries the full range at the given granularity and returns all
    /// records in chronological order.
    ///
    /// Every chunk contributes either records or an explicit no-data
    /// outcome, never a silent omission, so the output's time coverage
    /// equals `range`.
    ///
    /// # Errors
    ///
    /// Surfaces transport exhaustion, protocol errors, unsplittable
    /// pagination overflows, and parser failures; see [`GridfeedError`].
    pub fn run(
        &self,
        params: &QueryParams,
        range: TimeRange,
        granularity: Granularity,
    ) -> Result<Vec<P::Record>, GridfeedError> {
        let chunks = granularity.split(range);
        debug!(
            "querying {range} as {} chunk(s) at {granularity} granularity",
            chunks.len()
        );

        let mut records = Vec::new();
        for chunk in chunks {
            let mut fetch_one = |r: TimeRange| -> Result<Outcome, GridfeedError> {
                let reply = self.retry.run(r, |r| self.transport.execute(params, r))?;
                Ok(classify(reply.status, &reply.body))
            };
            records.extend(fetch_adaptive(chunk.range, &mut fetch_one, &self.parser)?);
        }
        Ok(records)
    }
}
