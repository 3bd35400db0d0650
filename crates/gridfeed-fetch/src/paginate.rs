//! Adaptive bisection of ranges that overflow the result-size limit.

use gridfeed_types::{GridfeedError, TimeRange};
use log::debug;

use crate::classify::Outcome;

/// Converts a successful response body into an ordered sequence of
/// records.
///
/// The core treats the payload format as opaque; parsers for the various
/// document types live outside this crate.
pub trait RecordParser {
    /// The parsed record type.
    type Record;

    /// Parses one response body.
    ///
    /// # Errors
    ///
    /// Returns [`GridfeedError::Parse`] when the body is not in the
    /// expected format.
    fn parse(&self, body: &str) -> Result<Vec<Self::Record>, GridfeedError>;
}

/// Fetches one range, bisecting on result-size overflow.
///
/// `fetch_one` performs one classified request for an arbitrary
/// sub-range. On [`Outcome::PaginationExceeded`] the range is split at
/// its hour-aligned midpoint and both halves are fetched recursively,
/// left before right, so concatenation keeps records in chronological
/// order with no gaps or overlaps beyond shared boundary instants.
///
/// # Errors
///
/// - [`GridfeedError::PaginationLimit`] when the limit is still exceeded
///   on a range that can no longer shrink.
/// - [`GridfeedError::Protocol`] for any other non-success response,
///   carrying the offending sub-range.
/// - Whatever `fetch_one` or the parser surface.
pub fn fetch_adaptive<F, P>(
    range: TimeRange,
    fetch_one: &mut F,
    parser: &P,
) -> Result<Vec<P::Record>, GridfeedError>
where
    F: FnMut(TimeRange) -> Result<Outcome, GridfeedError>,
    P: RecordParser,
{
    match fetch_one(range)? {
        Outcome::Success(body) => parser.parse(&body),
        Outcome::NoData => Ok(Vec::new()),
        Outcome::PaginationExceeded(requested) => match range.bisect() {
            Some((left, right)) => {
                debug!("{requested} items reported for {range}; bisecting");
                let mut records = fetch_adaptive(left, fetch_one, parser)?;
                records.extend(fetch_adaptive(right, fetch_one, parser)?);
                Ok(records)
            }
            None => Err(GridfeedError::PaginationLimit { range, requested }),
        },
        Outcome::Protocol { status, body } => Err(GridfeedError::Protocol {
            status,
            range,
            body,
        }),
    }
}
