//! Response classification.

/// Marker the platform embeds when a valid query has nothing to return.
pub const NO_DATA_MARKER: &str = "No matching data found";

/// Marker the platform embeds when a query would return more items than
/// one call allows.
pub const PAGINATION_MARKER: &str = "amount of requested data exceeds allowed limit";

/// Classified outcome of one raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success; carries the raw body for the record parser.
    Success(String),
    /// The query is valid but legitimately has nothing to return. Not an
    /// error and never retried.
    NoData,
    /// The requested range holds more items than one call allows; carries
    /// the item count the server reported.
    PaginationExceeded(u64),
    /// Any other non-success response. Fatal, never retried.
    Protocol {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

/// Classifies a raw response by status and body.
///
/// Non-success bodies carry the reason inside a `<text>` element; that
/// text (or the whole body when no such element is present) is scanned
/// for the platform's error markers. The requested item count of a
/// pagination error is the second-to-last whitespace token of the error
/// text; when it does not parse as an integer the response falls back to
/// [`Outcome::Protocol`].
///
/// Pure inspection; no side effects.
#[must_use]
pub fn classify(status: u16, body: &str) -> Outcome {
    if (200..300).contains(&status) {
        return Outcome::Success(body.to_string());
    }

    let text = error_text(body);
    if text.contains(NO_DATA_MARKER) {
        return Outcome::NoData;
    }
    if text.contains(PAGINATION_MARKER) {
        if let Some(requested) = requested_count(text) {
            return Outcome::PaginationExceeded(requested);
        }
    }

    Outcome::Protocol {
        status,
        body: body.to_string(),
    }
}

/// Extracts the error text from a response body.
///
/// Returns the contents of the first `<text>` element, or the whole body
/// when the payload is not in the expected markup.
fn error_text(body: &str) -> &str {
    if let Some(open) = body.find("<text>") {
        let inner = &body[open + "<text>".len()..];
        if let Some(close) = inner.find("</text>") {
            return &inner[..close];
        }
    }
    body
}

/// Reads the requested item count: the second-to-last whitespace token of
/// the error text.
fn requested_count(text: &str) -> Option<u64> {
    let mut tokens = text.split_whitespace().rev();
    tokens.next()?;
    tokens.next()?.parse().ok()
}
