//! Limit-aware client core for transparency platform time-series APIs.
//!
//! This is a facade crate that re-exports functionality from the gridfeed
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use gridfeed_lib::prelude::*;
//! use chrono::{TimeZone, Utc};
//! use std::time::Duration;
//!
//! struct BodyParser;
//!
//! impl RecordParser for BodyParser {
//!     type Record = String;
//!     fn parse(&self, body: &str) -> Result<Vec<String>> {
//!         Ok(vec![body.to_string()])
//!     }
//! }
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::with_defaults()?;
//!     let retry = RetryPolicy::new(3, Duration::from_secs(5))?;
//!     let orchestrator = Orchestrator::new(transport, BodyParser, retry);
//!
//!     let mut params = QueryParams::new();
//!     params.insert("securityToken".to_string(), "...".to_string());
//!     params.insert("documentType".to_string(), "A44".to_string());
//!
//!     let range = TimeRange::new(
//!         Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap(),
//!     )?;
//!     let bodies = orchestrator.run(&params, range, Granularity::Year)?;
//!     println!("fetched {} documents", bodies.len());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gridfeed/gridfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use gridfeed_types::*;

// Re-export the fetch pipeline
#[cfg(feature = "fetch")]
pub use gridfeed_fetch::{
    ClientConfig, HttpReply, HttpTransport, Orchestrator, Outcome, QueryParams, RecordParser,
    RetryPolicy, Transport, TransportError, classify, fetch_adaptive, period,
};

/// Prelude module for convenient imports.
///
/// ```
/// use gridfeed_lib::prelude::*;
/// ```
pub mod prelude {
    pub use gridfeed_types::{
        Chunk, ConfigError, Granularity, GridfeedError, Result, TimeRange, TimeRangeError,
    };

    #[cfg(feature = "fetch")]
    pub use gridfeed_fetch::{
        ClientConfig, HttpTransport, Orchestrator, QueryParams, RecordParser, RetryPolicy,
        Transport,
    };
}
