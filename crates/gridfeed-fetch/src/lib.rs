//! HTTP transport and request orchestration for gridfeed.
//!
//! This crate provides the query pipeline:
//!
//! - [`period::period_str`] - Serializes instants to the wire format
//! - [`classify`] - Classifies raw responses into outcomes
//! - [`RetryPolicy`] - Bounded retry of transient transport failures
//! - [`fetch_adaptive`] - Range bisection on result-size overflow
//! - [`Orchestrator`] - Top-level chunked query execution

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gridfeed/gridfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classify;
mod client;
mod orchestrate;
mod paginate;
pub mod period;
mod retry;

pub use classify::{NO_DATA_MARKER, PAGINATION_MARKER, Outcome, classify};
pub use client::{
    ClientConfig, DEFAULT_BASE_URL, HttpReply, HttpTransport, QueryParams, Transport,
    TransportError,
};
pub use orchestrate::Orchestrator;
pub use paginate::{RecordParser, fetch_adaptive};
pub use retry::RetryPolicy;
