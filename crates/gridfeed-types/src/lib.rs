//! Core types for the gridfeed transparency platform client.
//!
//! This crate provides the fundamental data structures used throughout
//! gridfeed:
//!
//! - [`TimeRange`] - A validated UTC time interval with hour-aligned bisection
//! - [`Granularity`] - Calendar unit used to partition a range into chunks
//! - [`Chunk`] - One contiguous sub-interval of a requested range
//! - [`GridfeedError`] - The shared error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gridfeed/gridfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chunk;
mod error;
mod time_range;

pub use chunk::{Chunk, Granularity, GranularityParseError};
pub use error::{ConfigError, GridfeedError, Result, TimeRangeError};
pub use time_range::TimeRange;
