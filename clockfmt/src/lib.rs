//! Small formatting helpers for showing times in a user interface.
//!
//! - [`zero_pad`] pads numbers to two digits,
//! - [`format_duration`] renders elapsed milliseconds as `HH:MM:SS`,
//! - [`get_hour_component`] and [`get_minute_component`] pull the hour / minute out of a point
//!   in time through an injected [`TimeFormatter`].

#![deny(clippy::perf, clippy::correctness)]
#![warn(
	clippy::style, missing_debug_implementations, rust_2018_idioms, rustdoc::broken_intra_doc_links
)]

mod components;
mod duration;
mod error;
pub mod formatter;
mod pad;
pub mod pattern;

pub use {
	components::{
		get_components, get_hour_component, get_minute_component, Components, TimeFormatter,
		HOUR_PATTERN, MINUTE_PATTERN,
	},
	duration::{
		format_duration, format_std_duration, format_time_of_day, parse_duration,
		try_format_duration, DurationParts,
	},
	error::{Error, Result},
	formatter::{ChronoFormatter, TimestampFormatter},
	pad::{zero_pad, zero_pad_signed},
};
