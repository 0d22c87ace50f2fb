use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// A signed input was below zero.
	Negative(i64),
	Parse { input: String, reason: String },
	Pattern { pattern: String, reason: String },
	/// Unix timestamp (milliseconds) outside of the representable range.
	InvalidTime(i64),
	/// UTC offset (minutes) outside of `-24h..24h`.
	InvalidOffset(i32),
}

impl std::error::Error for Error {}

impl Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Negative(n) => f.write_fmt(format_args!("Expected a non-negative value, got {n}.")),
			Self::Parse { input, reason } => {
				f.write_fmt(format_args!("Failed to parse `{input}`: {reason}"))
			}
			Self::Pattern { pattern, reason } => {
				f.write_fmt(format_args!("Invalid pattern `{pattern}`: {reason}"))
			}
			Self::InvalidTime(millis) => {
				f.write_fmt(format_args!("`{millis}` is not a valid timestamp."))
			}
			Self::InvalidOffset(minutes) => {
				f.write_fmt(format_args!("`{minutes}` minutes is not a valid UTC offset."))
			}
		}
	}
}

impl Error {
	pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
		Self::Parse { input: String::from(input), reason: reason.into() }
	}
}
