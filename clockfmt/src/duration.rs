//! Elapsed-time formatting.
//!
//! Durations are plain millisecond counts. They are rendered as `H+:MM:SS`: minutes and seconds
//! are always two digits, hours are at least two digits and grow as needed. Anything below a full
//! second is truncated.

use {
	crate::{zero_pad, Error, Result},
	serde::{Deserialize, Serialize},
	std::{fmt::Display, time::Duration},
};

const MILLIS_PER_HOUR: u64 = 60 * 60 * 1000;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// A duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationParts {
	pub hours: u64,
	pub minutes: u8,
	pub seconds: u8,
}

impl DurationParts {
	pub fn from_millis(millis: u64) -> Self {
		let total_seconds = millis / 1000;
		let seconds = total_seconds % 60;
		let total_minutes = (total_seconds - seconds) / 60;
		let minutes = total_minutes % 60;
		let hours = (total_minutes - minutes) / 60;

		Self { hours, minutes: minutes as u8, seconds: seconds as u8 }
	}

	/// `hours * 3600 + minutes * 60 + seconds`
	pub fn total_seconds(&self) -> u64 {
		self.hours
			.saturating_mul(3600)
			.saturating_add(self.minutes as u64 * 60 + self.seconds as u64)
	}

	pub fn as_millis(&self) -> u64 {
		self.total_seconds().saturating_mul(1000)
	}
}

impl Display for DurationParts {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}:{}:{}",
			zero_pad(self.hours),
			zero_pad(self.minutes as u64),
			zero_pad(self.seconds as u64)
		)
	}
}

impl From<Duration> for DurationParts {
	fn from(value: Duration) -> Self {
		Self::from_millis(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
	}
}

/// Turns an amount of milliseconds into a nicely formatted string:
///
/// ```
/// use clockfmt::format_duration;
///
/// assert_eq!(format_duration(3_725_000), "01:02:05");
/// assert_eq!(format_duration(999), "00:00:00");
/// ```
pub fn format_duration(millis: u64) -> String {
	DurationParts::from_millis(millis).to_string()
}

pub fn format_std_duration(duration: &Duration) -> String {
	DurationParts::from(*duration).to_string()
}

/// Signed variant of [`format_duration`]. Negative durations are an error.
pub fn try_format_duration(millis: i64) -> Result<String> {
	u64::try_from(millis)
		.map(format_duration)
		.map_err(|_| Error::Negative(millis))
}

/// Formats `millis` as a time of day, i.e. as an offset since midnight.
///
/// Unlike [`format_duration`] this wraps around after 24 hours, so the hour field is always
/// exactly two digits. A Qt `QTime` built from the same offset turns invalid at 24 hours and
/// prints as an empty string instead; use [`format_duration`] for anything that may get that long.
pub fn format_time_of_day(millis: u64) -> String {
	format_duration(millis % MILLIS_PER_DAY)
}

/// Parses a duration back into its parts.
///
/// Accepts everything [`format_duration`] produces (`H+:MM:SS`), the shorter `M:SS` / `MM:SS`
/// and a bare number of seconds:
///
/// ```
/// use clockfmt::parse_duration;
///
/// assert_eq!(parse_duration("01:02:05").unwrap().total_seconds(), 3725);
/// assert_eq!(parse_duration("5:30").unwrap().total_seconds(), 330);
/// assert_eq!(parse_duration("3725").unwrap().total_seconds(), 3725);
/// ```
pub fn parse_duration(input: &str) -> Result<DurationParts> {
	let fields = input.split(':').collect::<Vec<_>>();

	match fields.as_slice() {
		&[seconds] => {
			let seconds = parse_decimal(input, seconds, "seconds")?;
			if seconds > u64::MAX / 1000 {
				return Err(Error::parse(input, "seconds out of range"));
			}
			Ok(DurationParts::from_millis(seconds * 1000))
		}
		&[minutes, seconds] => {
			let minutes = match minutes.len() {
				1 => parse_sexagesimal(input, &format!("0{minutes}"), "minutes")?,
				_ => parse_sexagesimal(input, minutes, "minutes")?,
			};
			let seconds = parse_sexagesimal(input, seconds, "seconds")?;
			Ok(DurationParts { hours: 0, minutes, seconds })
		}
		&[hours, minutes, seconds] => {
			let hours = parse_decimal(input, hours, "hours")?;
			if hours > u64::MAX / MILLIS_PER_HOUR {
				return Err(Error::parse(input, "hours out of range"));
			}

			let minutes = parse_sexagesimal(input, minutes, "minutes")?;
			let seconds = parse_sexagesimal(input, seconds, "seconds")?;
			Ok(DurationParts { hours, minutes, seconds })
		}
		_ => Err(Error::parse(input, "expected `HH:MM:SS`, `MM:SS` or a number of seconds")),
	}
}

fn parse_decimal(input: &str, field: &str, name: &str) -> Result<u64> {
	if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
		return Err(Error::parse(input, format!("{name} must be a decimal number")));
	}

	field.parse::<u64>().map_err(|why| Error::parse(input, format!("{name}: {why}")))
}

/// Two digits, `00` to `59`.
fn parse_sexagesimal(input: &str, field: &str, name: &str) -> Result<u8> {
	match field.as_bytes() {
		&[tens @ b'0'..=b'5', ones @ b'0'..=b'9'] => Ok((tens - b'0') * 10 + (ones - b'0')),
		_ => Err(Error::parse(input, format!("{name} must be two digits between 00 and 59"))),
	}
}
