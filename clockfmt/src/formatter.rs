//! [`TimeFormatter`] implementations backed by [`chrono`].

use {
	crate::{pattern::Pattern, Error, Result, TimeFormatter},
	chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Timelike, Utc},
	std::fmt::{Display, Write},
	tracing::debug,
};

/// Millisecond part of `time`, folding a leap second back into `0..1000`.
fn millis_of(time: &impl Timelike) -> u32 {
	time.nanosecond() / 1_000_000 % 1000
}

/// Renders `value` with an already translated strftime string.
fn render(value: impl Display, pattern: &str) -> Result<String> {
	let mut formatted = String::new();
	write!(formatted, "{value}").map_err(|_| Error::Pattern {
		pattern: String::from(pattern),
		reason: String::from("not representable for this time"),
	})?;

	Ok(formatted)
}

/// Formats wall clock times without any time zone attached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChronoFormatter;

impl TimeFormatter for ChronoFormatter {
	type Time = NaiveDateTime;
	type Error = Error;

	#[tracing::instrument(level = "debug", skip(self))]
	fn format(&self, time: &NaiveDateTime, pattern: &str) -> Result<String> {
		let strftime = Pattern::parse(pattern)?.strftime(millis_of(time));
		render(time.format(&strftime), pattern)
	}
}

/// Formats Unix timestamps (milliseconds) in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormatter {
	offset: FixedOffset,
}

impl Default for TimestampFormatter {
	fn default() -> Self {
		Self::utc()
	}
}

impl TimestampFormatter {
	pub fn utc() -> Self {
		Self { offset: Utc.fix() }
	}

	/// `offset_minutes` east of UTC; has to stay within a day in either direction.
	pub fn with_offset_minutes(offset_minutes: i32) -> Result<Self> {
		let offset = offset_minutes
			.checked_mul(60)
			.and_then(FixedOffset::east_opt)
			.ok_or(Error::InvalidOffset(offset_minutes))?;

		Ok(Self { offset })
	}

	pub fn offset(&self) -> FixedOffset {
		self.offset
	}
}

impl TimeFormatter for TimestampFormatter {
	type Time = i64;
	type Error = Error;

	#[tracing::instrument(level = "debug", skip(self))]
	fn format(&self, millis: &i64, pattern: &str) -> Result<String> {
		let Some(time) = DateTime::from_timestamp_millis(*millis) else {
			debug!("timestamp out of range");
			return Err(Error::InvalidTime(*millis));
		};

		let time = time.with_timezone(&self.offset);
		let strftime = Pattern::parse(pattern)?.strftime(millis_of(&time));
		render(time.format(&strftime), pattern)
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		crate::{get_components, get_hour_component, get_minute_component, Components},
		chrono::NaiveDate,
		color_eyre::Result,
	};

	fn at(hour: u32, minute: u32, second: u32, millis: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2023, 3, 14)
			.and_then(|date| date.and_hms_milli_opt(hour, minute, second, millis))
			.expect("valid date")
	}

	#[test]
	fn hour_and_minute() -> Result<()> {
		let time = at(13, 5, 0, 0);

		assert_eq!(get_hour_component(&ChronoFormatter, &time)?, "13");
		assert_eq!(get_minute_component(&ChronoFormatter, &time)?, "05");

		let time = at(0, 0, 0, 0);

		assert_eq!(
			get_components(&ChronoFormatter, &time)?,
			Components { hour: String::from("00"), minute: String::from("00") }
		);

		Ok(())
	}

	#[test]
	fn arbitrary_patterns() -> Result<()> {
		let time = at(13, 5, 9, 42);

		assert_eq!(ChronoFormatter.format(&time, "hh:mm:ss.zzz")?, "13:05:09.042");
		assert_eq!(ChronoFormatter.format(&time, "h:mm AP")?, "1:05 PM");
		assert_eq!(ChronoFormatter.format(&time, "hh:mm ap")?, "01:05 pm");
		assert_eq!(ChronoFormatter.format(&time, "H:m:s")?, "13:5:9");
		assert_eq!(ChronoFormatter.format(&time, "'at' hh'h'")?, "at 13h");
		assert_eq!(ChronoFormatter.format(&time, "h:mm A")?, "1:05 PM");
		assert_eq!(ChronoFormatter.format(&time, "h:mm a")?, "1:05 pm");
		assert_eq!(ChronoFormatter.format(&time, "s.z")?, "9.42");

		Ok(())
	}

	#[test]
	fn dates() -> Result<()> {
		let time = at(13, 5, 9, 42);

		assert_eq!(ChronoFormatter.format(&time, "dd.MMM.yyyy")?, "14.Mar.2023");
		assert_eq!(
			ChronoFormatter.format(&time, "yyyy-MM-dd hh:mm:ss.zzz")?,
			"2023-03-14 13:05:09.042"
		);
		assert_eq!(ChronoFormatter.format(&time, "dddd, d MMMM yy")?, "Tuesday, 14 March 23");
		assert_eq!(ChronoFormatter.format(&time, "ddd M/d")?, "Tue 3/14");

		let stamp = 1_678_799_109_042;
		assert_eq!(TimestampFormatter::utc().format(&stamp, "dd.MMM.yyyy z")?, "14.Mar.2023 42");

		Ok(())
	}

	#[test]
	fn offset_is_kept() -> Result<()> {
		assert_eq!(TimestampFormatter::utc().offset(), Utc.fix());
		assert_eq!(
			Some(TimestampFormatter::with_offset_minutes(-90)?.offset()),
			FixedOffset::east_opt(-90 * 60)
		);

		Ok(())
	}

	#[test]
	fn malformed_pattern() {
		assert!(matches!(
			ChronoFormatter.format(&at(1, 2, 3, 0), "hh 'oops"),
			Err(Error::Pattern { .. })
		));
	}

	#[test]
	fn timestamps() -> Result<()> {
		// 2023-03-14T13:05:09Z
		let millis = 1_678_799_109_000;

		let utc = TimestampFormatter::utc();
		assert_eq!(utc.format(&millis, "hh:mm:ss")?, "13:05:09");
		assert_eq!(get_hour_component(&utc, &millis)?, "13");
		assert_eq!(get_minute_component(&utc, &millis)?, "05");

		let cest = TimestampFormatter::with_offset_minutes(120)?;
		assert_eq!(get_hour_component(&cest, &millis)?, "15");

		let behind = TimestampFormatter::with_offset_minutes(-14 * 60)?;
		assert_eq!(get_hour_component(&behind, &millis)?, "23");

		assert_eq!(get_hour_component(&utc, &0)?, "00");
		assert_eq!(utc.format(&-1, "hh:mm:ss.zzz")?, "23:59:59.999");

		Ok(())
	}

	#[test]
	fn invalid_timestamps() {
		let utc = TimestampFormatter::default();

		assert_eq!(get_hour_component(&utc, &i64::MAX), Err(Error::InvalidTime(i64::MAX)));
		assert_eq!(get_minute_component(&utc, &i64::MIN), Err(Error::InvalidTime(i64::MIN)));
	}

	#[test]
	fn invalid_offsets() {
		assert_eq!(
			TimestampFormatter::with_offset_minutes(24 * 60),
			Err(Error::InvalidOffset(24 * 60))
		);
		assert_eq!(
			TimestampFormatter::with_offset_minutes(i32::MAX),
			Err(Error::InvalidOffset(i32::MAX))
		);
		assert!(TimestampFormatter::with_offset_minutes(23 * 60 + 59).is_ok());
	}
}
