use {
	chrono::{Local, NaiveDateTime, NaiveTime},
	clockfmt::{
		get_components, get_hour_component, get_minute_component, ChronoFormatter, Components,
		Error, Result, TimeFormatter, TimestampFormatter,
	},
	std::str::FromStr,
};

const DATE_TIME_FORMATS: [&str; 4] =
	["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// A point in time given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeArg {
	/// Local wall clock time.
	Wall(NaiveDateTime),
	/// Unix timestamp in milliseconds (`@<millis>`).
	Timestamp(i64),
}

impl TimeArg {
	pub fn now() -> Self {
		Self::Wall(Local::now().naive_local())
	}

	pub fn hour(&self, timestamps: &TimestampFormatter) -> Result<String> {
		match self {
			Self::Wall(time) => get_hour_component(&ChronoFormatter, time),
			Self::Timestamp(millis) => get_hour_component(timestamps, millis),
		}
	}

	pub fn minute(&self, timestamps: &TimestampFormatter) -> Result<String> {
		match self {
			Self::Wall(time) => get_minute_component(&ChronoFormatter, time),
			Self::Timestamp(millis) => get_minute_component(timestamps, millis),
		}
	}

	pub fn components(&self, timestamps: &TimestampFormatter) -> Result<Components> {
		match self {
			Self::Wall(time) => get_components(&ChronoFormatter, time),
			Self::Timestamp(millis) => get_components(timestamps, millis),
		}
	}

	pub fn format(&self, pattern: &str, timestamps: &TimestampFormatter) -> Result<String> {
		match self {
			Self::Wall(time) => ChronoFormatter.format(time, pattern),
			Self::Timestamp(millis) => timestamps.format(millis, pattern),
		}
	}
}

impl FromStr for TimeArg {
	type Err = Error;

	fn from_str(input: &str) -> Result<Self> {
		let input = input.trim();
		let parse_error = |reason: String| Error::Parse { input: String::from(input), reason };

		if let Some(millis) = input.strip_prefix('@') {
			return millis
				.parse::<i64>()
				.map(Self::Timestamp)
				.map_err(|why| parse_error(why.to_string()));
		}

		if let Some(time) = DATE_TIME_FORMATS
			.iter()
			.find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
		{
			return Ok(Self::Wall(time));
		}

		if let Some(time) = TIME_FORMATS
			.iter()
			.find_map(|format| NaiveTime::parse_from_str(input, format).ok())
		{
			let today = Local::now().date_naive();
			return Ok(Self::Wall(today.and_time(time)));
		}

		Err(parse_error(String::from(
			"expected `HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]` or `@<unix millis>`",
		)))
	}
}
