use {
	serde::{Deserialize, Serialize},
	tracing::trace,
};

/// Pattern requesting the two-digit hour.
pub const HOUR_PATTERN: &str = "hh";

/// Pattern requesting the two-digit minute.
pub const MINUTE_PATTERN: &str = "mm";

/// Something that knows how to render a point in time according to a display pattern.
///
/// This crate never looks inside [`TimeFormatter::Time`]; time zones, locales and clock
/// conventions are entirely up to the implementation. See [`crate::formatter`] for the
/// [`chrono`] based ones.
pub trait TimeFormatter {
	type Time;
	type Error;

	fn format(&self, time: &Self::Time, pattern: &str) -> Result<String, Self::Error>;
}

impl<F: TimeFormatter + ?Sized> TimeFormatter for &F {
	type Time = F::Time;
	type Error = F::Error;

	fn format(&self, time: &Self::Time, pattern: &str) -> Result<String, Self::Error> {
		(**self).format(time, pattern)
	}
}

/// Hour and minute of a point in time, as rendered by a [`TimeFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Components {
	pub hour: String,
	pub minute: String,
}

/// Asks `formatter` for the `hh` field of `time` and hands back whatever it produced.
pub fn get_hour_component<F>(formatter: &F, time: &F::Time) -> Result<String, F::Error>
where
	F: TimeFormatter + ?Sized,
{
	trace!(pattern = HOUR_PATTERN, "formatting hour");
	formatter.format(time, HOUR_PATTERN)
}

/// Asks `formatter` for the `mm` field of `time` and hands back whatever it produced.
pub fn get_minute_component<F>(formatter: &F, time: &F::Time) -> Result<String, F::Error>
where
	F: TimeFormatter + ?Sized,
{
	trace!(pattern = MINUTE_PATTERN, "formatting minute");
	formatter.format(time, MINUTE_PATTERN)
}

pub fn get_components<F>(formatter: &F, time: &F::Time) -> Result<Components, F::Error>
where
	F: TimeFormatter + ?Sized,
{
	Ok(Components {
		hour: get_hour_component(formatter, time)?,
		minute: get_minute_component(formatter, time)?,
	})
}
