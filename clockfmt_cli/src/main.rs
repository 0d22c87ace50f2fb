#![deny(clippy::perf, clippy::correctness)]
#![warn(
	clippy::style, missing_debug_implementations, rust_2018_idioms, rustdoc::broken_intra_doc_links
)]

mod config;
mod output;
mod time_arg;

use {
	clap::{Parser, Subcommand},
	clockfmt::{
		format_time_of_day, parse_duration, try_format_duration, zero_pad_signed, Error,
		TimestampFormatter,
	},
	color_eyre::Result,
	config::Config,
	output::Output,
	std::path::PathBuf,
	time_arg::TimeArg,
	tracing::{debug, Level},
	tracing_subscriber::{fmt::format::FmtSpan, EnvFilter},
};

/// Format durations and clock times for display.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
	#[command(subcommand)]
	command: Command,

	/// Custom config file to use instead of the defaults.
	#[arg(short, long = "config", global = true)]
	config_path: Option<PathBuf>,

	/// Print results as JSON.
	#[arg(long, global = true)]
	#[clap(default_value = "false")]
	json: bool,

	/// Print `DEBUG` level logs.
	#[arg(long, global = true)]
	#[clap(default_value = "false")]
	debug: bool,

	/// Emit logs as JSON lines instead of the compact format.
	#[arg(long, global = true)]
	#[clap(default_value = "false")]
	json_logs: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Pad a number to at least two digits.
	#[command(allow_negative_numbers = true)]
	Pad { number: i64 },

	/// Format a duration given in milliseconds as `HH:MM:SS`.
	#[command(allow_negative_numbers = true)]
	Duration {
		millis: i64,

		/// Treat the duration as a time of day and wrap around after 24 hours.
		#[arg(long)]
		clock: bool,
	},

	/// Parse an `HH:MM:SS` or `MM:SS` duration, or a plain number of seconds.
	Parse { duration: String },

	/// Print the hour of TIME (`HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]` or `@<unix millis>`).
	Hour { time: Option<TimeArg> },

	/// Print the minute of TIME.
	Minute { time: Option<TimeArg> },

	/// Print both hour and minute of TIME.
	Components { time: Option<TimeArg> },

	/// Format TIME with a display pattern such as `hh:mm:ss` or `h:mm AP`.
	Time {
		time: Option<TimeArg>,

		#[arg(short, long)]
		pattern: Option<String>,
	},
}

fn main() -> Result<()> {
	color_eyre::install()?;
	let args = Args::parse();

	let level = match args.debug {
		true => Level::DEBUG,
		false => Level::INFO,
	};

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_file(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW);

	match args.json_logs {
		true => subscriber.json().init(),
		false => subscriber.compact().init(),
	}

	let config = Config::load(args.config_path.as_deref())?;
	debug!(?config, "Loaded config");

	let output = run(args.command, &config)?;

	println!("{}", output.render(args.json)?);

	Ok(())
}

#[tracing::instrument(skip(config))]
fn run(command: Command, config: &Config) -> Result<Output> {
	let timestamps = TimestampFormatter::with_offset_minutes(config.utc_offset_minutes)?;
	debug!(offset = %timestamps.offset(), "Timestamp offset");

	let output = match command {
		Command::Pad { number } => Output::Text(zero_pad_signed(number)?),
		Command::Duration { millis, clock: false } => {
			let formatted = try_format_duration(millis)?;
			let parts = parse_duration(&formatted)?;
			Output::Duration { formatted, parts }
		}
		Command::Duration { millis, clock: true } => {
			let millis = u64::try_from(millis).map_err(|_| Error::Negative(millis))?;
			let formatted = format_time_of_day(millis);
			let parts = parse_duration(&formatted)?;
			Output::Duration { formatted, parts }
		}
		Command::Parse { duration } => {
			let parts = parse_duration(duration.trim())?;
			Output::Parsed { parts, total_seconds: parts.total_seconds(), millis: parts.as_millis() }
		}
		Command::Hour { time } => Output::Text(time.unwrap_or_else(TimeArg::now).hour(&timestamps)?),
		Command::Minute { time } => {
			Output::Text(time.unwrap_or_else(TimeArg::now).minute(&timestamps)?)
		}
		Command::Components { time } => {
			Output::Components(time.unwrap_or_else(TimeArg::now).components(&timestamps)?)
		}
		Command::Time { time, pattern } => {
			let pattern = pattern.as_deref().unwrap_or(&config.time_pattern);
			Output::Text(time.unwrap_or_else(TimeArg::now).format(pattern, &timestamps)?)
		}
	};

	Ok(output)
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		clap::CommandFactory,
		clockfmt::{Components, DurationParts},
	};

	fn run_args(args: &[&str]) -> Result<Output> {
		let args = Args::try_parse_from(std::iter::once("clockfmt").chain(args.iter().copied()))?;
		run(args.command, &Config::default())
	}

	#[test]
	fn cli_is_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn pad() -> Result<()> {
		assert_eq!(run_args(&["pad", "5"])?, Output::Text(String::from("05")));
		assert_eq!(run_args(&["pad", "100"])?, Output::Text(String::from("100")));
		assert!(run_args(&["pad", "-5"]).is_err());

		Ok(())
	}

	#[test]
	fn duration() -> Result<()> {
		assert_eq!(
			run_args(&["duration", "3725000"])?,
			Output::Duration {
				formatted: String::from("01:02:05"),
				parts: DurationParts { hours: 1, minutes: 2, seconds: 5 },
			}
		);
		assert_eq!(run_args(&["duration", "90000000"])?.to_string(), "25:00:00");
		assert_eq!(run_args(&["duration", "90000000", "--clock"])?.to_string(), "01:00:00");
		assert!(run_args(&["duration", "-1"]).is_err());
		assert!(run_args(&["duration", "-1", "--clock"]).is_err());

		Ok(())
	}

	#[test]
	fn parse() -> Result<()> {
		let Output::Parsed { total_seconds, millis, .. } = run_args(&["parse", "01:02:05"])? else {
			panic!("expected a parsed duration");
		};
		assert_eq!(total_seconds, 3725);
		assert_eq!(millis, 3_725_000);
		assert!(run_args(&["parse", "1:2:3"]).is_err());

		assert_eq!(run_args(&["parse", "5:30"])?.to_string(), "330 seconds (330000 ms)");
		assert_eq!(run_args(&["parse", "3725"])?.to_string(), "3725 seconds (3725000 ms)");

		Ok(())
	}

	#[test]
	fn components() -> Result<()> {
		assert_eq!(run_args(&["hour", "2023-03-14T13:05:09"])?.to_string(), "13");
		assert_eq!(run_args(&["minute", "@1678799109000"])?.to_string(), "05");
		assert_eq!(
			run_args(&["components", "07:30"])?,
			Output::Components(Components { hour: String::from("07"), minute: String::from("30") })
		);
		assert!(run_args(&["hour", "later"]).is_err());

		// no TIME means now, which always has two-digit fields
		assert_eq!(run_args(&["hour"])?.to_string().len(), 2);

		Ok(())
	}

	#[test]
	fn time_patterns() -> Result<()> {
		assert_eq!(run_args(&["time", "13:05:09"])?.to_string(), "13:05");
		assert_eq!(run_args(&["time", "13:05:09", "-p", "h:mm:ss AP"])?.to_string(), "1:05:09 PM");

		let config = Config { time_pattern: String::from("hh'h'mm"), utc_offset_minutes: -60 };
		let args = Args::try_parse_from(["clockfmt", "time", "@1678799109000"])?;
		assert_eq!(run(args.command, &config)?.to_string(), "12h05");

		Ok(())
	}

	#[test]
	fn invalid_offset_in_config() -> Result<()> {
		let config = Config { utc_offset_minutes: 100_000, ..Default::default() };
		let args = Args::try_parse_from(["clockfmt", "pad", "1"])?;
		assert!(run(args.command, &config).is_err());

		Ok(())
	}
}
