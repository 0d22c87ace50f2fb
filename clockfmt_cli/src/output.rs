use {
	clockfmt::{Components, DurationParts},
	serde::Serialize,
	std::fmt::Display,
};

/// Result of a single command, printed either as plain text or as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
	Text(String),
	Duration { formatted: String, parts: DurationParts },
	Parsed { parts: DurationParts, total_seconds: u64, millis: u64 },
	Components(Components),
}

impl Display for Output {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Duration { formatted, .. } => f.write_str(formatted),
			Self::Parsed { total_seconds, millis, .. } => {
				f.write_fmt(format_args!("{total_seconds} seconds ({millis} ms)"))
			}
			Self::Components(Components { hour, minute }) => {
				f.write_fmt(format_args!("hour: {hour}\nminute: {minute}"))
			}
		}
	}
}

impl Output {
	pub fn render(&self, json: bool) -> serde_json::Result<String> {
		match json {
			true => serde_json::to_string(self),
			false => Ok(self.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use {super::*, color_eyre::Result};

	#[test]
	fn plain() -> Result<()> {
		assert_eq!(Output::Text(String::from("07")).render(false)?, "07");

		let components = Output::Components(Components {
			hour: String::from("13"),
			minute: String::from("05"),
		});
		assert_eq!(components.render(false)?, "hour: 13\nminute: 05");

		let parsed = Output::Parsed {
			parts: DurationParts::from_millis(61_000),
			total_seconds: 61,
			millis: 61_000,
		};
		assert_eq!(parsed.render(false)?, "61 seconds (61000 ms)");

		Ok(())
	}

	#[test]
	fn json() -> Result<()> {
		assert_eq!(Output::Text(String::from("07")).render(true)?, r#""07""#);

		let duration = Output::Duration {
			formatted: String::from("01:02:05"),
			parts: DurationParts::from_millis(3_725_000),
		};
		assert_eq!(
			duration.render(true)?,
			r#"{"formatted":"01:02:05","parts":{"hours":1,"minutes":2,"seconds":5}}"#
		);

		let components = Output::Components(Components {
			hour: String::from("13"),
			minute: String::from("05"),
		});
		assert_eq!(components.render(true)?, r#"{"hour":"13","minute":"05"}"#);

		Ok(())
	}
}
