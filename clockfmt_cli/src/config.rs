use {
	color_eyre::{eyre::bail as yeet, Result},
	serde::{Deserialize, Serialize},
	std::path::Path,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Pattern used by `time` when no `--pattern` is given.
	pub time_pattern: String,
	/// Offset applied to `@<millis>` timestamps, in minutes east of UTC.
	pub utc_offset_minutes: i32,
}

impl Default for Config {
	fn default() -> Self {
		Self { time_pattern: String::from("hh:mm"), utc_offset_minutes: 0 }
	}
}

impl Config {
	/// Reads the config file at `path`, falling back to the defaults if there is none.
	#[tracing::instrument]
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let Some(path) = path else {
			return Ok(Self::default());
		};

		let config_file = match std::fs::read_to_string(path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				yeet!("Config file ({}) does not exist!", path.display());
			}
			Err(err) => {
				yeet!("Error opening config file: {err:?}");
			}
		};

		Ok(toml::from_str(&config_file)?)
	}
}
