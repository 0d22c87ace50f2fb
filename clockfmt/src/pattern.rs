//! Clock display patterns.
//!
//! The front end describes how to show a time with short letter patterns such as `hh:mm`,
//! `h:mm AP` or `dd.MMM.yyyy`. [`Pattern::parse`] reads those once, [`Pattern::strftime`] turns
//! them into [`chrono`] strftime strings.
//!
//! | Token                 | Output                                                        |
//! |-----------------------|---------------------------------------------------------------|
//! | `hh` / `h`            | hour, padded / unpadded (12-hour clock if an am/pm marker occurs) |
//! | `HH` / `H`            | hour on a 24-hour clock, padded / unpadded                     |
//! | `mm` / `m`            | minute, padded / unpadded                                      |
//! | `ss` / `s`            | second, padded / unpadded                                      |
//! | `zzz` / `z`           | milliseconds, 3 digits / unpadded                              |
//! | `AP` / `A`            | `AM` / `PM`                                                    |
//! | `ap` / `a`            | `am` / `pm`                                                    |
//! | `dd` / `d`            | day of the month, padded / unpadded                            |
//! | `dddd` / `ddd`        | weekday name, long / short (`Tuesday` / `Tue`)                  |
//! | `MM` / `M`            | month number, padded / unpadded                                |
//! | `MMMM` / `MMM`        | month name, long / short (`March` / `Mar`)                     |
//! | `yyyy` / `yy`         | year, four / two digits                                        |
//! | `'text'`              | `text` verbatim, `''` is a single quote                       |
//!
//! Every other character is copied as is.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
	Hour { padded: bool },
	Hour24 { padded: bool },
	Minute { padded: bool },
	Second { padded: bool },
	Millis { padded: bool },
	AmPm { upper: bool },
	Day { padded: bool },
	Weekday { long: bool },
	Month { padded: bool },
	MonthName { long: bool },
	Year { long: bool },
	Literal(char),
}

/// A parsed display pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
	tokens: Vec<Token>,
}

impl Pattern {
	pub fn parse(pattern: &str) -> Result<Self> {
		let chars = pattern.chars().collect::<Vec<_>>();
		let mut tokens = Vec::with_capacity(chars.len());
		let mut i = 0;

		// Length of the run of `c` starting at `i`, capped at `max`.
		let run = |i: usize, c: char, max: usize| {
			chars[i..].iter().take(max).take_while(|&&next| next == c).count()
		};

		while i < chars.len() {
			let (token, len) = match chars[i] {
				'\'' => {
					i += 1;

					if chars.get(i) == Some(&'\'') {
						tokens.push(Token::Literal('\''));
						i += 1;
						continue;
					}

					loop {
						match (chars.get(i), chars.get(i + 1)) {
							(None, _) => {
								return Err(Error::Pattern {
									pattern: String::from(pattern),
									reason: String::from("unterminated quote"),
								});
							}
							(Some('\''), Some('\'')) => {
								tokens.push(Token::Literal('\''));
								i += 2;
							}
							(Some('\''), _) => {
								i += 1;
								break;
							}
							(Some(&c), _) => {
								tokens.push(Token::Literal(c));
								i += 1;
							}
						}
					}

					continue;
				}
				c @ ('h' | 'H' | 'm' | 's') => {
					let len = run(i, c, 2);
					let padded = len == 2;
					let token = match c {
						'h' => Token::Hour { padded },
						'H' => Token::Hour24 { padded },
						'm' => Token::Minute { padded },
						_ => Token::Second { padded },
					};
					(token, len)
				}
				c @ ('d' | 'M') => {
					let len = run(i, c, 4);
					let token = match (c, len) {
						('d', 1 | 2) => Token::Day { padded: len == 2 },
						('d', _) => Token::Weekday { long: len == 4 },
						(_, 1 | 2) => Token::Month { padded: len == 2 },
						_ => Token::MonthName { long: len == 4 },
					};
					(token, len)
				}
				'y' => match run(i, 'y', 4) {
					4 => (Token::Year { long: true }, 4),
					2 | 3 => (Token::Year { long: false }, 2),
					_ => (Token::Literal('y'), 1),
				},
				'z' if run(i, 'z', 3) == 3 => (Token::Millis { padded: true }, 3),
				'z' => (Token::Millis { padded: false }, 1),
				c @ ('A' | 'a') => {
					let upper = c == 'A';
					let marker = if upper { 'P' } else { 'p' };
					let len = if chars.get(i + 1) == Some(&marker) { 2 } else { 1 };
					(Token::AmPm { upper }, len)
				}
				c => (Token::Literal(c), 1),
			};

			tokens.push(token);
			i += len;
		}

		Ok(Self { tokens })
	}

	/// The strftime string for a time whose millisecond part is `millis`.
	///
	/// strftime has no unpadded millisecond field, so `z` is rendered from `millis` directly.
	///
	/// ```
	/// use clockfmt::pattern::Pattern;
	///
	/// assert_eq!(Pattern::parse("hh:mm").unwrap().strftime(0), "%H:%M");
	/// assert_eq!(Pattern::parse("h:mm ap").unwrap().strftime(0), "%-I:%M %P");
	/// assert_eq!(Pattern::parse("ss.z").unwrap().strftime(42), "%S.42");
	/// ```
	pub fn strftime(&self, millis: u32) -> String {
		let twelve_hour = self.tokens.iter().any(|token| matches!(token, Token::AmPm { .. }));
		let mut strftime = String::with_capacity(self.tokens.len() * 2);

		for &token in &self.tokens {
			match token {
				Token::Hour { padded } => strftime.push_str(match (twelve_hour, padded) {
					(true, true) => "%I",
					(true, false) => "%-I",
					(false, true) => "%H",
					(false, false) => "%-H",
				}),
				Token::Hour24 { padded: true } => strftime.push_str("%H"),
				Token::Hour24 { padded: false } => strftime.push_str("%-H"),
				Token::Minute { padded: true } => strftime.push_str("%M"),
				Token::Minute { padded: false } => strftime.push_str("%-M"),
				Token::Second { padded: true } => strftime.push_str("%S"),
				Token::Second { padded: false } => strftime.push_str("%-S"),
				Token::Millis { padded: true } => strftime.push_str("%3f"),
				Token::Millis { padded: false } => strftime.push_str(&millis.to_string()),
				Token::AmPm { upper: true } => strftime.push_str("%p"),
				Token::AmPm { upper: false } => strftime.push_str("%P"),
				Token::Day { padded: true } => strftime.push_str("%d"),
				Token::Day { padded: false } => strftime.push_str("%-d"),
				Token::Weekday { long: true } => strftime.push_str("%A"),
				Token::Weekday { long: false } => strftime.push_str("%a"),
				Token::Month { padded: true } => strftime.push_str("%m"),
				Token::Month { padded: false } => strftime.push_str("%-m"),
				Token::MonthName { long: true } => strftime.push_str("%B"),
				Token::MonthName { long: false } => strftime.push_str("%b"),
				Token::Year { long: true } => strftime.push_str("%Y"),
				Token::Year { long: false } => strftime.push_str("%y"),
				Token::Literal('%') => strftime.push_str("%%"),
				Token::Literal(c) => strftime.push(c),
			}
		}

		strftime
	}
}
