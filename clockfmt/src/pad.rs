use crate::{Error, Result};

/// Formats `n` as a decimal numeral at least two characters wide.
///
/// Values below 10 get a single leading `0`, everything else is left as is, so nothing is ever
/// truncated:
///
/// ```
/// use clockfmt::zero_pad;
///
/// assert_eq!(zero_pad(7), "07");
/// assert_eq!(zero_pad(42), "42");
/// assert_eq!(zero_pad(100), "100");
/// ```
pub fn zero_pad(n: u64) -> String {
	if n < 10 {
		format!("0{n}")
	} else {
		n.to_string()
	}
}

/// Same as [`zero_pad`] but for signed input. Negative numbers are rejected.
pub fn zero_pad_signed(n: i64) -> Result<String> {
	u64::try_from(n)
		.map(zero_pad)
		.map_err(|_| Error::Negative(n))
}
