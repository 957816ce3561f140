// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Picks between the positional and the exponent rendering of the same
/// shortest digits. Positional is used while the decimal exponent lies in
/// `-4..21`, otherwise the exponent form with an explicit sign and at least
/// two exponent digits (`1e+300`, `1e-05`).
///
/// `plain` and `scientific` are the `{}` and `{:e}` renderings of one
/// finite value.
pub(crate) fn render_float(plain: String, scientific: String) -> String {
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return plain;
	};
	let Ok(exponent) = exponent.parse::<i32>() else {
		return plain;
	};

	if (-4..21).contains(&exponent) {
		return plain;
	}

	let sign = if exponent < 0 { '-' } else { '+' };
	format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
	use super::render_float;

	fn render(value: f64) -> String {
		render_float(format!("{value}"), format!("{value:e}"))
	}

	#[test]
	fn test_positional_window() {
		assert_eq!(render(0.0), "0");
		assert_eq!(render(-0.0), "-0");
		assert_eq!(render(255.5), "255.5");
		assert_eq!(render(0.0001), "0.0001");
		assert_eq!(render(1e20), "100000000000000000000");
		assert_eq!(render(18446744073709551616.0), "18446744073709552000");
	}

	#[test]
	fn test_huge() {
		assert_eq!(render(1e21), "1e+21");
		assert_eq!(render(1e300), "1e+300");
		assert_eq!(render(-1.5e300), "-1.5e+300");
		assert_eq!(render(f64::MAX), "1.7976931348623157e+308");
	}

	#[test]
	fn test_tiny() {
		assert_eq!(render(0.00001), "1e-05");
		assert_eq!(render(1e-300), "1e-300");
		assert_eq!(render(-2.5e-7), "-2.5e-07");
		assert_eq!(render(f64::MIN_POSITIVE), "2.2250738585072014e-308");
	}

	#[test]
	fn test_not_scientific_falls_back() {
		assert_eq!(render_float("inf".to_string(), "inf".to_string()), "inf");
	}
}
