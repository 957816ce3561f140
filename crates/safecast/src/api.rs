// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::error;

use crate::{
	Result,
	convert::{SafeConvert, SafeRound, SafeSaturate, SafeTruncate},
	error::{ConvertError, panic_message},
	number::{IsInteger, Number},
};

/// Converts `value` to `D` only if no information is lost.
///
/// ```
/// assert_eq!(safecast::convert::<u8, _>(255i64), Ok(255u8));
/// assert!(safecast::convert::<u8, _>(256i64).is_err());
/// assert!(safecast::convert::<i32, _>(std::f64::consts::PI).is_err());
/// ```
#[inline]
pub fn convert<D, S>(value: S) -> Result<D>
where
	D: Number,
	S: SafeConvert<D>,
{
	value.checked_convert()
}

/// Like [`convert`], but a floating source is first truncated toward zero.
///
/// ```
/// assert_eq!(safecast::truncate::<i32, _>(std::f64::consts::PI), Ok(3));
/// ```
#[inline]
pub fn truncate<D, S>(value: S) -> Result<D>
where
	D: Number,
	S: SafeTruncate<D>,
{
	value.checked_truncate()
}

/// Like [`convert`], but a floating source is first rounded to the nearest
/// integer, halves away from zero.
///
/// ```
/// assert_eq!(safecast::round::<i32, _>(1.618033988749895), Ok(2));
/// ```
#[inline]
pub fn round<D, S>(value: S) -> Result<D>
where
	D: Number,
	S: SafeRound<D>,
{
	value.checked_round()
}

/// Clamps `value` into the integer type `D`. Never fails.
#[inline]
pub fn saturate<D, S>(value: S) -> D
where
	D: IsInteger,
	S: SafeSaturate<D>,
{
	value.saturating_convert()
}

/// [`convert`], panicking with `out of range for <value> (<from>) to <to>`
/// on failure.
#[track_caller]
pub fn must_convert<D, S>(value: S) -> D
where
	D: Number,
	S: SafeConvert<D>,
{
	or_panic(value.checked_convert())
}

#[track_caller]
pub fn must_truncate<D, S>(value: S) -> D
where
	D: Number,
	S: SafeTruncate<D>,
{
	or_panic(value.checked_truncate())
}

#[track_caller]
pub fn must_round<D, S>(value: S) -> D
where
	D: Number,
	S: SafeRound<D>,
{
	or_panic(value.checked_round())
}

#[track_caller]
fn or_panic<D>(result: Result<D>) -> D {
	match result {
		Ok(value) => value,
		Err(err) => abort(err),
	}
}

#[cold]
#[track_caller]
fn abort(err: ConvertError) -> ! {
	let message = panic_message(&err);
	error!(value = %err.value, from = %err.from, to = %err.to, reason = %err.reason, "{message}");
	panic!("{message}")
}

#[cfg(test)]
mod tests {
	use super::{convert, must_convert, must_round, must_truncate, round, saturate, truncate};
	use crate::error::Reason;

	#[test]
	fn test_convert() {
		assert_eq!(convert::<i8, _>(42u32), Ok(42i8));
		assert_eq!(convert::<i8, _>(129u32).unwrap_err().reason(), Reason::OutOfRange);
		assert_eq!(convert::<i8, _>(-1i32), Ok(-1i8));
		assert_eq!(convert::<u8, _>(-129i32).unwrap_err().reason(), Reason::OutOfRange);
		assert!(convert::<i16, _>(65535u16).is_err());
		assert!(convert::<usize, _>(-1i8).is_err());
		assert_eq!(convert::<i8, _>(42usize), Ok(42i8));
	}

	#[test]
	fn test_non_integer_float() {
		let pi = std::f64::consts::PI;
		assert_eq!(convert::<isize, _>(pi).unwrap_err().reason(), Reason::NotIntegral);
		assert_eq!(convert::<isize, _>(pi.trunc()), Ok(3));
		assert_eq!(truncate::<isize, _>(pi), Ok(3));
		assert_eq!(round::<isize, _>(1.618033988749895f64), Ok(2));
	}

	#[test]
	fn test_not_finite() {
		assert_eq!(convert::<u8, _>(f64::NAN).unwrap_err().reason(), Reason::NotFinite);
		assert_eq!(truncate::<i64, _>(f32::INFINITY).unwrap_err().reason(), Reason::NotFinite);
		assert_eq!(round::<i64, _>(f64::NEG_INFINITY).unwrap_err().reason(), Reason::NotFinite);
	}

	#[test]
	fn test_saturate() {
		assert_eq!(saturate::<u8, _>(256i16), 255u8);
		assert_eq!(saturate::<i8, _>(-128.6f64), -128i8);
		assert_eq!(saturate::<u16, _>(-5i64), 0u16);
	}

	#[test]
	fn test_must_no_panic() {
		assert_eq!(must_truncate::<u8, _>(255.6), 255u8);
		assert_eq!(must_convert::<u8, _>(255i64), 255u8);
		assert_eq!(must_round::<u8, _>(255.4), 255u8);
	}

	#[test]
	#[should_panic(expected = "out of range for 255.5 (float32) to uint8")]
	fn test_must_round_panics() {
		must_round::<u8, _>(255.5f32);
	}

	#[test]
	#[should_panic(expected = "out of range for -1.5 (float32) to uint8")]
	fn test_must_truncate_panics() {
		must_truncate::<u8, _>(-1.5f32);
	}

	#[test]
	#[should_panic(expected = "out of range for 256 (int) to uint8")]
	fn test_must_convert_panics() {
		must_convert::<u8, _>(256isize);
	}

	#[test]
	#[should_panic(expected = "out of range for -128.6 (float64) to int8")]
	fn test_must_round_negative_panics() {
		must_round::<i8, _>(-128.6);
	}
}
