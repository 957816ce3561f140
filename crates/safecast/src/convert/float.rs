// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::Reason, number::NumberType};

/// Checks a floating value against another floating type.
///
/// Widening always succeeds. NaN and the infinities exist in every format
/// and pass through unchanged. A finite value narrowed to a smaller format
/// must stay within its finite range and survive the round trip bit for
/// bit, otherwise the precision loss is reported as out of range.
pub(crate) fn float_to_float(value: f64, from: NumberType, to: NumberType) -> Result<(), Reason> {
	debug_assert!(from.is_float() && to.is_float());

	if to.bits() >= from.bits() || !value.is_finite() {
		return Ok(());
	}

	if value.abs() > to.max_finite() {
		return Err(Reason::OutOfRange);
	}

	let narrowed = match to {
		NumberType::Float32 => f64::from(value as f32),
		_ => value,
	};
	if narrowed.to_bits() != value.to_bits() {
		return Err(Reason::OutOfRange);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::float_to_float;
	use crate::{error::Reason, number::NumberType};

	#[test]
	fn test_widening() {
		assert_eq!(float_to_float(f64::from(0.1f32), NumberType::Float32, NumberType::Float64), Ok(()));
		assert_eq!(float_to_float(f64::from(f32::MAX), NumberType::Float32, NumberType::Float64), Ok(()));
	}

	#[test]
	fn test_identity() {
		assert_eq!(float_to_float(0.1, NumberType::Float64, NumberType::Float64), Ok(()));
		assert_eq!(float_to_float(f64::MIN_POSITIVE, NumberType::Float64, NumberType::Float64), Ok(()));
	}

	#[test]
	fn test_non_finite_passes_through() {
		for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
			assert_eq!(float_to_float(value, NumberType::Float64, NumberType::Float32), Ok(()));
		}
	}

	#[test]
	fn test_narrowing_exact() {
		assert_eq!(float_to_float(0.5, NumberType::Float64, NumberType::Float32), Ok(()));
		assert_eq!(float_to_float(-16777216.0, NumberType::Float64, NumberType::Float32), Ok(()));
		assert_eq!(float_to_float(f64::from(f32::MAX), NumberType::Float64, NumberType::Float32), Ok(()));
		assert_eq!(float_to_float(-0.0, NumberType::Float64, NumberType::Float32), Ok(()));
	}

	#[test]
	fn test_narrowing_loses_precision() {
		assert_eq!(float_to_float(0.1, NumberType::Float64, NumberType::Float32), Err(Reason::OutOfRange));
		assert_eq!(float_to_float(16777217.0, NumberType::Float64, NumberType::Float32), Err(Reason::OutOfRange));
		assert_eq!(float_to_float(1e-300, NumberType::Float64, NumberType::Float32), Err(Reason::OutOfRange));
	}

	#[test]
	fn test_narrowing_out_of_range() {
		assert_eq!(float_to_float(1e39, NumberType::Float64, NumberType::Float32), Err(Reason::OutOfRange));
		assert_eq!(float_to_float(-f64::MAX, NumberType::Float64, NumberType::Float32), Err(Reason::OutOfRange));
	}
}
