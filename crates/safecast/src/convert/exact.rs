// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Mode;
use crate::{
	error::Reason,
	number::{Kind, NumberType},
};

/// Whether an integer is exactly representable in the floating type `to`.
///
/// After shifting the trailing zero bits into the exponent, the remaining
/// significant bits must fit the mantissa, and the magnitude must stay
/// below the largest finite value. Unlike a plain `|value| < 2^mantissa`
/// bound this accepts e.g. `(2^24 - 1) << 40` into `float32`.
pub(crate) fn int_to_float(value: i128, to: NumberType) -> Result<(), Reason> {
	debug_assert!(to.is_float());

	let magnitude = value.unsigned_abs();
	if magnitude == 0 {
		return Ok(());
	}

	let width = u128::BITS - magnitude.leading_zeros();
	if width > to.max_exponent() {
		return Err(Reason::OutOfRange);
	}

	let significant = width - magnitude.trailing_zeros();
	if significant > to.mantissa_bits() {
		return Err(Reason::OutOfRange);
	}

	Ok(())
}

/// Checks a floating value against an integer type, returning the exact
/// integer it converts to.
pub(crate) fn float_to_int(value: f64, mode: Mode, to: NumberType) -> Result<i128, Reason> {
	debug_assert!(to.is_integer());

	if !value.is_finite() {
		return Err(Reason::NotFinite);
	}

	let candidate = match mode {
		Mode::Strict => {
			if value.fract() != 0.0 {
				return Err(Reason::NotIntegral);
			}
			value
		}
		Mode::Truncate => value.trunc(),
		Mode::Round => value.round(),
	};

	let (lower, upper) = integer_bounds(to);
	if candidate < lower || candidate >= upper {
		return Err(Reason::OutOfRange);
	}

	// integral and inside +-2^64, so the cast is exact
	Ok(candidate as i128)
}

/// Inclusive lower and exclusive upper bound of an integer type, both
/// powers of two and therefore exact in `f64`.
fn integer_bounds(to: NumberType) -> (f64, f64) {
	let bits = to.bits();
	match to.kind() {
		Kind::Signed => {
			let half = (1u128 << (bits - 1)) as f64;
			(-half, half)
		}
		_ => (0.0, (1u128 << bits) as f64),
	}
}
