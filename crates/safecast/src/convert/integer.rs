// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::Reason,
	number::{Kind, NumberType},
};

/// Range containment between two integer types.
///
/// `value` is the source in the widest integer category, so none of the
/// comparisons below can wrap.
pub(crate) fn int_to_int(value: i128, from: NumberType, to: NumberType) -> Result<(), Reason> {
	debug_assert!(from.is_integer() && to.is_integer());

	let contained = match (from.kind(), to.kind()) {
		// unsigned sources are never negative
		(Kind::Unsigned, _) => value <= to.max_value(),
		(Kind::Signed, Kind::Unsigned) => value >= 0 && value <= to.max_value(),
		(Kind::Signed, _) => value >= to.min_value() && value <= to.max_value(),
		(Kind::Float, _) => false,
	};

	if contained { Ok(()) } else { Err(Reason::OutOfRange) }
}
