// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

// Every integer bound must fit the i128 working representation.
const _: () = assert!(usize::BITS <= 64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
	Signed,
	Unsigned,
	Float,
}

impl Kind {
	pub const fn is_integer(&self) -> bool {
		!matches!(self, Kind::Float)
	}
}

/// Static description of a supported numeric type.
///
/// `Int` and `Uint` are the platform-width integers (`isize` and `usize`);
/// their width is taken from the target at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberType {
	Int,
	Int8,
	Int16,
	Int32,
	Int64,
	Uint,
	Uint8,
	Uint16,
	Uint32,
	Uint64,
	Float32,
	Float64,
}

impl NumberType {
	pub const ALL: [NumberType; 12] = [
		NumberType::Int,
		NumberType::Int8,
		NumberType::Int16,
		NumberType::Int32,
		NumberType::Int64,
		NumberType::Uint,
		NumberType::Uint8,
		NumberType::Uint16,
		NumberType::Uint32,
		NumberType::Uint64,
		NumberType::Float32,
		NumberType::Float64,
	];

	pub const fn kind(&self) -> Kind {
		match self {
			NumberType::Int
			| NumberType::Int8
			| NumberType::Int16
			| NumberType::Int32
			| NumberType::Int64 => Kind::Signed,
			NumberType::Uint
			| NumberType::Uint8
			| NumberType::Uint16
			| NumberType::Uint32
			| NumberType::Uint64 => Kind::Unsigned,
			NumberType::Float32 | NumberType::Float64 => Kind::Float,
		}
	}

	/// Storage width in bits.
	pub const fn bits(&self) -> u32 {
		match self {
			NumberType::Int => isize::BITS,
			NumberType::Uint => usize::BITS,
			NumberType::Int8 | NumberType::Uint8 => 8,
			NumberType::Int16 | NumberType::Uint16 => 16,
			NumberType::Int32 | NumberType::Uint32 | NumberType::Float32 => 32,
			NumberType::Int64 | NumberType::Uint64 | NumberType::Float64 => 64,
		}
	}

	/// Smallest value of an integer type. Only defined for integers.
	pub const fn min_value(&self) -> i128 {
		debug_assert!(self.is_integer());
		match self.kind() {
			Kind::Signed => -(1i128 << (self.bits() - 1)),
			Kind::Unsigned | Kind::Float => 0,
		}
	}

	/// Largest value of an integer type. Only defined for integers.
	pub const fn max_value(&self) -> i128 {
		debug_assert!(self.is_integer());
		match self.kind() {
			Kind::Signed => (1i128 << (self.bits() - 1)) - 1,
			Kind::Unsigned => (1i128 << self.bits()) - 1,
			Kind::Float => 0,
		}
	}

	/// Significant bits including the implicit leading bit, zero for
	/// integers.
	pub const fn mantissa_bits(&self) -> u32 {
		match self {
			NumberType::Float32 => f32::MANTISSA_DIGITS,
			NumberType::Float64 => f64::MANTISSA_DIGITS,
			_ => 0,
		}
	}

	/// Largest finite magnitude of a float type, as a double. Only defined
	/// for floats.
	pub const fn max_finite(&self) -> f64 {
		debug_assert!(self.is_float());
		match self {
			NumberType::Float32 => f32::MAX as f64,
			NumberType::Float64 => f64::MAX,
			_ => 0.0,
		}
	}

	/// Bit length of the largest finite magnitude (`max_exp` of the
	/// format), zero for integers.
	pub const fn max_exponent(&self) -> u32 {
		match self {
			NumberType::Float32 => f32::MAX_EXP as u32,
			NumberType::Float64 => f64::MAX_EXP as u32,
			_ => 0,
		}
	}

	pub const fn is_integer(&self) -> bool {
		self.kind().is_integer()
	}

	pub const fn is_float(&self) -> bool {
		!self.is_integer()
	}

	pub const fn name(&self) -> &'static str {
		match self {
			NumberType::Int => "int",
			NumberType::Int8 => "int8",
			NumberType::Int16 => "int16",
			NumberType::Int32 => "int32",
			NumberType::Int64 => "int64",
			NumberType::Uint => "uint",
			NumberType::Uint8 => "uint8",
			NumberType::Uint16 => "uint16",
			NumberType::Uint32 => "uint32",
			NumberType::Uint64 => "uint64",
			NumberType::Float32 => "float32",
			NumberType::Float64 => "float64",
		}
	}
}

impl Display for NumberType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
