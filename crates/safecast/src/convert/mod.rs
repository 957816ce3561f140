// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod exact;
mod float;
mod integer;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
	error::ConvertError,
	number::{IsInteger, Kind, Number, NumberType, Repr},
};

/// How a non-integral floating source is treated before the range check.
///
/// Only meaningful for floating sources with an integer destination; every
/// other pair is checked as `Strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
	/// The value must already be exactly representable.
	Strict,
	/// Discard the fractional part toward zero.
	Truncate,
	/// Round to the nearest integer, halves away from zero.
	Round,
}

pub trait SafeConvert<D: Number>: Number {
	fn checked_convert(self) -> Result<D, ConvertError>;
}

pub trait SafeTruncate<D: Number>: SafeConvert<D> {
	fn checked_truncate(self) -> Result<D, ConvertError>;
}

pub trait SafeRound<D: Number>: SafeConvert<D> {
	fn checked_round(self) -> Result<D, ConvertError>;
}

pub trait SafeSaturate<D: IsInteger>: SafeConvert<D> {
	fn saturating_convert(self) -> D;
}

impl<D: Number, S: Number> SafeConvert<D> for S {
	#[inline]
	fn checked_convert(self) -> Result<D, ConvertError> {
		check(self, Mode::Strict)
	}
}

pub(crate) fn check<D: Number, S: Number>(value: S, mode: Mode) -> Result<D, ConvertError> {
	let checked = match (value.to_repr(), D::TYPE.kind()) {
		(Repr::Int(v), Kind::Float) => exact::int_to_float(v, D::TYPE).map(|()| Repr::Int(v)),
		(Repr::Int(v), _) => integer::int_to_int(v, S::TYPE, D::TYPE).map(|()| Repr::Int(v)),
		(Repr::Float(v), Kind::Float) => float::float_to_float(v, S::TYPE, D::TYPE).map(|()| Repr::Float(v)),
		(Repr::Float(v), _) => exact::float_to_int(v, mode, D::TYPE).map(Repr::Int),
	};

	match checked {
		Ok(repr) => Ok(D::from_repr(repr)),
		Err(reason) => {
			let err = ConvertError::new(value, D::TYPE, reason);
			trace!(value = %err.value, from = %S::TYPE, to = %D::TYPE, ?mode, %reason, "conversion rejected");
			Err(err)
		}
	}
}

/// Clamps into the integer type `to`. Floats are truncated toward zero and
/// NaN becomes zero.
pub(crate) fn saturate(repr: Repr, to: NumberType) -> i128 {
	debug_assert!(to.is_integer());

	let value = match repr {
		Repr::Int(v) => v,
		Repr::Float(v) => v as i128,
	};
	value.clamp(to.min_value(), to.max_value())
}

macro_rules! impl_safe_approximate {
    ($($src:ty),+ => $dst:tt) => {
        $(
            impl_safe_approximate!(@src $src => $dst);
        )+
    };
    (@src $src:ty => ($($dst:ty),+)) => {
        $(
            impl SafeTruncate<$dst> for $src {
                #[inline]
                fn checked_truncate(self) -> Result<$dst, ConvertError> {
                    check(self, Mode::Truncate)
                }
            }

            impl SafeRound<$dst> for $src {
                #[inline]
                fn checked_round(self) -> Result<$dst, ConvertError> {
                    check(self, Mode::Round)
                }
            }
        )+
    };
}

macro_rules! impl_safe_saturate {
    ($($src:ty),+ => $dst:tt) => {
        $(
            impl_safe_saturate!(@src $src => $dst);
        )+
    };
    (@src $src:ty => ($($dst:ty),+)) => {
        $(
            impl SafeSaturate<$dst> for $src {
                #[inline]
                fn saturating_convert(self) -> $dst {
                    saturate(self.to_repr(), <$dst as Number>::TYPE) as $dst
                }
            }
        )+
    };
}

// float to float has no integral step to apply
impl_safe_approximate!(
	isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64
	=> (isize, i8, i16, i32, i64, usize, u8, u16, u32, u64)
);
impl_safe_approximate!(
	isize, i8, i16, i32, i64, usize, u8, u16, u32, u64
	=> (f32, f64)
);

impl_safe_saturate!(
	isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64
	=> (isize, i8, i16, i32, i64, usize, u8, u16, u32, u64)
);
