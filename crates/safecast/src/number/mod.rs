// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod render;
mod r#type;

use std::fmt::{Debug, Display};

use render::render_float;
pub use r#type::{Kind, NumberType};

/// Exact working representation of a value while it is being checked.
///
/// Every supported integer fits `i128` and every supported float widens to
/// `f64` without rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repr {
	Int(i128),
	Float(f64),
}

mod sealed {
	pub trait Sealed {}
}

/// A primitive numeric type the conversion engine accepts.
pub trait Number: Copy + Display + Debug + PartialOrd + sealed::Sealed + 'static {
	const TYPE: NumberType;

	#[doc(hidden)]
	fn to_repr(self) -> Repr;

	/// Builds a value from a representation that has already been checked
	/// to fit `Self::TYPE`.
	#[doc(hidden)]
	fn from_repr(repr: Repr) -> Self;

	/// Shortest text that reads back as the same value.
	#[doc(hidden)]
	fn render(self) -> String;
}

pub trait IsInteger: Number {}

macro_rules! impl_number_integer {
    ($($t:ty => $ty:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Number for $t {
                const TYPE: NumberType = NumberType::$ty;

                #[inline]
                fn to_repr(self) -> Repr {
                    Repr::Int(self as i128)
                }

                #[inline]
                fn from_repr(repr: Repr) -> Self {
                    match repr {
                        Repr::Int(v) => v as $t,
                        Repr::Float(v) => v as $t,
                    }
                }

                fn render(self) -> String {
                    self.to_string()
                }
            }

            impl IsInteger for $t {}
        )*
    };
}

macro_rules! impl_number_float {
    ($($t:ty => $ty:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Number for $t {
                const TYPE: NumberType = NumberType::$ty;

                #[inline]
                fn to_repr(self) -> Repr {
                    Repr::Float(self as f64)
                }

                #[inline]
                fn from_repr(repr: Repr) -> Self {
                    match repr {
                        Repr::Int(v) => v as $t,
                        Repr::Float(v) => v as $t,
                    }
                }

                fn render(self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if self == <$t>::INFINITY {
                        "+Inf".to_string()
                    } else if self == <$t>::NEG_INFINITY {
                        "-Inf".to_string()
                    } else {
                        render_float(format!("{self}"), format!("{self:e}"))
                    }
                }
            }
        )*
    };
}

impl_number_integer!(
	isize => Int,
	i8 => Int8,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
	usize => Uint,
	u8 => Uint8,
	u16 => Uint16,
	u32 => Uint32,
	u64 => Uint64,
);

impl_number_float!(
	f32 => Float32,
	f64 => Float64,
);
