// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Lossless conversions between the primitive numeric types.
//!
//! [`convert`] succeeds only when the value survives the move unchanged,
//! [`truncate`] and [`round`] first make a floating source integral, and
//! the `must_*` variants panic instead of returning the failure.
//!
//! ```
//! let out: Result<u8, _> = safecast::convert(256i16);
//! assert_eq!(out.unwrap_err().to_string(), "out of range for 256 (int16) to uint8");
//! assert_eq!(safecast::must_round::<u8, _>(255.4), 255);
//! assert_eq!(safecast::must_truncate::<u8, _>(255.6), 255);
//! ```

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
#![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

mod api;
mod convert;
mod error;
mod number;

pub use api::{convert, must_convert, must_round, must_truncate, round, saturate, truncate};
pub use convert::{Mode, SafeConvert, SafeRound, SafeSaturate, SafeTruncate};
pub use error::{ConvertError, Reason};
pub use number::{IsInteger, Kind, Number, NumberType};

pub type Result<T> = std::result::Result<T, ConvertError>;
