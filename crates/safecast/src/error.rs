// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::number::{Number, NumberType};

/// Why a value could not be moved to the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
	OutOfRange,
	NotFinite,
	NotIntegral,
}

impl Reason {
	pub const fn as_str(&self) -> &'static str {
		match self {
			Reason::OutOfRange => "out of range",
			Reason::NotFinite => "not finite",
			Reason::NotIntegral => "not an integer value",
		}
	}
}

impl Display for Reason {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{reason} for {value} ({from}) to {to}")]
pub struct ConvertError {
	/// Shortest round-trip rendering of the source value. Floats switch to
	/// exponent form outside `1e-4..1e21` (`1e+300`) and infinities carry a
	/// sign (`+Inf`).
	pub value: String,
	pub from: NumberType,
	pub to: NumberType,
	pub reason: Reason,
}

impl ConvertError {
	pub fn new<S: Number>(value: S, to: NumberType, reason: Reason) -> Self {
		Self {
			value: value.render(),
			from: S::TYPE,
			to,
			reason,
		}
	}

	pub fn reason(&self) -> Reason {
		self.reason
	}
}

/// Message used by every `must_*` entry point when a conversion fails.
pub(crate) fn panic_message(err: &ConvertError) -> String {
	format!("out of range for {} ({}) to {}", err.value, err.from, err.to)
}
