// SPDX-License-Identifier: Apache-2.0

//! Error types. Capacity overflow is never an error; these cover checked access
//! and parsing only.

/// A checked access past the end of a fixed string.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("index {index} should be less than the fixed string length {len}")]
pub struct OutOfRange {
	/// The requested index.
	pub index: usize,
	/// The string length at the time of access.
	pub len: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseIntError {
	#[error("empty string")]
	Empty,
	#[error("invalid digit {unit:#X} found at position {position}")]
	InvalidDigit {
		unit: u32,
		position: usize,
	},
	#[error("no digits found after sign or radix marker")]
	NoDigits,
	#[error("number too large to fit in target type")]
	PosOverflow,
	#[error("number too small to fit in target type")]
	NegOverflow,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseFloatError {
	#[error("empty string")]
	Empty,
	#[error("invalid digit {unit:#X} found at position {position}")]
	InvalidDigit {
		unit: u32,
		position: usize,
	},
	#[error("no digits found")]
	NoDigits,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("radix must be in range [2, 36], but it was {0}")]
pub struct RadixError(pub u32);

impl ParseIntError {
	pub(crate) fn invalid<T: crate::CodeUnit>(unit: T, position: usize) -> Self {
		Self::InvalidDigit { unit: unit.to_u32(), position }
	}
}

impl ParseFloatError {
	pub(crate) fn invalid<T: crate::CodeUnit>(unit: T, position: usize) -> Self {
		Self::InvalidDigit { unit: unit.to_u32(), position }
	}
}
