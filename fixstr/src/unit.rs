// SPDX-License-Identifier: Apache-2.0

use std::char::{decode_utf16, REPLACEMENT_CHARACTER};
use std::fmt::{self, Debug, Write};
use std::hash::Hash;

mod sealed {
	pub trait CodeUnit { }
	impl CodeUnit for u8 { }
	impl CodeUnit for u16 { }
	impl CodeUnit for u32 { }
}

/// Offset between ASCII uppercase and lowercase letters.
const CASE_OFFSET: u8 = b'a' - b'A';

/// A fixed-width string element: `u8` (UTF-8 or bytes), `u16` (UTF-16), or `u32`
/// (UTF-32). This set is closed.
///
/// Classification and case mapping are ASCII-only: units outside `[0, 0x7F]`
/// are never whitespace, letters, or digits, and pass through case conversion
/// unchanged.
pub trait CodeUnit:
	sealed::CodeUnit +
	Copy +
	Default +
	Eq +
	Ord +
	Hash +
	Debug +
	Send +
	Sync +
	'static
{
	/// The zero-valued unit, used as the terminator.
	const ZERO: Self;

	/// Converts an ASCII byte into a unit.
	fn from_ascii(byte: u8) -> Self;

	/// Returns the numeric value of the unit.
	fn to_u32(self) -> u32;

	/// Encodes `char` into `dst`, returning the written units.
	fn encode_char(char: char, dst: &mut [Self; 4]) -> &[Self];

	/// Decodes `units` into characters, replacing invalid sequences with
	/// [`REPLACEMENT_CHARACTER`].
	fn decode_lossy(units: &[Self]) -> impl Iterator<Item = char> + '_;

	/// Writes `units` into a formatter, lossily decoded.
	fn write_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Self::decode_lossy(units).try_for_each(|c| f.write_char(c))
	}

	/// Returns the unit as an ASCII byte, or `None` if it's outside the ASCII
	/// range.
	#[inline]
	fn as_ascii(self) -> Option<u8> {
		u8::try_from(self.to_u32())
			.ok()
			.filter(u8::is_ascii)
	}

	/// Returns `true` for space, tab, line feed, carriage return, form feed, and
	/// vertical tab.
	#[inline]
	fn is_space(self) -> bool {
		matches!(self.as_ascii(), Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b'\x0B'))
	}

	#[inline]
	fn is_alpha(self) -> bool {
		matches!(self.as_ascii(), Some(b'a'..=b'z' | b'A'..=b'Z'))
	}

	#[inline]
	fn is_digit(self) -> bool {
		matches!(self.as_ascii(), Some(b'0'..=b'9'))
	}

	#[inline]
	fn is_lower(self) -> bool {
		matches!(self.as_ascii(), Some(b'a'..=b'z'))
	}

	#[inline]
	fn is_upper(self) -> bool {
		matches!(self.as_ascii(), Some(b'A'..=b'Z'))
	}

	/// Maps `A-Z` to `a-z`, passing other units through.
	#[inline]
	fn to_lower(self) -> Self {
		match self.as_ascii() {
			Some(b @ b'A'..=b'Z') => Self::from_ascii(b + CASE_OFFSET),
			_ => self
		}
	}

	/// Maps `a-z` to `A-Z`, passing other units through.
	#[inline]
	fn to_upper(self) -> Self {
		match self.as_ascii() {
			Some(b @ b'a'..=b'z') => Self::from_ascii(b - CASE_OFFSET),
			_ => self
		}
	}

	/// Swaps the case of ASCII letters.
	#[inline]
	fn toggle_case(self) -> Self {
		if self.is_lower() {
			self.to_upper()
		} else if self.is_upper() {
			self.to_lower()
		} else {
			self
		}
	}
}

impl CodeUnit for u8 {
	const ZERO: Self = 0;

	#[inline]
	fn from_ascii(byte: u8) -> Self {
		debug_assert!(byte.is_ascii(), "{byte:#X} should be an ASCII byte");
		byte
	}

	#[inline]
	fn to_u32(self) -> u32 { self.into() }

	#[inline]
	fn encode_char(char: char, dst: &mut [Self; 4]) -> &[Self] {
		let len = char.encode_utf8(dst).len();
		&dst[..len]
	}

	fn decode_lossy(units: &[Self]) -> impl Iterator<Item = char> + '_ {
		units.utf8_chunks().flat_map(|chunk| {
			let invalid = (!chunk.invalid().is_empty()).then_some(REPLACEMENT_CHARACTER);
			chunk.valid().chars().chain(invalid)
		})
	}

	fn write_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for chunk in units.utf8_chunks() {
			f.write_str(chunk.valid())?;
			if !chunk.invalid().is_empty() {
				f.write_char(REPLACEMENT_CHARACTER)?;
			}
		}
		Ok(())
	}
}

impl CodeUnit for u16 {
	const ZERO: Self = 0;

	#[inline]
	fn from_ascii(byte: u8) -> Self {
		debug_assert!(byte.is_ascii(), "{byte:#X} should be an ASCII byte");
		byte.into()
	}

	#[inline]
	fn to_u32(self) -> u32 { self.into() }

	#[inline]
	fn encode_char(char: char, dst: &mut [Self; 4]) -> &[Self] {
		let len = char.encode_utf16(dst).len();
		&dst[..len]
	}

	fn decode_lossy(units: &[Self]) -> impl Iterator<Item = char> + '_ {
		decode_utf16(units.iter().copied())
			.map(|c| c.unwrap_or(REPLACEMENT_CHARACTER))
	}
}

impl CodeUnit for u32 {
	const ZERO: Self = 0;

	#[inline]
	fn from_ascii(byte: u8) -> Self {
		debug_assert!(byte.is_ascii(), "{byte:#X} should be an ASCII byte");
		byte.into()
	}

	#[inline]
	fn to_u32(self) -> u32 { self }

	#[inline]
	fn encode_char(char: char, dst: &mut [Self; 4]) -> &[Self] {
		dst[0] = char.into();
		&dst[..1]
	}

	fn decode_lossy(units: &[Self]) -> impl Iterator<Item = char> + '_ {
		units.iter().map(|&u| char::from_u32(u).unwrap_or(REPLACEMENT_CHARACTER))
	}
}
