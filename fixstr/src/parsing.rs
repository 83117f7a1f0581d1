// SPDX-License-Identifier: Apache-2.0

//! Text to number parsing. Every parse returns an explicit result: a failed
//! parse is never confused with a parsed zero.
//!
//! ```
//! use fixstr::{FixedStr, ParseIntError, ParseUnits};
//!
//! let str = FixedStr::<u8, 16>::from("-1234");
//! assert_eq!(str.parse::<i32>(), Ok(-1234));
//! assert_eq!(str.parse::<u32>(), Err(ParseIntError::InvalidDigit { unit: '-' as u32, position: 0 }));
//! assert_eq!(FixedStr::<u8, 8>::from("0xff").parse_hex_int::<u8>(), Ok(255));
//! assert_eq!(FixedStr::<u8, 8>::from("42px").parse_int_prefix::<u16>(fixstr::Radix::DEC), Ok((42, 2)));
//! ```

use num_traits::{NumCast, PrimInt};
use crate::{CodeUnit, FixedStr, ParseFloatError, ParseIntError, RadixError};

mod sealed {
	use crate::{CodeUnit, FixedStr};

	pub trait ParseUnits { }
	impl<T: CodeUnit, const C: usize> ParseUnits for FixedStr<T, C> { }
	impl<T: CodeUnit> ParseUnits for [T] { }
}

/// Parses a value from code units.
pub trait FromUnits: Sized {
	type Error;

	/// Parses a value from `units`.
	fn from_units<T: CodeUnit>(units: &[T]) -> Result<Self, Self::Error>;
}

/// A number containing a valid radix in range `[2, 36]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Radix(u32);

impl TryFrom<u32> for Radix {
	type Error = RadixError;

	/// Creates a radix from an integer in the range `[2, 36]`, returning an error
	/// if the value is outside that range.
	fn try_from(value: u32) -> Result<Self, Self::Error> {
		match value {
			2..=36 => Ok(Self(value)),
			_ => Err(RadixError(value))
		}
	}
}

impl Radix {
	/// Binary.
	pub const BIN: Self = Self(2);
	/// Octal.
	pub const OCT: Self = Self(8);
	/// Decimal.
	pub const DEC: Self = Self(10);
	/// Hexadecimal.
	pub const HEX: Self = Self(16);

	/// Returns the radix value.
	#[inline]
	pub const fn get(self) -> u32 { self.0 }
}

/// Parsing methods for fixed strings and unit slices.
pub trait ParseUnits: sealed::ParseUnits {
	/// Returns the units to parse.
	#[doc(hidden)]
	fn parsed_units(&self) -> &[impl CodeUnit];

	/// Parses a value from the units.
	#[inline]
	fn parse<F: FromUnits>(&self) -> Result<F, F::Error> {
		F::from_units(self.parsed_units())
	}

	/// Parses an integer with a `radix` from the units. An optional sign may
	/// precede the digits, and for binary, octal, and hexadecimal, an optional
	/// `0b`, `0o`, or `0x` marker after the sign. Digits above 9 are `a-z` in
	/// either case. Every unit must be consumed.
	#[inline]
	fn parse_int<N: PrimInt>(&self, radix: Radix) -> Result<N, ParseIntError> {
		parse_int(self.parsed_units(), radix)
	}

	/// Parses an integer like [`parse_int`](Self::parse_int), but stops at the
	/// first unit that isn't a digit rather than failing. Returns the integer and
	/// the number of units consumed. At least one digit is required.
	#[inline]
	fn parse_int_prefix<N: PrimInt>(&self, radix: Radix) -> Result<(N, usize), ParseIntError> {
		parse_int_prefix(self.parsed_units(), radix)
	}

	/// Parses the units into an integer from decimal digits `0-9`.
	#[inline]
	fn parse_decimal_int<N: PrimInt>(&self) -> Result<N, ParseIntError> {
		self.parse_int(Radix::DEC)
	}

	/// Parses the units into an integer from hexadecimal digits `0-9` and `A-F`
	/// (uppercase or lowercase), optionally marked with `0x`.
	#[inline]
	fn parse_hex_int<N: PrimInt>(&self) -> Result<N, ParseIntError> {
		self.parse_int(Radix::HEX)
	}

	/// Parses the units into an integer from binary digits `0` and `1`,
	/// optionally marked with `0b`.
	#[inline]
	fn parse_binary_int<N: PrimInt>(&self) -> Result<N, ParseIntError> {
		self.parse_int(Radix::BIN)
	}

	/// Parses a decimal float: an optional sign, digits with an optional
	/// fractional part, and an optional exponent. `nan`, `inf`, and `infinity`
	/// are accepted in any case.
	///
	/// Digits are accumulated in floating point, so the result may differ from the
	/// nearest float by a small error.
	#[inline]
	fn parse_float(&self) -> Result<f64, ParseFloatError> {
		parse_float(self.parsed_units())
	}
}

impl<T: CodeUnit, const C: usize> ParseUnits for FixedStr<T, C> {
	#[inline]
	fn parsed_units(&self) -> &[impl CodeUnit] { self.as_units() }
}

impl<T: CodeUnit> ParseUnits for [T] {
	#[inline]
	fn parsed_units(&self) -> &[impl CodeUnit] { self }
}

macro_rules! from_units_int {
	($($ty:ident)+) => {
		$(
		impl FromUnits for $ty {
			type Error = ParseIntError;

			#[inline]
			fn from_units<T: CodeUnit>(units: &[T]) -> Result<Self, Self::Error> {
				parse_int(units, Radix::DEC)
			}
		}
		)+
	};
}

from_units_int! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

impl FromUnits for f64 {
	type Error = ParseFloatError;

	#[inline]
	fn from_units<T: CodeUnit>(units: &[T]) -> Result<Self, Self::Error> {
		parse_float(units)
	}
}

impl FromUnits for f32 {
	type Error = ParseFloatError;

	#[inline]
	fn from_units<T: CodeUnit>(units: &[T]) -> Result<Self, Self::Error> {
		parse_float(units).map(|f| f as f32)
	}
}

#[derive(Copy, Clone)]
enum Sign {
	ExplicitPositive,
	ImplicitPositive,
	Negative
}

impl Sign {
	fn is_positive(&self) -> bool {
		matches!(
			self,
			Self::ExplicitPositive |
			Self::ImplicitPositive
		)
	}

	fn is_explicit(&self) -> bool {
		matches!(
			self,
			Self::ExplicitPositive |
			Self::Negative
		)
	}

	/// Reads the sign from the first unit. A `-` is only accepted if `signed`.
	fn parse<T: CodeUnit>(first: T, signed: bool) -> Result<Self, ParseIntError> {
		match first.as_ascii() {
			Some(b'+') => Ok(Self::ExplicitPositive),
			Some(b'-') if signed => Ok(Self::Negative),
			Some(b'-') => Err(ParseIntError::invalid(first, 0)),
			_ => Ok(Self::ImplicitPositive),
		}
	}
}

#[inline(always)]
fn to_digit<T: CodeUnit>(unit: T, radix: Radix) -> Option<u32> {
	char::from_u32(unit.to_u32())?.to_digit(radix.0)
}

#[inline(always)]
fn cast<N: NumCast>(value: u32, overflow: ParseIntError) -> Result<N, ParseIntError> {
	N::from(value).ok_or(overflow)
}

/// Skips a radix marker at `pos` if present, returning the position after it.
fn skip_marker<T: CodeUnit>(units: &[T], pos: usize, radix: Radix) -> usize {
	let marker = radix.marker().as_bytes();
	let matches = marker.len() == 2 &&
		units.get(pos..pos + 2).is_some_and(|m|
			m[0].as_ascii() == Some(marker[0]) &&
			m[1].to_lower().as_ascii() == Some(marker[1])
		);
	if matches { pos + 2 } else { pos }
}

fn parse_int_prefix<T: CodeUnit, N: PrimInt>(
	units: &[T],
	radix: Radix
) -> Result<(N, usize), ParseIntError> {
	let &first = units.first().ok_or(ParseIntError::Empty)?;
	let sign = Sign::parse(first, N::min_value() < N::zero())?;
	let start = skip_marker(units, sign.is_explicit() as usize, radix);
	let overflow = if sign.is_positive() {
		ParseIntError::PosOverflow
	} else {
		ParseIntError::NegOverflow
	};
	let r: N = cast(radix.0, overflow)?;

	let mut num = N::zero();
	let mut pos = start;
	while let Some(digit) = units.get(pos).and_then(|&u| to_digit(u, radix)) {
		let digit: N = cast(digit, overflow)?;
		let mul = num.checked_mul(&r);
		num = if sign.is_positive() {
			mul.and_then(|v| v.checked_add(&digit))
		} else {
			mul.and_then(|v| v.checked_sub(&digit))
		}.ok_or(overflow)?;
		pos += 1;
	}

	if pos == start {
		return Err(match units.get(pos) {
			Some(&unit) => ParseIntError::invalid(unit, pos),
			None => ParseIntError::NoDigits
		})
	}
	Ok((num, pos))
}

fn parse_int<T: CodeUnit, N: PrimInt>(units: &[T], radix: Radix) -> Result<N, ParseIntError> {
	let (num, end) = parse_int_prefix(units, radix)?;
	match units.get(end) {
		Some(&unit) => Err(ParseIntError::invalid(unit, end)),
		None => Ok(num)
	}
}

/// Returns `true` if `units` equals the ASCII `word`, ignoring case.
fn eq_word<T: CodeUnit>(units: &[T], word: &[u8]) -> bool {
	units.len() == word.len() &&
	units.iter()
		 .zip(word)
		 .all(|(u, &w)| u.to_lower().as_ascii() == Some(w))
}

fn parse_float<T: CodeUnit>(units: &[T]) -> Result<f64, ParseFloatError> {
	let &first = units.first().ok_or(ParseFloatError::Empty)?;
	let (negative, mut pos) = match first.as_ascii() {
		Some(b'-') => (true, 1),
		Some(b'+') => (false, 1),
		_ => (false, 0)
	};
	let apply_sign = |v: f64| if negative { -v } else { v };

	let rest = &units[pos..];
	if eq_word(rest, b"nan") {
		return Ok(f64::NAN)
	}
	if eq_word(rest, b"inf") || eq_word(rest, b"infinity") {
		return Ok(apply_sign(f64::INFINITY))
	}

	let digit_at = |pos: usize| units.get(pos).copied().filter(|u| u.is_digit());

	let mut value = 0.0;
	let mut digits = 0;
	while let Some(d) = digit_at(pos) {
		value = value * 10.0 + (d.to_u32() - '0' as u32) as f64;
		digits += 1;
		pos += 1;
	}

	if units.get(pos).and_then(|u| u.as_ascii()) == Some(b'.') {
		pos += 1;
		let mut divisor = 1.0;
		while let Some(d) = digit_at(pos) {
			divisor *= 10.0;
			value += (d.to_u32() - '0' as u32) as f64 / divisor;
			digits += 1;
			pos += 1;
		}
	}

	if digits == 0 {
		return Err(match units.get(pos) {
			Some(&unit) => ParseFloatError::invalid(unit, pos),
			None => ParseFloatError::NoDigits
		})
	}

	if matches!(units.get(pos).and_then(|u| u.as_ascii()), Some(b'e' | b'E')) {
		pos += 1;
		let exp_negative = match units.get(pos).and_then(|u| u.as_ascii()) {
			Some(b'-') => { pos += 1; true }
			Some(b'+') => { pos += 1; false }
			_ => false
		};

		// Out-of-range exponents saturate, overflowing to infinity or zero.
		let exp_digits = pos;
		let mut exp = 0i32;
		while let Some(d) = digit_at(pos) {
			exp = exp.saturating_mul(10)
					 .saturating_add((d.to_u32() - '0' as u32) as i32);
			pos += 1;
		}

		if pos == exp_digits {
			return Err(match units.get(pos) {
				Some(&unit) => ParseFloatError::invalid(unit, pos),
				None => ParseFloatError::NoDigits
			})
		}

		if value != 0.0 {
			value *= 10f64.powi(if exp_negative { -exp } else { exp });
		}
	}

	match units.get(pos) {
		Some(&unit) => Err(ParseFloatError::invalid(unit, pos)),
		None => Ok(apply_sign(value))
	}
}
