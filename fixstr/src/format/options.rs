// SPDX-License-Identifier: Apache-2.0

use crate::{DEFAULT_PRECISION, Radix};
use super::{Formatted, Numeric};

/// Options for rendering numbers into fixed strings.
///
/// # Radix
///
/// Integers are rendered in any radix from 2 to 36, defaulting to decimal. In
/// decimal, negative numbers are rendered as a `-` sign and their magnitude. In
/// any other radix they are rendered as the two's-complement bits of their type,
/// so `-1i8` in hexadecimal is `0xff`. Floats are always rendered in decimal.
///
/// # Prefix
///
/// Binary, octal, and hexadecimal renderings begin with a `0b`, `0o`, or `0x`
/// marker, unless disabled. Other radices have no marker.
///
/// # Padding
///
/// Renderings shorter than the width are padded on the left with the fill
/// character, placed before any sign or marker: `-7` padded to 3 with `0` is
/// `0-7`. The width defaults to zero, no padding. It is measured in code units
/// of the output string, so a fill of `·` takes two units of a byte string and
/// one of a `u16` string.
///
/// # Precision
///
/// The number of fractional digits rendered for floats, defaulting to six. Zero
/// omits the decimal point. Digits are extracted by repeated multiplication and
/// truncation, not rounding. The float nearest `0.12` is slightly less than it,
/// so at precision 2 it renders as `0.11`. Error accumulates at higher
/// precision.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct FormatOptions {
	pub radix: Radix,
	pub uppercase: bool,
	pub prefix: bool,
	pub width: usize,
	pub fill: char,
	pub precision: usize,
}

impl Default for FormatOptions {
	fn default() -> Self { Self::new() }
}

impl FormatOptions {
	/// Creates a new set of format options: decimal, lowercase, prefixed, no
	/// padding, with the default precision.
	pub const fn new() -> Self {
		Self {
			radix: Radix::DEC,
			uppercase: false,
			prefix: true,
			width: 0,
			fill: '0',
			precision: DEFAULT_PRECISION,
		}
	}

	/// Presets the options to render hexadecimal, marked with `0x`.
	#[inline]
	pub const fn hex() -> Self {
		Self::new().with_radix(Radix::HEX)
	}

	/// Presets the options to render binary, marked with `0b`.
	#[inline]
	pub const fn binary() -> Self {
		Self::new().with_radix(Radix::BIN)
	}

	/// Presets the options to render octal, marked with `0o`.
	#[inline]
	pub const fn octal() -> Self {
		Self::new().with_radix(Radix::OCT)
	}

	/// Presets the options to render decimal, left-padded to `width` with `fill`.
	#[inline]
	pub const fn padded(width: usize, fill: char) -> Self {
		Self::new().with_width(width)
				   .with_fill(fill)
	}

	/// Returns the radix.
	#[inline]
	pub const fn radix(&self) -> Radix { self.radix }

	/// Returns `true` if digits above 9 are rendered uppercase.
	#[inline]
	pub const fn uppercase(&self) -> bool { self.uppercase }

	/// Returns `true` if the radix marker is rendered.
	#[inline]
	pub const fn prefix(&self) -> bool { self.prefix }

	/// Returns the minimum rendered width.
	#[inline]
	pub const fn width(&self) -> usize { self.width }

	/// Returns the padding fill character.
	#[inline]
	pub const fn fill(&self) -> char { self.fill }

	/// Returns the float precision.
	#[inline]
	pub const fn precision(&self) -> usize { self.precision }

	/// Sets the radix.
	#[inline]
	pub fn set_radix(&mut self, value: Radix) {
		self.radix = value;
	}

	/// Sets whether digits above 9 are rendered uppercase.
	#[inline]
	pub fn set_uppercase(&mut self, value: bool) {
		self.uppercase = value;
	}

	/// Sets whether the radix marker is rendered.
	#[inline]
	pub fn set_prefix(&mut self, value: bool) {
		self.prefix = value;
	}

	/// Sets the minimum rendered width.
	#[inline]
	pub fn set_width(&mut self, value: usize) {
		self.width = value;
	}

	/// Sets the padding fill character.
	#[inline]
	pub fn set_fill(&mut self, value: char) {
		self.fill = value;
	}

	/// Sets the float precision.
	#[inline]
	pub fn set_precision(&mut self, value: usize) {
		self.precision = value;
	}

	/// Sets the radix.
	#[inline]
	pub const fn with_radix(mut self, value: Radix) -> Self {
		self.radix = value;
		self
	}

	/// Sets whether digits above 9 are rendered uppercase.
	#[inline]
	pub const fn with_uppercase(mut self, value: bool) -> Self {
		self.uppercase = value;
		self
	}

	/// Sets whether the radix marker is rendered.
	#[inline]
	pub const fn with_prefix(mut self, value: bool) -> Self {
		self.prefix = value;
		self
	}

	/// Sets the minimum rendered width.
	#[inline]
	pub const fn with_width(mut self, value: usize) -> Self {
		self.width = value;
		self
	}

	/// Sets the padding fill character.
	#[inline]
	pub const fn with_fill(mut self, value: char) -> Self {
		self.fill = value;
		self
	}

	/// Sets the float precision.
	#[inline]
	pub const fn with_precision(mut self, value: usize) -> Self {
		self.precision = value;
		self
	}

	/// Pairs `value` with these options, for rendering with
	/// [`FormatUnits`](super::FormatUnits).
	#[inline]
	pub const fn format<N: Numeric>(self, value: N) -> Formatted<N> {
		Formatted { value, options: self }
	}
}
