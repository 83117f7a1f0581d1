// SPDX-License-Identifier: Apache-2.0

//! Numeric and boolean rendering into fixed strings.
//!
//! Values are rendered through [`FormatUnits`]. Plain integers and floats render
//! with the default [`FormatOptions`]; the proxies returned by [`hex`], [`bin`],
//! [`pad_left`], [`float`], and [`FormatOptions::format`] carry their own.
//!
//! ```
//! use fixstr::{bin, hex, pad_left, to_fixed};
//!
//! assert_eq!(to_fixed(hex(255)), "0xff");
//! assert_eq!(to_fixed(bin(5)), "0b101");
//! assert_eq!(to_fixed(pad_left(7, 3, '0')), "007");
//! assert_eq!(to_fixed(-42), "-42");
//! ```

mod options;
mod render;

use std::fmt;
use render::Rendering;
use crate::{CodeUnit, FixedStr, NUMBER_CAPACITY};
pub use options::FormatOptions;

mod sealed {
	use super::{FormatOptions, Rendering};

	pub trait Numeric {
		fn render(self, options: &FormatOptions) -> Rendering;
	}
}

/// A primitive integer or float that can be rendered.
pub trait Numeric: sealed::Numeric + Copy { }

/// A primitive integer, the only numbers rendered in a radix other than decimal.
pub trait Integer: Numeric { }

/// A value that can be rendered into a fixed string.
pub trait FormatUnits {
	/// Renders the value into the end of `out`, clamped to its capacity. Returns
	/// the number of units written.
	fn render_into<T: CodeUnit, const C: usize>(&self, out: &mut FixedStr<T, C>) -> usize;

	/// Renders the value into a new fixed string, clamped to its capacity.
	fn to_fixed<T: CodeUnit, const C: usize>(&self) -> FixedStr<T, C> {
		let mut str = FixedStr::new();
		self.render_into(&mut str);
		str
	}
}

/// A number paired with options for rendering it.
#[derive(Copy, Clone, Debug)]
pub struct Formatted<N> {
	value: N,
	options: FormatOptions,
}

impl<N> Formatted<N> {
	/// Returns the number.
	pub fn value(&self) -> &N { &self.value }
	/// Returns the format options.
	pub fn options(&self) -> &FormatOptions { &self.options }
}

macro_rules! integer {
	($($signed:ident $unsigned:ident),+) => {
		$(
		impl sealed::Numeric for $signed {
			#[inline]
			fn render(self, options: &FormatOptions) -> Rendering {
				Rendering::integer(
					self < 0,
					self.unsigned_abs() as u128,
					self as $unsigned as u128,
					options
				)
			}
		}

		impl sealed::Numeric for $unsigned {
			#[inline]
			fn render(self, options: &FormatOptions) -> Rendering {
				Rendering::integer(false, self as u128, self as u128, options)
			}
		}

		impl Numeric for $signed { }
		impl Numeric for $unsigned { }
		impl Integer for $signed { }
		impl Integer for $unsigned { }
		)+
	};
}

integer! { i8 u8, i16 u16, i32 u32, i64 u64, i128 u128, isize usize }

impl sealed::Numeric for f64 {
	#[inline]
	fn render(self, options: &FormatOptions) -> Rendering {
		Rendering::float(self, options)
	}
}

impl sealed::Numeric for f32 {
	#[inline]
	fn render(self, options: &FormatOptions) -> Rendering {
		Rendering::float(self.into(), options)
	}
}

impl Numeric for f64 { }
impl Numeric for f32 { }

impl<N: Numeric> FormatUnits for N {
	fn render_into<T: CodeUnit, const C: usize>(&self, out: &mut FixedStr<T, C>) -> usize {
		FormatOptions::new().format(*self)
							.render_into(out)
	}
}

impl<N: Numeric> FormatUnits for Formatted<N> {
	fn render_into<T: CodeUnit, const C: usize>(&self, out: &mut FixedStr<T, C>) -> usize {
		sealed::Numeric::render(self.value, &self.options).write(&self.options, out)
	}
}

impl FormatUnits for bool {
	/// Renders `true` or `false`.
	fn render_into<T: CodeUnit, const C: usize>(&self, out: &mut FixedStr<T, C>) -> usize {
		out.push_str(if *self { "true" } else { "false" })
	}
}

impl<N: Numeric> fmt::Display for Formatted<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.to_fixed::<u8, NUMBER_CAPACITY>(), f)
	}
}

/// Renders `value` in lowercase hexadecimal, marked with `0x`. Negative values
/// render their two's-complement bits.
///
/// Only integers are accepted:
///
/// ```compile_fail
/// let _ = fixstr::hex(255.0);
/// ```
#[inline]
pub fn hex<N: Integer>(value: N) -> Formatted<N> {
	FormatOptions::hex().format(value)
}

/// Renders `value` in uppercase hexadecimal, marked with `0x`.
#[inline]
pub fn hex_upper<N: Integer>(value: N) -> Formatted<N> {
	FormatOptions::hex().with_uppercase(true).format(value)
}

/// Renders `value` in binary, marked with `0b`.
#[inline]
pub fn bin<N: Integer>(value: N) -> Formatted<N> {
	FormatOptions::binary().format(value)
}

/// Renders `value` in octal, marked with `0o`.
#[inline]
pub fn oct<N: Integer>(value: N) -> Formatted<N> {
	FormatOptions::octal().format(value)
}

/// Renders `value` in decimal, left-padded to `width` with `fill`.
#[inline]
pub fn pad_left<N: Integer>(value: N, width: usize, fill: char) -> Formatted<N> {
	FormatOptions::padded(width, fill).format(value)
}

/// Renders `value` with `precision` fractional digits, truncated.
#[inline]
pub fn float<N: Numeric>(value: N, precision: usize) -> Formatted<N> {
	FormatOptions::new().with_precision(precision).format(value)
}

/// Renders `value` into a byte string large enough for any integer.
#[inline]
pub fn to_fixed(value: impl FormatUnits) -> FixedStr<u8, NUMBER_CAPACITY> {
	value.to_fixed()
}
