// SPDX-License-Identifier: Apache-2.0

use arrayvec::ArrayVec;
use crate::{CodeUnit, FixedStr, FormatOptions, Radix};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Integer digits, most-significant first. Enough for a 128-bit integer in
/// binary.
type Digits = ArrayVec<u8, 128>;

/// A number broken into the pieces of its rendering, so that its length is known
/// before anything is written.
pub struct Rendering {
	negative: bool,
	prefix: &'static str,
	digits: Digits,
	fraction: Option<Fraction>,
}

#[derive(Copy, Clone)]
struct Fraction {
	value: f64,
	precision: usize,
}

impl Radix {
	/// Returns the literal marker for the radix, if any.
	pub(crate) fn marker(self) -> &'static str {
		match self {
			Self::BIN => "0b",
			Self::OCT => "0o",
			Self::HEX => "0x",
			_ => ""
		}
	}
}

fn digits(mut value: u128, radix: Radix, uppercase: bool) -> Digits {
	let radix = radix.get() as u128;
	let mut digits = Digits::new();
	loop {
		let digit = DIGITS[(value % radix) as usize];
		digits.push(if uppercase { digit.to_ascii_uppercase() } else { digit });
		value /= radix;
		if value == 0 {
			break
		}
	}
	digits.reverse();
	digits
}

impl Rendering {
	/// Renders an integer from its sign and magnitude, or its two's-complement
	/// `bits` outside decimal.
	pub fn integer(negative: bool, magnitude: u128, bits: u128, options: &FormatOptions) -> Self {
		let FormatOptions { radix, uppercase, prefix, .. } = *options;
		let (negative, value) = if radix == Radix::DEC {
			(negative, magnitude)
		} else {
			(false, bits)
		};

		Self {
			negative,
			prefix: if prefix { radix.marker() } else { "" },
			digits: digits(value, radix, uppercase),
			fraction: None,
		}
	}

	/// Renders a float in decimal. The integer part saturates at the `u128` range.
	pub fn float(value: f64, options: &FormatOptions) -> Self {
		if value.is_nan() {
			return Self::special(false, b"nan")
		}

		if value.is_infinite() {
			return Self::special(value < 0.0, b"inf")
		}

		let negative = value < 0.0;
		let value = value.abs();
		let int = value.trunc();
		Self {
			negative,
			prefix: "",
			digits: digits(int as u128, Radix::DEC, false),
			fraction: Some(Fraction {
				value: value - int,
				precision: options.precision,
			}),
		}
	}

	fn special(negative: bool, name: &[u8]) -> Self {
		let mut digits = Digits::new();
		digits.extend(name.iter().copied());
		Self {
			negative,
			prefix: "",
			digits,
			fraction: None,
		}
	}

	fn len(&self) -> usize {
		let fraction = match self.fraction {
			Some(Fraction { precision, .. }) if precision > 0 => precision + 1,
			_ => 0
		};
		self.negative as usize + self.prefix.len() + self.digits.len() + fraction
	}

	/// Writes the rendering into `out`, padded to the option width and clamped
	/// to the capacity. Returns the number of units written.
	///
	/// The width is measured in units of `T`. A fill encoding to several units is
	/// repeated only while a whole copy fits within the width.
	pub fn write<T: CodeUnit, const C: usize>(
		&self,
		options: &FormatOptions,
		out: &mut FixedStr<T, C>
	) -> usize {
		let start = out.len();
		let mut buf = [T::ZERO; 4];
		let fill = T::encode_char(options.fill, &mut buf);
		let copies = options.width.saturating_sub(self.len()) / fill.len();
		for _ in 0..copies {
			if !out.push_char(options.fill) {
				break
			}
		}

		if self.negative {
			out.push(T::from_ascii(b'-'));
		}
		out.extend(self.prefix.bytes().map(T::from_ascii));
		out.extend(self.digits.iter().map(|&d| T::from_ascii(d)));

		if let Some(Fraction { mut value, precision }) = self.fraction {
			if precision > 0 {
				out.push(T::from_ascii(b'.'));
			}

			for _ in 0..precision {
				if out.is_full() {
					break
				}

				value *= 10.0;
				let digit = value.trunc();
				value -= digit;
				out.push(T::from_ascii(b'0' + (digit as u8).min(9)));
			}
		}
		out.len() - start
	}
}
