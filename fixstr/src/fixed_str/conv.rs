// SPDX-License-Identifier: Apache-2.0

use std::convert::Infallible;
use std::str::FromStr;
use std::{fmt, io};
use log::trace;
use crate::{CodeUnit, FixedStr};

impl<T: CodeUnit, const C: usize> FixedStr<T, C> {
	/// Appends the encoding of `char`, returning `false` without writing if its
	/// units don't all fit.
	pub fn push_char(&mut self, char: char) -> bool {
		let mut buf = [T::ZERO; 4];
		let units = T::encode_char(char, &mut buf);
		if units.len() > self.available() {
			trace!(
				"Dropped a {}-unit character from a fixed string with {} units available",
				units.len(),
				self.available()
			);
			return false
		}

		self.append(units);
		true
	}

	/// Appends the encoding of each character in `str` until one doesn't fit,
	/// returning the number of units written. Characters are never split.
	pub fn push_str(&mut self, str: &str) -> usize {
		let start = self.len();
		for char in str.chars() {
			if !self.push_char(char) {
				break
			}
		}
		self.len() - start
	}
}

impl<T: CodeUnit, const C: usize> From<&str> for FixedStr<T, C> {
	/// Transcodes `value` into the unit width, stopping at the last character
	/// that fits entirely.
	fn from(value: &str) -> Self {
		let mut str = Self::new();
		str.push_str(value);
		str
	}
}

impl<T: CodeUnit, const C: usize> From<&String> for FixedStr<T, C> {
	fn from(value: &String) -> Self { value.as_str().into() }
}

impl<T: CodeUnit, const C: usize> FromStr for FixedStr<T, C> {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(s.into()) }
}

impl<T: CodeUnit, const C: usize> From<&FixedStr<T, C>> for String {
	/// Decodes the units into an owned string, lossily.
	fn from(value: &FixedStr<T, C>) -> Self {
		T::decode_lossy(value.as_units()).collect()
	}
}

impl<T: CodeUnit, const C: usize> From<FixedStr<T, C>> for String {
	fn from(value: FixedStr<T, C>) -> Self { (&value).into() }
}

impl<T: CodeUnit, const C: usize> FromIterator<T> for FixedStr<T, C> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut str = Self::new();
		str.extend(iter);
		str
	}
}

impl<T: CodeUnit, const C: usize> Extend<T> for FixedStr<T, C> {
	/// Pushes units until the string is full. Remaining units are not consumed.
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		let available = self.available();
		for unit in iter.into_iter().take(available) {
			self.push(unit);
		}
	}
}

impl<'a, T: CodeUnit, const C: usize> Extend<&'a T> for FixedStr<T, C> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.extend(iter.into_iter().copied())
	}
}

impl<T: CodeUnit, const C: usize> fmt::Write for FixedStr<T, C> {
	/// Writes as many whole characters of `s` as fit. Never fails; a full string
	/// silently drops the rest.
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.push_str(s);
		Ok(())
	}

	fn write_char(&mut self, c: char) -> fmt::Result {
		self.push_char(c);
		Ok(())
	}
}

impl<const C: usize> io::Write for FixedStr<u8, C> {
	/// Writes as many bytes as fit, returning the count. A full string returns
	/// zero, which `write_all` reports as [`io::ErrorKind::WriteZero`].
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		Ok(self.append(buf))
	}

	fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
