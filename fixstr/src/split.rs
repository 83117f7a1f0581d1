// SPDX-License-Identifier: Apache-2.0

//! Splitting, partitioning, and joining.
//!
//! Splits never emit empty tokens: runs of consecutive delimiters, and
//! delimiters at either end, produce nothing. Splitting then joining is therefore
//! not a round trip for strings with empty fields.
//!
//! ```
//! use fixstr::{FixedStr, join, split};
//!
//! let str = FixedStr::<u8, 16>::from("a,,b");
//! let parts = split(&str, b',');
//! assert_eq!(parts.len(), 2);
//! let joined: FixedStr<u8, 16> = join(&parts, ",");
//! assert_eq!(joined, "a,b");
//! ```

use std::ops::Deref;
use arrayvec::ArrayVec;
use itertools::{Itertools, Position};
use log::trace;
use crate::fixed_str::search::{find_units, rfind_units};
use crate::{AsUnits, CodeUnit, DEFAULT_MAX_PARTS, FixedStr};

/// Up to `P` non-empty tokens split from a string of capacity `C`, in
/// left-to-right order. Tokens past `P` are dropped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitResult<T: CodeUnit, const C: usize, const P: usize = DEFAULT_MAX_PARTS> {
	parts: ArrayVec<FixedStr<T, C>, P>,
}

impl<T: CodeUnit, const C: usize, const P: usize> SplitResult<T, C, P> {
	/// The maximum number of tokens held.
	pub const MAX_PARTS: usize = P;

	/// Creates an empty result.
	pub const fn new() -> Self {
		Self { parts: ArrayVec::new_const() }
	}

	/// Splits `str` at each occurrence of `delim`, a unit or a unit sequence. An
	/// empty `delim` yields the whole string as one token.
	pub fn split(str: &FixedStr<T, C>, delim: impl AsUnits<Unit = T>) -> Self {
		let units = str.as_units();
		let delim = delim.as_units();
		let mut result = Self::new();
		if delim.is_empty() {
			result.push(units);
			return result
		}

		let mut start = 0;
		while let Some(found) = find_units(units, delim, start) {
			if !result.push(&units[start..found]) {
				return result
			}
			start = found + delim.len();
		}
		result.push(&units[start..]);
		result
	}

	/// Splits `str` at each occurrence of `delim`, scanning from the right. The
	/// tokens are in left-to-right order, but when there are more than `P`, the
	/// rightmost are kept rather than the leftmost.
	pub fn rsplit(str: &FixedStr<T, C>, delim: impl AsUnits<Unit = T>) -> Self {
		let units = str.as_units();
		let delim = delim.as_units();
		let mut result = Self::new();
		if delim.is_empty() {
			result.push(units);
			return result
		}

		let mut end = units.len();
		loop {
			let head = &units[..end];
			let Some(found) = rfind_units(head, delim, usize::MAX) else {
				result.push(head);
				break
			};

			if !result.push(&head[found + delim.len()..]) {
				break
			}
			end = found;
		}
		result.parts.reverse();
		result
	}

	/// Splits `str` at each unit matching `pred`.
	pub fn split_matches(str: &FixedStr<T, C>, mut pred: impl FnMut(T) -> bool) -> Self {
		let mut result = Self::new();
		for token in str.as_units().split(|&u| pred(u)) {
			if !result.push(token) {
				break
			}
		}
		result
	}

	/// Splits `str` into lines ending in `\n`, `\r`, or `\r\n`.
	pub fn split_lines(str: &FixedStr<T, C>) -> Self {
		// CRLF leaves an empty token between its units, skipped like any other.
		Self::split_matches(str, |u| matches!(u.as_ascii(), Some(b'\n' | b'\r')))
	}

	/// Splits `str` at runs of whitespace.
	pub fn split_whitespace(str: &FixedStr<T, C>) -> Self {
		Self::split_matches(str, T::is_space)
	}

	/// Appends a token, clamped to the capacity `C`. Empty tokens are skipped.
	/// Returns `false` if the token was dropped because the result is full.
	pub fn push(&mut self, token: impl AsUnits<Unit = T>) -> bool {
		let token = token.as_units();
		if token.is_empty() {
			return true
		}

		let token = FixedStr::from_units(token);
		if self.parts.try_push(token).is_err() {
			trace!("Dropped split tokens past the limit of {P} parts");
			return false
		}
		true
	}

	/// Returns `true` if the result holds `P` tokens.
	#[inline]
	pub fn is_full(&self) -> bool { self.parts.is_full() }

	/// Returns the tokens as a slice.
	#[inline]
	pub fn as_slice(&self) -> &[FixedStr<T, C>] { &self.parts }

	/// Joins the tokens into a string of capacity `R`, with `delim` between each
	/// pair. See [`join`].
	#[inline]
	pub fn join<const R: usize>(&self, delim: impl AsUnits<Unit = T>) -> FixedStr<T, R> {
		join(self, delim)
	}
}

impl<T: CodeUnit, const C: usize, const P: usize> Default for SplitResult<T, C, P> {
	fn default() -> Self { Self::new() }
}

impl<T: CodeUnit, const C: usize, const P: usize> Deref for SplitResult<T, C, P> {
	type Target = [FixedStr<T, C>];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.parts }
}

impl<T: CodeUnit, const C: usize, const P: usize> IntoIterator for SplitResult<T, C, P> {
	type Item = FixedStr<T, C>;
	type IntoIter = arrayvec::IntoIter<FixedStr<T, C>, P>;

	fn into_iter(self) -> Self::IntoIter { self.parts.into_iter() }
}

impl<'a, T: CodeUnit, const C: usize, const P: usize> IntoIterator for &'a SplitResult<T, C, P> {
	type Item = &'a FixedStr<T, C>;
	type IntoIter = std::slice::Iter<'a, FixedStr<T, C>>;

	fn into_iter(self) -> Self::IntoIter { self.parts.iter() }
}

/// Splits `str` at each occurrence of `delim` into up to [`DEFAULT_MAX_PARTS`]
/// tokens. Use [`SplitResult::split`] for a different limit.
///
/// ```
/// use fixstr::{FixedStr, split};
///
/// let parts = split(&FixedStr::<u8, 8>::from("a,b,c"), b',');
/// assert_eq!(parts.as_slice(), ["a", "b", "c"]);
/// ```
pub fn split<T: CodeUnit, const C: usize>(
	str: &FixedStr<T, C>,
	delim: impl AsUnits<Unit = T>
) -> SplitResult<T, C> {
	SplitResult::split(str, delim)
}

/// Splits `str` at each occurrence of `delim` from the right.
pub fn rsplit<T: CodeUnit, const C: usize>(
	str: &FixedStr<T, C>,
	delim: impl AsUnits<Unit = T>
) -> SplitResult<T, C> {
	SplitResult::rsplit(str, delim)
}

/// Splits `str` into lines.
pub fn split_lines<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> SplitResult<T, C> {
	SplitResult::split_lines(str)
}

/// Splits `str` at runs of whitespace.
pub fn split_whitespace<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> SplitResult<T, C> {
	SplitResult::split_whitespace(str)
}

/// Concatenates `parts` with `delim` between each consecutive pair, into a
/// string of capacity `R`. The content is clamped if `R` is too small; size it
/// for the worst case, the sum of the part lengths plus the delimiters.
pub fn join<T: CodeUnit, const R: usize>(
	parts: impl IntoIterator<Item = impl AsUnits<Unit = T>>,
	delim: impl AsUnits<Unit = T>
) -> FixedStr<T, R> {
	let delim = delim.as_units();
	let mut str = FixedStr::new();
	for part in parts.into_iter().with_position() {
		match part {
			Position::First(part) | Position::Only(part) => {
				str.append(part);
			}
			Position::Middle(part) | Position::Last(part) => {
				str.append(delim);
				str.append(part);
			}
		}
	}
	str
}

/// A string split in two around a delimiter.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Partition<T: CodeUnit, const C: usize> {
	/// The content before the delimiter, or the whole string if not found.
	pub first: FixedStr<T, C>,
	/// The content after the delimiter, empty if not found.
	pub second: FixedStr<T, C>,
	/// Whether the delimiter was found.
	pub found: bool,
}

impl<T: CodeUnit, const C: usize> Partition<T, C> {
	fn at(str: &FixedStr<T, C>, pos: Option<usize>, delim: &[T]) -> Self {
		match pos {
			Some(pos) => Self {
				first: str.substr(0, pos),
				second: str.substr(pos + delim.len(), usize::MAX),
				found: true,
			},
			None => Self {
				first: *str,
				second: FixedStr::new(),
				found: false,
			}
		}
	}
}

/// Splits `str` around the first occurrence of `delim`.
///
/// ```
/// use fixstr::{FixedStr, partition};
///
/// let part = partition(&FixedStr::<u8, 16>::from("key=value=x"), b'=');
/// assert!(part.found);
/// assert_eq!(part.first, "key");
/// assert_eq!(part.second, "value=x");
/// ```
pub fn partition<T: CodeUnit, const C: usize>(
	str: &FixedStr<T, C>,
	delim: impl AsUnits<Unit = T>
) -> Partition<T, C> {
	let delim = delim.as_units();
	Partition::at(str, str.find(delim), delim)
}

/// Splits `str` around the last occurrence of `delim`.
pub fn rpartition<T: CodeUnit, const C: usize>(
	str: &FixedStr<T, C>,
	delim: impl AsUnits<Unit = T>
) -> Partition<T, C> {
	let delim = delim.as_units();
	Partition::at(str, str.rfind(delim), delim)
}
