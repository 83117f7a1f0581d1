// SPDX-License-Identifier: Apache-2.0

//! ASCII case conversion and trimming. Each function copies its input into a new
//! string of the *same* capacity; capacity is never reduced to fit the result.
//! In-place counterparts are provided as methods on [`FixedStr`].
//!
//! ```
//! use fixstr::{FixedStr, transform::*};
//!
//! let str = FixedStr::<u8, 32>::from("  hello world  ");
//! assert_eq!(trim(&str), "hello world");
//! assert_eq!(to_title(&trim(&str)), "Hello World");
//! ```

use crate::{AsUnits, CodeUnit, FixedStr};

impl<T: CodeUnit, const C: usize> FixedStr<T, C> {
	/// Converts `A-Z` to `a-z` in place.
	pub fn make_ascii_lowercase(&mut self) {
		self.map_units(T::to_lower)
	}

	/// Converts `a-z` to `A-Z` in place.
	pub fn make_ascii_uppercase(&mut self) {
		self.map_units(T::to_upper)
	}

	/// Swaps the case of ASCII letters in place.
	pub fn toggle_ascii_case(&mut self) {
		self.map_units(T::toggle_case)
	}

	/// Capitalizes the first letter of each word and lowercases the rest, in
	/// place. A word starts at the beginning of the string or after whitespace;
	/// any other non-letter ends the chance to capitalize until the next
	/// whitespace.
	pub fn make_title_case(&mut self) {
		let mut capitalize = true;
		for unit in self {
			if unit.is_space() {
				capitalize = true;
			} else if unit.is_alpha() {
				*unit = if capitalize { unit.to_upper() } else { unit.to_lower() };
				capitalize = false;
			} else {
				capitalize = false;
			}
		}
	}

	/// Removes leading and trailing whitespace in place.
	pub fn trim_in_place(&mut self) {
		self.trim_matches_in_place(|u| u.is_space())
	}

	/// Removes leading and trailing units matching `pred` in place.
	pub fn trim_matches_in_place(&mut self, pred: impl FnMut(T) -> bool) {
		let (start, end) = trimmed_span(self.as_units(), pred, true, true);
		self.truncate(end);
		self.erase(0, start);
	}

	fn map_units(&mut self, map: impl Fn(T) -> T) {
		for unit in self {
			*unit = map(*unit);
		}
	}
}

/// Returns the bounds of `units` with units matching `pred` removed from the
/// requested ends.
fn trimmed_span<T: CodeUnit>(
	units: &[T],
	mut pred: impl FnMut(T) -> bool,
	left: bool,
	right: bool
) -> (usize, usize) {
	let start = if left {
		units.iter()
			 .position(|&u| !pred(u))
			 .unwrap_or(units.len())
	} else {
		0
	};
	let end = if right {
		units[start..].iter()
					  .rposition(|&u| !pred(u))
					  .map_or(start, |i| start + i + 1)
	} else {
		units.len()
	};
	(start, end)
}

fn trim_span<T: CodeUnit, const C: usize>(
	str: &FixedStr<T, C>,
	pred: impl FnMut(T) -> bool,
	left: bool,
	right: bool
) -> FixedStr<T, C> {
	let units = str.as_units();
	let (start, end) = trimmed_span(units, pred, left, right);
	FixedStr::from_units(&units[start..end])
}

fn mapped<T: CodeUnit, const C: usize>(
	str: &FixedStr<T, C>,
	map: impl FnOnce(&mut FixedStr<T, C>)
) -> FixedStr<T, C> {
	let mut copy = *str;
	map(&mut copy);
	copy
}

/// Returns a copy with `A-Z` converted to `a-z`.
pub fn to_lower<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	mapped(str, FixedStr::make_ascii_lowercase)
}

/// Returns a copy with `a-z` converted to `A-Z`.
pub fn to_upper<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	mapped(str, FixedStr::make_ascii_uppercase)
}

/// Returns a copy in title case, see [`FixedStr::make_title_case`].
pub fn to_title<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	mapped(str, FixedStr::make_title_case)
}

/// Returns a copy with the case of ASCII letters swapped.
pub fn toggle_case<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	mapped(str, FixedStr::toggle_ascii_case)
}

/// Returns a copy with the units in reverse order.
pub fn reversed<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	mapped(str, FixedStr::reverse)
}

/// Returns a copy without leading or trailing whitespace.
pub fn trim<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	trim_span(str, T::is_space, true, true)
}

/// Returns a copy without leading whitespace.
pub fn trim_left<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	trim_span(str, T::is_space, true, false)
}

/// Returns a copy without trailing whitespace.
pub fn trim_right<T: CodeUnit, const C: usize>(str: &FixedStr<T, C>) -> FixedStr<T, C> {
	trim_span(str, T::is_space, false, true)
}

/// Returns a copy without leading or trailing units matching `pred`.
///
/// ```
/// use fixstr::{FixedStr, trim_matches};
///
/// let str = FixedStr::<u8, 16>::from("--note--");
/// assert_eq!(trim_matches(&str, |u| u == b'-'), "note");
/// ```
pub fn trim_matches<T: CodeUnit, const C: usize>(
	str: &FixedStr<T, C>,
	pred: impl FnMut(T) -> bool
) -> FixedStr<T, C> {
	trim_span(str, pred, true, true)
}

/// Returns `true` if `a` and `b` have equal length and equal units after ASCII
/// lowercasing.
pub fn eq_ignore_case<T: CodeUnit>(a: impl AsUnits<Unit = T>, b: impl AsUnits<Unit = T>) -> bool {
	let (a, b) = (a.as_units(), b.as_units());
	a.len() == b.len() &&
	a.iter()
	 .zip(b)
	 .all(|(a, b)| a.to_lower() == b.to_lower())
}
