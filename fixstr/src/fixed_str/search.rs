// SPDX-License-Identifier: Apache-2.0

use crate::{AsUnits, CodeUnit, FixedStr};

/// Finds the first occurrence of `needle` in `haystack` at or after `from`. An
/// empty needle matches at `from` if it's within bounds.
pub(crate) fn find_units<T: Eq>(haystack: &[T], needle: &[T], from: usize) -> Option<usize> {
	if from > haystack.len() {
		return None
	}

	match needle {
		[] => Some(from),
		[unit] => haystack[from..].iter()
								  .position(|u| u == unit)
								  .map(|i| i + from),
		_ => haystack[from..].windows(needle.len())
							 .position(|w| w == needle)
							 .map(|i| i + from)
	}
}

/// Finds the last occurrence of `needle` in `haystack` starting at or before
/// `from`.
pub(crate) fn rfind_units<T: Eq>(haystack: &[T], needle: &[T], from: usize) -> Option<usize> {
	let last_start = haystack.len().checked_sub(needle.len())?.min(from);
	if needle.is_empty() {
		return Some(last_start)
	}

	haystack[..last_start + needle.len()].windows(needle.len())
										 .rposition(|w| w == needle)
}

/// Counts the non-overlapping occurrences of `needle` in `haystack`. Each match
/// advances the scan past itself, so `"aaa"` contains `"aa"` once. An empty
/// needle counts zero.
pub(crate) fn count_units<T: Eq>(haystack: &[T], needle: &[T]) -> usize {
	if needle.is_empty() {
		return 0
	}

	let mut count = 0;
	let mut pos = 0;
	while let Some(found) = find_units(haystack, needle, pos) {
		count += 1;
		pos = found + needle.len();
	}
	count
}

impl<T: CodeUnit, const C: usize> FixedStr<T, C> {
	/// Returns the position of the first occurrence of `needle`, a unit or a unit
	/// sequence, or `None` if not found.
	///
	/// ```
	/// use fixstr::FixedStr;
	///
	/// let str = FixedStr::<u8, 16>::from("hello world");
	/// assert_eq!(str.find("world"), Some(6));
	/// assert_eq!(str.find(b'o'), Some(4));
	/// assert_eq!(str.find("xyz"), None);
	/// ```
	#[inline]
	pub fn find(&self, needle: impl AsUnits<Unit = T>) -> Option<usize> {
		self.find_from(needle, 0)
	}

	/// Returns the position of the first occurrence of `needle` at or after `pos`.
	#[inline]
	pub fn find_from(&self, needle: impl AsUnits<Unit = T>, pos: usize) -> Option<usize> {
		find_units(self.as_units(), needle.as_units(), pos)
	}

	/// Returns the position of the last occurrence of `needle`.
	#[inline]
	pub fn rfind(&self, needle: impl AsUnits<Unit = T>) -> Option<usize> {
		self.rfind_from(needle, usize::MAX)
	}

	/// Returns the position of the last occurrence of `needle` starting at or
	/// before `pos`. A `pos` past the end scans from the end.
	#[inline]
	pub fn rfind_from(&self, needle: impl AsUnits<Unit = T>, pos: usize) -> Option<usize> {
		rfind_units(self.as_units(), needle.as_units(), pos)
	}

	/// Returns `true` if `needle` occurs in the string.
	#[inline]
	pub fn contains(&self, needle: impl AsUnits<Unit = T>) -> bool {
		self.find(needle).is_some()
	}

	/// Returns `true` if any unit in `set` occurs in the string.
	///
	/// ```
	/// use fixstr::FixedStr;
	///
	/// let str = FixedStr::<u8, 16>::from("key=value");
	/// assert!(str.contains_any("=:"));
	/// assert!(!str.contains_any(" \t"));
	/// ```
	#[inline]
	pub fn contains_any(&self, set: impl AsUnits<Unit = T>) -> bool {
		self.find_first_of(set).is_some()
	}

	/// Returns `true` if the string begins with `prefix`.
	#[inline]
	pub fn starts_with(&self, prefix: impl AsUnits<Unit = T>) -> bool {
		self.as_units().starts_with(prefix.as_units())
	}

	/// Returns `true` if the string ends with `suffix`.
	#[inline]
	pub fn ends_with(&self, suffix: impl AsUnits<Unit = T>) -> bool {
		self.as_units().ends_with(suffix.as_units())
	}

	/// Counts the non-overlapping occurrences of `needle`. For a single unit,
	/// this counts every matching unit.
	///
	/// ```
	/// use fixstr::FixedStr;
	///
	/// let str = FixedStr::<u8, 16>::from("hello world");
	/// assert_eq!(str.count("l"), 3);
	/// assert_eq!(str.count("ll"), 1);
	/// assert_eq!(FixedStr::<u8, 4>::from("aaaa").count("aa"), 2);
	/// ```
	#[inline]
	pub fn count(&self, needle: impl AsUnits<Unit = T>) -> usize {
		count_units(self.as_units(), needle.as_units())
	}

	/// Returns the position of the first unit contained in `set`.
	pub fn find_first_of(&self, set: impl AsUnits<Unit = T>) -> Option<usize> {
		let set = set.as_units();
		self.iter().position(|u| set.contains(u))
	}

	/// Returns the position of the last unit contained in `set`.
	pub fn find_last_of(&self, set: impl AsUnits<Unit = T>) -> Option<usize> {
		let set = set.as_units();
		self.iter().rposition(|u| set.contains(u))
	}

	/// Returns the position of the first unit not contained in `set`.
	pub fn find_first_not_of(&self, set: impl AsUnits<Unit = T>) -> Option<usize> {
		let set = set.as_units();
		self.iter().position(|u| !set.contains(u))
	}

	/// Returns the position of the last unit not contained in `set`.
	pub fn find_last_not_of(&self, set: impl AsUnits<Unit = T>) -> Option<usize> {
		let set = set.as_units();
		self.iter().rposition(|u| !set.contains(u))
	}
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;
	use quickcheck_macros::quickcheck;
	use crate::FixedStr;
	use super::{count_units, find_units, rfind_units};

	type Str = FixedStr<u8, 16>;

	#[test]
	fn find_empty_needle() {
		assert_eq!(find_units(b"abc", b"", 0), Some(0));
		assert_eq!(find_units(b"abc", b"", 3), Some(3));
		assert_eq!(find_units(b"abc", b"", 4), None);
		assert_eq!(rfind_units(b"abc", b"", 1), Some(1));
		assert_eq!(rfind_units(b"abc", b"", 9), Some(3));
	}

	#[test]
	fn find_from_offset() {
		assert_eq!(find_units(b"abcabc", b"bc", 2), Some(4));
		assert_eq!(find_units(b"abcabc", b"c", 6), None);
		assert_eq!(find_units(b"ab", b"abc", 0), None);
	}

	#[test]
	fn rfind_from_offset() {
		assert_eq!(rfind_units(b"abcabc", b"bc", usize::MAX), Some(4));
		assert_eq!(rfind_units(b"abcabc", b"bc", 3), Some(1));
		assert_eq!(rfind_units(b"abcabc", b"a", 0), Some(0));
		assert_eq!(rfind_units(b"abcabc", b"c", 1), None);
		assert_eq!(rfind_units(b"ab", b"abc", 5), None);
	}

	#[test]
	fn find_from_position() {
		let str = Str::from("hello world");
		assert_eq!(str.find_from(b'o', 0), Some(4));
		assert_eq!(str.find_from(b'o', 5), Some(7));
		assert_eq!(str.find_from("world", 6), Some(6));
		assert_eq!(str.find_from("world", 7), None);
		assert_eq!(str.find_from("", 11), Some(11));
		assert_eq!(str.find_from(b'h', 12), None);
	}

	#[test]
	fn rfind_from_position() {
		let str = Str::from("hello world");
		assert_eq!(str.rfind_from(b'o', 5), Some(4));
		assert_eq!(str.rfind_from(b'o', 7), Some(7));
		assert_eq!(str.rfind_from(b'o', 99), Some(7));
		assert_eq!(str.rfind_from("hello", 0), Some(0));
		assert_eq!(str.rfind_from(b'w', 5), None);
	}

	#[test]
	fn prefix_suffix() {
		let str = Str::from("hello");
		assert!(str.starts_with(b'h'));
		assert!(str.starts_with("hel"));
		assert!(str.starts_with(""));
		assert!(!str.starts_with("hello!"));
		assert!(!str.starts_with(b'o'));
		assert!(str.ends_with(b'o'));
		assert!(str.ends_with("llo"));
		assert!(str.ends_with(""));
		assert!(!str.ends_with("ohello"));
		assert!(Str::new().starts_with(""));
		assert!(!Str::new().ends_with(b'a'));
	}

	#[test]
	fn unit_sets() {
		let str = Str::from("  key=value  ");
		assert_eq!(str.find_first_of("=e"), Some(3));
		assert_eq!(str.find_last_of("=e"), Some(10));
		assert_eq!(str.find_first_not_of(b' '), Some(2));
		assert_eq!(str.find_last_not_of(b' '), Some(10));
		assert_eq!(str.find_first_of("xyz"), None);
		assert_eq!(str.find_last_of(""), None);

		let blank = Str::from("   ");
		assert_eq!(blank.find_first_not_of(b' '), None);
		assert_eq!(blank.find_last_not_of(b' '), None);
		assert_eq!(blank.find_first_not_of(""), Some(0));
	}

	#[test]
	fn contains_any_unit() {
		let str = Str::from("key=value");
		assert!(str.contains_any("=:"));
		assert!(str.contains_any(b'v'));
		assert!(!str.contains_any(" \t"));
		assert!(!str.contains_any(""));
		assert!(!Str::new().contains_any("abc"));
	}

	#[test]
	fn count_non_overlapping() {
		assert_eq!(count_units(b"hello world", b"l"), 3);
		assert_eq!(count_units(b"hello", b"ll"), 1);
		assert_eq!(count_units(b"helo", b"ll"), 0);
		assert_eq!(count_units(b"aaa", b"aa"), 1);
		assert_eq!(count_units(b"abc", b""), 0);
	}

	#[quickcheck]
	fn find_matches_std(haystack: String, needle: String) -> bool {
		find_units(haystack.as_bytes(), needle.as_bytes(), 0) ==
			haystack.find(&*needle)
	}

	#[quickcheck]
	fn rfind_matches_std(haystack: String, needle: String) -> bool {
		rfind_units(haystack.as_bytes(), needle.as_bytes(), usize::MAX) ==
			haystack.rfind(&*needle)
	}

	#[quickcheck]
	fn count_matches_std(haystack: String, needle: String) -> bool {
		needle.is_empty() ||
		count_units(haystack.as_bytes(), needle.as_bytes()) ==
			haystack.matches(&*needle).count()
	}
}
