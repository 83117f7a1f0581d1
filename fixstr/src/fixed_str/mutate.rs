// SPDX-License-Identifier: Apache-2.0

use std::ops::AddAssign;
use log::trace;
use crate::{AsUnits, CodeUnit, FixedStr};

impl<T: CodeUnit, const C: usize> FixedStr<T, C> {
	/// Clamps a write of `count` units to the space available.
	fn clamp_write(&self, count: usize) -> usize {
		let available = self.available();
		if count > available {
			trace!(
				"Clamped a write of {count} units to {available}, the space left in a \
				fixed string of capacity {C}"
			);
			available
		} else {
			count
		}
	}

	/// Appends units from `src`, clamped to the space available. Returns the
	/// number of units written.
	pub fn append(&mut self, src: impl AsUnits<Unit = T>) -> usize {
		let src = src.as_units();
		let count = self.clamp_write(src.len());
		let len = self.len();
		self.data[len..len + count].copy_from_slice(&src[..count]);
		self.set_len(len + count);
		count
	}

	/// Appends `count` copies of `unit`, clamped to the space available. Returns
	/// the number of units written.
	pub fn append_repeat(&mut self, count: usize, unit: T) -> usize {
		let count = self.clamp_write(count);
		let len = self.len();
		self.data[len..len + count].fill(unit);
		self.set_len(len + count);
		count
	}

	/// Replaces the content with units from `src`, clamped to the capacity.
	/// Returns the number of units written.
	pub fn assign(&mut self, src: impl AsUnits<Unit = T>) -> usize {
		self.clear();
		self.append(src)
	}

	/// Inserts units from `src` at `pos`, shifting the tail right. The inserted
	/// count is clamped to the space available; the tail is never dropped. Has
	/// no effect if `pos` is past the end. Returns the number of units inserted.
	pub fn insert(&mut self, pos: usize, src: impl AsUnits<Unit = T>) -> usize {
		let len = self.len();
		if pos > len {
			return 0
		}

		let src = src.as_units();
		let count = self.clamp_write(src.len());
		self.data.copy_within(pos..len, pos + count);
		self.data[pos..pos + count].copy_from_slice(&src[..count]);
		self.set_len(len + count);
		count
	}

	/// Removes up to `count` units starting at `pos`, shifting the tail left. Has
	/// no effect if `pos` is not less than the length. Returns the number of units
	/// removed.
	pub fn erase(&mut self, pos: usize, count: usize) -> usize {
		let len = self.len();
		if pos >= len {
			return 0
		}

		let count = count.min(len - pos);
		self.data.copy_within(pos + count..len, pos);
		self.set_len(len - count);
		count
	}

	/// Removes and returns the unit at `pos`, or `None` if out of bounds.
	pub fn remove(&mut self, pos: usize) -> Option<T> {
		let unit = *self.get(pos)?;
		self.erase(pos, 1);
		Some(unit)
	}

	/// Replaces up to `count` units at `pos` with units from `src`, equivalent to
	/// erasing then inserting at `pos`. Returns the number of units inserted.
	pub fn replace(&mut self, pos: usize, count: usize, src: impl AsUnits<Unit = T>) -> usize {
		self.erase(pos, count);
		self.insert(pos, src)
	}

	/// Reverses the units in place.
	#[inline]
	pub fn reverse(&mut self) {
		self.as_mut_units().reverse()
	}

	/// Returns up to `count` units starting at `pos`, in a string of the same
	/// capacity. Returns an empty string if `pos` is past the end.
	pub fn substr(&self, pos: usize, count: usize) -> Self {
		let units = self.as_units();
		let start = pos.min(units.len());
		let end = start + count.min(units.len() - start);
		Self::from_units(&units[start..end])
	}
}

/// Concatenates `a` and `b` into a string of capacity `R`, clamping if `R` is
/// too small to hold both.
///
/// ```
/// use fixstr::{concat, FixedStr};
///
/// let a = FixedStr::<u8, 4>::from("foo");
/// let joined: FixedStr<u8, 8> = concat(&a, "bar");
/// assert_eq!(joined, "foobar");
/// ```
pub fn concat<T: CodeUnit, const R: usize>(
	a: impl AsUnits<Unit = T>,
	b: impl AsUnits<Unit = T>
) -> FixedStr<T, R> {
	let mut str = FixedStr::from_units(a);
	str.append(b);
	str
}

impl<T: CodeUnit, const C: usize, V: AsUnits<Unit = T>> AddAssign<V> for FixedStr<T, C> {
	/// Appends `rhs`, clamped to the capacity.
	#[inline]
	fn add_assign(&mut self, rhs: V) {
		self.append(rhs);
	}
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;
	use quickcheck_macros::quickcheck;
	use crate::FixedStr;

	type Str8 = FixedStr<u8, 8>;

	#[test]
	fn append_clamps() {
		let mut str = FixedStr::<u8, 5>::new();
		assert_eq!(str.assign("12345"), 5);
		assert_eq!(str.append("6"), 0);
		assert!(str.is_full());
		assert_eq!(str, "12345");
		assert_eq!(str.as_units_with_nul(), b"12345\0");
	}

	#[test]
	fn append_single_unit() {
		let mut str = Str8::from("ab");
		str += b'c';
		str += "de";
		assert_eq!(str, "abcde");
	}

	#[test]
	fn insert_shifts_tail() {
		let mut str = Str8::from("held");
		assert_eq!(str.insert(2, "llo wor"), 4);
		assert_eq!(str, "hello ld");
		let mut str = Str8::from("ad");
		assert_eq!(str.insert(1, "bc"), 2);
		assert_eq!(str, "abcd");
		assert_eq!(str.insert(4, "e"), 1);
		assert_eq!(str, "abcde");
		assert_eq!(str.insert(9, "x"), 0);
		assert_eq!(str, "abcde");
	}

	#[test]
	fn erase_clamps_count() {
		let mut str = Str8::from("abcdef");
		assert_eq!(str.erase(1, 2), 2);
		assert_eq!(str, "adef");
		assert_eq!(str.erase(2, 100), 2);
		assert_eq!(str, "ad");
		assert_eq!(str.erase(2, 1), 0);
		assert_eq!(str.as_units_with_nul(), b"ad\0");
	}

	#[test]
	fn replace_range() {
		let mut str = Str8::from("a-b");
		assert_eq!(str.replace(1, 1, "::"), 2);
		assert_eq!(str, "a::b");
		assert_eq!(str.remove(0), Some(b'a'));
		assert_eq!(str.remove(9), None);
	}

	#[test]
	fn reverse_in_place() {
		let mut str = Str8::from("abc");
		str.reverse();
		assert_eq!(str, "cba");
	}

	#[test]
	fn substr_bounds() {
		let str = Str8::from("hello");
		assert_eq!(str.substr(1, 3), "ell");
		assert_eq!(str.substr(3, 10), "lo");
		assert_eq!(str.substr(7, 1), "");
	}

	#[quickcheck]
	fn substr_reembeds(data: Vec<u8>, pos: usize, count: usize) -> bool {
		let str = FixedStr::<u8, 32>::from_units(&data[..]);
		let pos = pos % (str.len() + 1);
		let count = count % (str.len() - pos + 1);
		let sub = str.substr(pos, count);
		let mut copy = str;
		copy.replace(pos, count, sub);
		copy == str
	}

	#[quickcheck]
	fn insert_then_erase(data: Vec<u8>, ins: Vec<u8>, pos: usize) -> bool {
		let str = FixedStr::<u8, 16>::from_units(&data[..]);
		let pos = pos % (str.len() + 1);
		let mut copy = str;
		let count = copy.insert(pos, &ins[..]);
		copy.erase(pos, count);
		copy == str && copy.as_units_with_nul()[copy.len()] == 0
	}
}
