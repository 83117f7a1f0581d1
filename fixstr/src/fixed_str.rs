// SPDX-License-Identifier: Apache-2.0

mod conv;
mod hash;
mod mutate;
pub(crate) mod search;

use std::borrow::{Borrow, BorrowMut};
use std::ops::{Index, IndexMut};
use std::slice::{self, SliceIndex};
use std::{fmt, io};
use all_asserts::debug_assert_le;
use crate::{AsUnits, CodeUnit, OutOfRange, Utf8Error};
pub use hash::*;
pub use mutate::concat;

/// A fixed-capacity string of code units, stored inline.
///
/// The string holds up to `C` units of type `T`, plus a zero terminator always
/// present directly after the content. It never allocates; writes exceeding the
/// capacity are clamped, returning the number of units actually written.
///
/// Copying the string copies the whole array. Strings of different capacities
/// interoperate: they compare, hash, and search as their content alone.
///
/// ```
/// use fixstr::FixedStr;
///
/// let mut str = FixedStr::<u8, 5>::from("12345");
/// assert_eq!(str.append("6"), 0);
/// assert!(str.is_full());
/// assert_eq!(str, "12345");
/// ```
#[derive(Copy, Clone)]
#[repr(C)]
pub struct FixedStr<T: CodeUnit, const C: usize> {
	data: [T; C],
	/// The terminator slot for a full string. Always zero.
	nul: T,
	len: usize,
}

impl<T: CodeUnit, const C: usize> FixedStr<T, C> {
	/// The maximum number of units the string can hold, excluding the terminator.
	pub const CAPACITY: usize = C;

	/// Creates an empty string.
	#[inline]
	pub const fn new() -> Self {
		Self {
			data: [T::ZERO; C],
			nul: T::ZERO,
			len: 0,
		}
	}

	/// Creates a string from `units`, clamped to the capacity.
	pub fn from_units(units: impl AsUnits<Unit = T>) -> Self {
		let mut str = Self::new();
		str.append(units);
		str
	}

	/// Creates a string from `units` up to the first zero unit, or the capacity,
	/// whichever comes first.
	pub fn from_nul_terminated(units: impl AsUnits<Unit = T>) -> Self {
		let units = units.as_units();
		let len = units.iter()
					   .take(C)
					   .position(|&u| u == T::ZERO)
					   .unwrap_or(units.len().min(C));
		Self::from_units(&units[..len])
	}

	/// Creates a string from a raw null-terminated pointer, reading up to the
	/// first zero unit or the capacity, whichever comes first.
	///
	/// # Safety
	///
	/// `ptr` must be non-null and valid for reads of every unit up to and
	/// including the first zero unit, or of `C` units if no zero unit occurs
	/// before then.
	pub unsafe fn from_ptr(ptr: *const T) -> Self {
		let mut str = Self::new();
		for i in 0..C {
			let unit = ptr.add(i).read();
			if unit == T::ZERO {
				break
			}
			str.data[i] = unit;
			str.len += 1;
		}
		str.terminate();
		str
	}

	/// Creates a string filled with `count` copies of `unit`, clamped to the
	/// capacity.
	pub fn repeat(count: usize, unit: T) -> Self {
		let mut str = Self::new();
		str.append_repeat(count, unit);
		str
	}

	/// Copies the content into a string of capacity `D`, clamping if `D` is less
	/// than the current length.
	#[inline]
	pub fn recap<const D: usize>(&self) -> FixedStr<T, D> {
		FixedStr::from_units(self)
	}

	/// Returns the maximum number of units the string can hold.
	#[inline]
	pub const fn capacity(&self) -> usize { C }
	/// Returns the length in units of the content.
	#[inline]
	pub const fn len(&self) -> usize { self.len }
	/// Returns `true` if the string is empty.
	#[inline]
	pub const fn is_empty(&self) -> bool { self.len == 0 }
	/// Returns `true` if the string is not empty.
	#[inline]
	pub const fn is_not_empty(&self) -> bool { self.len > 0 }
	/// Returns the number of units that can be written before the string is full.
	#[inline]
	pub const fn available(&self) -> usize { C - self.len }
	/// Returns `true` if the string holds `C` units.
	#[inline]
	pub const fn is_full(&self) -> bool { self.len == C }

	/// Returns a reference to the unit at `pos`, or [`OutOfRange`] if `pos` is
	/// not less than the length.
	pub fn at(&self, pos: usize) -> Result<&T, OutOfRange> {
		let len = self.len;
		self.get(pos).ok_or(OutOfRange { index: pos, len })
	}

	/// Returns a mutable reference to the unit at `pos`, or [`OutOfRange`] if
	/// `pos` is not less than the length.
	pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, OutOfRange> {
		let len = self.len;
		self.get_mut(pos).ok_or(OutOfRange { index: pos, len })
	}

	/// Returns the unit at `pos`, or `None` if out of bounds.
	#[inline]
	pub fn get(&self, pos: usize) -> Option<&T> {
		self.as_units().get(pos)
	}

	/// Returns the unit at `pos` mutably, or `None` if out of bounds.
	#[inline]
	pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
		self.as_mut_units().get_mut(pos)
	}

	/// Returns the unit at `pos` without bounds checking.
	///
	/// # Safety
	///
	/// `pos` must be less than the length.
	#[inline]
	pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
		self.as_units().get_unchecked(pos)
	}

	/// Returns the first unit, or `None` if empty.
	#[inline]
	pub fn front(&self) -> Option<&T> { self.as_units().first() }
	/// Returns the last unit, or `None` if empty.
	#[inline]
	pub fn back(&self) -> Option<&T> { self.as_units().last() }

	/// Returns the content as a slice of units.
	#[inline]
	pub fn as_units(&self) -> &[T] { &self.data[..self.len] }
	/// Returns the content as a mutable slice of units.
	#[inline]
	pub fn as_mut_units(&mut self) -> &mut [T] { &mut self.data[..self.len] }

	/// Returns the content followed by its zero terminator.
	pub fn as_units_with_nul(&self) -> &[T] {
		debug_assert_le!(self.len, C);
		// Safety: the struct is repr(C), so `nul` directly follows the `C` units
		// of `data` without padding, both having the alignment of `T`. The pointer
		// is derived from the whole struct, not just `data`, so reading into `nul`
		// stays within its provenance. `len <= C` keeps the read in bounds.
		unsafe {
			slice::from_raw_parts(
				(self as *const Self).cast::<T>(),
				self.len + 1
			)
		}
	}

	/// Returns a pointer to the first unit of a null-terminated sequence, valid
	/// as long as the string is neither moved nor mutated.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.as_units_with_nul().as_ptr()
	}

	/// Returns an iterator over the units.
	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, T> { self.as_units().iter() }
	/// Returns an iterator over mutable references to the units.
	#[inline]
	pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> { self.as_mut_units().iter_mut() }

	/// Empties the string.
	#[inline]
	pub fn clear(&mut self) {
		self.set_len(0);
	}

	/// Appends `unit`, returning `false` without writing if the string is full.
	pub fn push(&mut self, unit: T) -> bool {
		if self.is_full() {
			return false
		}

		self.data[self.len] = unit;
		self.set_len(self.len + 1);
		true
	}

	/// Removes and returns the last unit, or `None` if empty.
	pub fn pop(&mut self) -> Option<T> {
		let last = *self.back()?;
		self.set_len(self.len - 1);
		Some(last)
	}

	/// Shortens the string to `len` units. Has no effect if `len` is not less
	/// than the current length.
	pub fn truncate(&mut self, len: usize) {
		if len < self.len {
			self.set_len(len);
		}
	}

	/// Resizes the string to `len` units, clamped to the capacity, filling new
	/// space with `fill`. Returns the new length.
	pub fn resize(&mut self, len: usize, fill: T) -> usize {
		if len > self.len {
			self.append_repeat(len - self.len, fill);
		} else {
			self.truncate(len);
		}
		self.len
	}

	/// Sets the length, writing the terminator after it.
	#[inline]
	pub(crate) fn set_len(&mut self, len: usize) {
		debug_assert_le!(len, C, "fixed string length should not exceed its capacity");
		self.len = len;
		self.terminate();
	}

	/// Writes the terminator at the current length. A full string is terminated
	/// by `nul`.
	#[inline]
	fn terminate(&mut self) {
		if let Some(slot) = self.data.get_mut(self.len) {
			*slot = T::ZERO;
		}
	}
}

impl<const C: usize> FixedStr<u8, C> {
	/// Creates a byte string from `str`, clamped to the capacity. Clamping is
	/// bytewise and may split a multibyte character. Usable in constant contexts:
	///
	/// ```
	/// use fixstr::FixedStr;
	///
	/// const GREETING: FixedStr<u8, 16> = FixedStr::literal("hello");
	/// assert_eq!(GREETING, "hello");
	/// ```
	pub const fn literal(str: &str) -> Self {
		let bytes = str.as_bytes();
		let len = if bytes.len() < C { bytes.len() } else { C };
		let mut data = [0; C];
		let mut i = 0;
		while i < len {
			data[i] = bytes[i];
			i += 1;
		}
		Self { data, nul: 0, len }
	}

	/// Returns the content as a string slice if it's valid UTF-8.
	pub fn as_str(&self) -> Result<&str, Utf8Error> {
		simdutf8::compat::from_utf8(self.as_units())
	}

	/// Writes exactly the content to `sink`, without padding or terminator.
	pub fn write_to(&self, mut sink: impl io::Write) -> io::Result<()> {
		sink.write_all(self.as_units())
	}
}

impl<T: CodeUnit, const C: usize> Default for FixedStr<T, C> {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl<T: CodeUnit, const C: usize> fmt::Display for FixedStr<T, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		T::write_units(self.as_units(), f)
	}
}

impl<T: CodeUnit, const C: usize> fmt::Debug for FixedStr<T, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use fmt::Write;

		f.write_char('"')?;
		for char in T::decode_lossy(self.as_units()) {
			for esc in char.escape_debug() {
				f.write_char(esc)?;
			}
		}
		f.write_char('"')
	}
}

impl<T: CodeUnit, const C: usize> AsUnits for FixedStr<T, C> {
	type Unit = T;

	#[inline]
	fn as_units(&self) -> &[T] { self.as_units() }
}

impl<T: CodeUnit, const C: usize, I: SliceIndex<[T]>> Index<I> for FixedStr<T, C> {
	type Output = I::Output;

	#[inline]
	fn index(&self, index: I) -> &Self::Output {
		&self.as_units()[index]
	}
}

impl<T: CodeUnit, const C: usize, I: SliceIndex<[T]>> IndexMut<I> for FixedStr<T, C> {
	#[inline]
	fn index_mut(&mut self, index: I) -> &mut Self::Output {
		&mut self.as_mut_units()[index]
	}
}

impl<T: CodeUnit, const C: usize> AsRef<[T]> for FixedStr<T, C> {
	#[inline]
	fn as_ref(&self) -> &[T] { self.as_units() }
}

impl<T: CodeUnit, const C: usize> AsMut<[T]> for FixedStr<T, C> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] { self.as_mut_units() }
}

impl<T: CodeUnit, const C: usize> Borrow<[T]> for FixedStr<T, C> {
	#[inline]
	fn borrow(&self) -> &[T] { self.as_units() }
}

impl<T: CodeUnit, const C: usize> BorrowMut<[T]> for FixedStr<T, C> {
	#[inline]
	fn borrow_mut(&mut self) -> &mut [T] { self.as_mut_units() }
}

impl<'a, T: CodeUnit, const C: usize> IntoIterator for &'a FixedStr<T, C> {
	type Item = &'a T;
	type IntoIter = slice::Iter<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T: CodeUnit, const C: usize> IntoIterator for &'a mut FixedStr<T, C> {
	type Item = &'a mut T;
	type IntoIter = slice::IterMut<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;
	use quickcheck_macros::quickcheck;
	use crate::{FixedStr, OutOfRange};

	type Str8 = FixedStr<u8, 8>;

	fn assert_terminated<const C: usize>(str: &FixedStr<u8, C>) {
		assert!(str.len() <= C);
		assert_eq!(str.as_units_with_nul()[str.len()], 0, "terminator after {str:?}");
	}

	#[test]
	fn empty() {
		let str = Str8::new();
		assert!(str.is_empty());
		assert_eq!(str.capacity(), 8);
		assert_eq!(str.available(), 8);
		assert_eq!(str.as_units_with_nul(), &[0]);
	}

	#[test]
	fn full_string_is_terminated() {
		let str = Str8::from("abcdefgh");
		assert!(str.is_full());
		assert_eq!(str.as_units_with_nul(), b"abcdefgh\0");
	}

	#[test]
	fn zero_capacity() {
		let mut str = FixedStr::<u8, 0>::from("abc");
		assert!(str.is_empty());
		assert!(str.is_full());
		assert!(!str.push(b'a'));
		assert_eq!(str.as_units_with_nul(), &[0]);
	}

	#[test]
	fn checked_access() {
		let mut str = Str8::from("abc");
		assert_eq!(str.at(2), Ok(&b'c'));
		assert_eq!(str.at(3), Err(OutOfRange { index: 3, len: 3 }));
		*str.at_mut(0).unwrap() = b'x';
		assert_eq!(str, "xbc");
		assert_eq!(
			str.at_mut(9).unwrap_err().to_string(),
			"index 9 should be less than the fixed string length 3"
		);
	}

	#[test]
	fn slice_indexing() {
		let mut str = Str8::from("abcdef");
		assert_eq!(str[1], b'b');
		assert_eq!(&str[2..4], b"cd");
		assert_eq!(&str[..], b"abcdef");
		str[0] = b'z';
		str[4..].copy_from_slice(b"yx");
		assert_eq!(str, "zbcdyx");
		assert_terminated(&str);
	}

	#[test]
	#[should_panic]
	fn index_past_length_panics() {
		let str = Str8::from("abc");
		let _ = str[3];
	}

	#[test]
	fn push_pop() {
		let mut str = FixedStr::<u8, 2>::new();
		assert!(str.push(b'a'));
		assert!(str.push(b'b'));
		assert!(!str.push(b'c'));
		assert_eq!(str, "ab");
		assert_eq!(str.pop(), Some(b'b'));
		assert_terminated(&str);
		assert_eq!(str.pop(), Some(b'a'));
		assert_eq!(str.pop(), None);
	}

	#[test]
	fn nul_terminated() {
		assert_eq!(Str8::from_nul_terminated(b"ab\0cd"), "ab");
		assert_eq!(Str8::from_nul_terminated(b"abcdefghij"), "abcdefgh");
		let units = *b"xyz\0";
		let str = unsafe { FixedStr::<u8, 8>::from_ptr(units.as_ptr()) };
		assert_eq!(str, "xyz");
		let str = unsafe { FixedStr::<u8, 2>::from_ptr(units.as_ptr()) };
		assert_eq!(str, "xy");
	}

	#[test]
	fn repeat_and_resize() {
		let mut str = Str8::repeat(3, b'-');
		assert_eq!(str, "---");
		assert_eq!(str.resize(10, b'+'), 8);
		assert_eq!(str, "---+++++");
		assert_eq!(str.resize(2, b'+'), 2);
		assert_eq!(str, "--");
		assert_terminated(&str);
	}

	#[test]
	fn recap_clamps() {
		let str = Str8::from("abcdef");
		assert_eq!(str.recap::<4>(), "abcd");
		assert_eq!(str.recap::<16>(), "abcdef");
	}

	#[test]
	fn literal_const() {
		const STR: FixedStr<u8, 3> = FixedStr::literal("hello");
		assert_eq!(STR, "hel");
		assert_eq!(STR.as_units_with_nul(), b"hel\0");
	}

	#[test]
	fn display_and_debug() {
		let str = Str8::from("a\"b");
		assert_eq!(str.to_string(), "a\"b");
		assert_eq!(format!("{str:?}"), r#""a\"b""#);
		let wide = FixedStr::<u16, 8>::from("héllo");
		assert_eq!(wide.len(), 5);
		assert_eq!(wide.to_string(), "héllo");
	}

	#[test]
	fn write_to_emits_content_only() {
		let str = Str8::from("abc");
		let mut sink = Vec::new();
		str.write_to(&mut sink).unwrap();
		assert_eq!(sink, b"abc");
	}

	#[quickcheck]
	fn length_within_capacity(data: Vec<u8>) {
		let str = Str8::from_units(&data[..]);
		assert_eq!(str.len(), data.len().min(8));
		assert_eq!(str.as_units(), &data[..str.len()]);
		assert_terminated(&str);
	}
}
