// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use crate::{AsUnits, CodeUnit, FixedStr};

const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Folds `units` into an FNV-1a `hash`. Each unit is mixed in whole, by its
/// numeric value, rather than byte by byte.
#[inline]
fn fnv1a_fold<T: CodeUnit>(hash: u64, units: &[T]) -> u64 {
	units.iter().fold(hash, |hash, unit|
		(hash ^ unit.to_u32() as u64).wrapping_mul(FNV_PRIME)
	)
}

impl<T: CodeUnit, const C: usize> FixedStr<T, C> {
	/// Returns the 64-bit FNV-1a hash of the content. Strings of any capacity with
	/// equal content hash identically.
	///
	/// This is a fast, non-cryptographic hash; collisions between different
	/// content are expected.
	#[inline]
	pub fn fnv1a(&self) -> u64 {
		fnv1a_fold(FNV_OFFSET, self.as_units())
	}

	/// Compares the content lexicographically with `other`, with length as the
	/// final tie-break.
	#[inline]
	pub fn compare(&self, other: impl AsUnits<Unit = T>) -> Ordering {
		self.as_units().cmp(other.as_units())
	}
}

/// A streaming FNV-1a [`Hasher`], for hash maps keyed by fixed strings.
///
/// Fixed strings fed through [`Hash`] write a length prefix before their units,
/// so the result differs from [`FixedStr::fnv1a`].
#[derive(Copy, Clone, Debug)]
pub struct Fnv1aHasher(u64);

/// A [`BuildHasher`](std::hash::BuildHasher) for [`Fnv1aHasher`].
pub type Fnv1aBuildHasher = BuildHasherDefault<Fnv1aHasher>;

impl Default for Fnv1aHasher {
	fn default() -> Self { Self(FNV_OFFSET) }
}

impl Hasher for Fnv1aHasher {
	#[inline]
	fn finish(&self) -> u64 { self.0 }

	#[inline]
	fn write(&mut self, bytes: &[u8]) {
		self.0 = fnv1a_fold(self.0, bytes);
	}
}

impl<T: CodeUnit, const C: usize> Hash for FixedStr<T, C> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_units().hash(state)
	}
}

impl<T: CodeUnit, const A: usize, const B: usize> PartialEq<FixedStr<T, B>> for FixedStr<T, A> {
	#[inline]
	fn eq(&self, other: &FixedStr<T, B>) -> bool {
		self.as_units() == other.as_units()
	}
}

impl<T: CodeUnit, const C: usize> Eq for FixedStr<T, C> { }

impl<T: CodeUnit, const A: usize, const B: usize> PartialOrd<FixedStr<T, B>> for FixedStr<T, A> {
	#[inline]
	fn partial_cmp(&self, other: &FixedStr<T, B>) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

impl<T: CodeUnit, const C: usize> Ord for FixedStr<T, C> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

impl<T: CodeUnit, const C: usize> PartialEq<[T]> for FixedStr<T, C> {
	#[inline]
	fn eq(&self, other: &[T]) -> bool { self.as_units() == other }
}

impl<T: CodeUnit, const C: usize> PartialEq<&[T]> for FixedStr<T, C> {
	#[inline]
	fn eq(&self, other: &&[T]) -> bool { self.as_units() == *other }
}

impl<T: CodeUnit, const C: usize, const N: usize> PartialEq<[T; N]> for FixedStr<T, C> {
	#[inline]
	fn eq(&self, other: &[T; N]) -> bool { self.as_units() == other }
}

/// Compares by code points: a wide string equals a `str` if each of its units is
/// the corresponding character of the `str`, encoded in that width.
impl<T: CodeUnit, const C: usize> PartialEq<str> for FixedStr<T, C> {
	fn eq(&self, other: &str) -> bool {
		let mut buf = [T::ZERO; 4];
		let mut units = self.iter();
		other.chars().all(|char|
			T::encode_char(char, &mut buf)
				.iter()
				.all(|unit| units.next() == Some(unit))
		) && units.next().is_none()
	}
}

impl<T: CodeUnit, const C: usize> PartialEq<&str> for FixedStr<T, C> {
	#[inline]
	fn eq(&self, other: &&str) -> bool { self == *other }
}

impl<T: CodeUnit, const C: usize> PartialEq<FixedStr<T, C>> for str {
	#[inline]
	fn eq(&self, other: &FixedStr<T, C>) -> bool { other == self }
}

impl<T: CodeUnit, const C: usize> PartialEq<FixedStr<T, C>> for &str {
	#[inline]
	fn eq(&self, other: &FixedStr<T, C>) -> bool { other == *self }
}

#[cfg(test)]
mod test {
	use std::cmp::Ordering;
	use std::collections::HashMap;
	use pretty_assertions::assert_eq;
	use quickcheck_macros::quickcheck;
	use crate::{FixedStr, Fnv1aBuildHasher};

	#[test]
	fn fnv1a_reference_values() {
		assert_eq!(FixedStr::<u8, 4>::new().fnv1a(), 0xCBF29CE484222325);
		assert_eq!(FixedStr::<u8, 4>::from("a").fnv1a(), 0xAF63DC4C8601EC8C);
		assert_eq!(FixedStr::<u8, 8>::from("foobar").fnv1a(), 0x85944171F73967E8);
	}

	#[test]
	fn fnv1a_ignores_capacity() {
		let a = FixedStr::<u8, 8>::from("abc");
		let b = FixedStr::<u8, 64>::from("abc");
		assert_eq!(a.fnv1a(), b.fnv1a());
		assert_eq!(a, b);
	}

	#[test]
	fn wide_fnv1a_matches_narrow_for_ascii() {
		let narrow = FixedStr::<u8, 8>::from("hash");
		let wide = FixedStr::<u32, 8>::from("hash");
		assert_eq!(narrow.fnv1a(), wide.fnv1a());
	}

	#[test]
	fn ordering() {
		let abc = FixedStr::<u8, 4>::from("abc");
		assert_eq!(abc.compare("abd"), Ordering::Less);
		assert_eq!(abc.compare("ab"), Ordering::Greater);
		assert_eq!(abc.compare("abc"), Ordering::Equal);
		assert!(abc < FixedStr::<u8, 8>::from("abcd"));
		assert!(abc > FixedStr::<u8, 2>::from("aa"));
	}

	#[test]
	fn eq_str_by_code_point() {
		let wide = FixedStr::<u16, 8>::from("héllo");
		assert!(wide == "héllo");
		assert!("héllo" == wide);
		assert!(wide != "héll");
		assert!(wide != "héllo!");
	}

	#[test]
	fn fnv_hasher_keys() {
		let mut map = HashMap::with_hasher(Fnv1aBuildHasher::default());
		map.insert(FixedStr::<u8, 8>::from("one"), 1);
		map.insert(FixedStr::<u8, 8>::from("two"), 2);
		assert_eq!(map.get(&FixedStr::<u8, 8>::from("two")), Some(&2));
	}

	#[quickcheck]
	fn ordering_matches_slices(a: Vec<u8>, b: Vec<u8>) -> bool {
		let x = FixedStr::<u8, 64>::from_units(&a[..]);
		let y = FixedStr::<u8, 32>::from_units(&b[..]);
		x.partial_cmp(&y) == x.as_units().partial_cmp(y.as_units())
	}
}
