// SPDX-License-Identifier: Apache-2.0

use std::ffi::CStr;
use std::slice;
use crate::CodeUnit;

/// A read-only, contiguous view of code units. Any type implementing this can be
/// searched, appended, compared, or used as a delimiter.
///
/// A single code unit is viewed as a run of length one, so `str.find(b',')` and
/// `str.find(",")` behave identically.
pub trait AsUnits {
	type Unit: CodeUnit;

	/// Returns the viewed units.
	fn as_units(&self) -> &[Self::Unit];
}

impl<T: CodeUnit> AsUnits for [T] {
	type Unit = T;

	#[inline]
	fn as_units(&self) -> &[T] { self }
}

impl<T: CodeUnit, const N: usize> AsUnits for [T; N] {
	type Unit = T;

	#[inline]
	fn as_units(&self) -> &[T] { self }
}

impl<T: CodeUnit> AsUnits for Vec<T> {
	type Unit = T;

	#[inline]
	fn as_units(&self) -> &[T] { self }
}

impl AsUnits for str {
	type Unit = u8;

	#[inline]
	fn as_units(&self) -> &[u8] { self.as_bytes() }
}

impl AsUnits for String {
	type Unit = u8;

	#[inline]
	fn as_units(&self) -> &[u8] { self.as_bytes() }
}

impl AsUnits for CStr {
	type Unit = u8;

	#[inline]
	fn as_units(&self) -> &[u8] { self.to_bytes() }
}

macro_rules! single {
    ($($ty:ident)+) => {
		$(
		impl AsUnits for $ty {
			type Unit = $ty;

			#[inline]
			fn as_units(&self) -> &[$ty] { slice::from_ref(self) }
		}
		)+
	};
}

single! { u8 u16 u32 }

impl<V: AsUnits + ?Sized> AsUnits for &V {
	type Unit = V::Unit;

	#[inline]
	fn as_units(&self) -> &[V::Unit] { (**self).as_units() }
}

impl<V: AsUnits + ?Sized> AsUnits for &mut V {
	type Unit = V::Unit;

	#[inline]
	fn as_units(&self) -> &[V::Unit] { (**self).as_units() }
}
