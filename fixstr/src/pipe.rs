// SPDX-License-Identifier: Apache-2.0

//! Left-to-right function application.
//!
//! ```
//! use fixstr::{FixedStr, Pipe, split, to_upper, trim};
//!
//! let str = FixedStr::<u8, 32>::from("  red,green  ");
//! let parts = str.pipe(trim)
//!                .pipe(to_upper)
//!                .pipe(|s| split(s, b','));
//! assert_eq!(parts[..], ["RED", "GREEN"]);
//! ```

use crate::{CodeUnit, FixedStr, Partition, SplitResult};

mod sealed {
	use crate::{CodeUnit, FixedStr, Partition, SplitResult};

	pub trait Pipe { }
	impl<T: CodeUnit, const C: usize> Pipe for FixedStr<T, C> { }
	impl<T: CodeUnit, const C: usize, const P: usize> Pipe for SplitResult<T, C, P> { }
	impl<T: CodeUnit, const C: usize> Pipe for Partition<T, C> { }
}

/// Applies functions to a value, left to right.
pub trait Pipe: sealed::Pipe + Sized {
	/// Passes the value to `f`, returning its result.
	#[inline]
	fn pipe<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
		f(self)
	}

	/// Mutates the value with `f`, returning it.
	#[inline]
	fn pipe_mut(mut self, f: impl FnOnce(&mut Self)) -> Self {
		f(&mut self);
		self
	}
}

impl<T: CodeUnit, const C: usize> Pipe for FixedStr<T, C> { }
impl<T: CodeUnit, const C: usize, const P: usize> Pipe for SplitResult<T, C, P> { }
impl<T: CodeUnit, const C: usize> Pipe for Partition<T, C> { }

/// Composes `f` then `g` into a single function.
#[inline]
pub fn compose<A, B, R>(
	f: impl Fn(A) -> B,
	g: impl Fn(B) -> R
) -> impl Fn(A) -> R {
	move |value| g(f(value))
}

#[cfg(test)]
mod test {
	use std::cell::RefCell;
	use pretty_assertions::assert_eq;
	use crate::{FixedStr, partition, reversed, to_lower, trim};
	use super::*;

	type Str = FixedStr<u8, 32>;

	#[test]
	fn left_to_right() {
		let order = RefCell::new(Vec::new());
		let str = Str::from("x");
		str.pipe(|s| { order.borrow_mut().push(1); *s })
		   .pipe(|s| { order.borrow_mut().push(2); *s });
		assert_eq!(order.into_inner(), [1, 2]);
	}

	#[test]
	fn pipe_mut() {
		let str = Str::from("  Loud  ").pipe_mut(FixedStr::trim_in_place)
										  .pipe_mut(FixedStr::make_ascii_uppercase);
		assert_eq!(str, "LOUD");
	}

	#[test]
	fn partition_pipe() {
		let key = Str::from("Key=value").pipe(|s| partition(s, b'='))
											 .pipe(|p| to_lower(&p.first));
		assert_eq!(key, "key");
	}

	#[test]
	fn composed() {
		let tidy = compose(|s: Str| trim(&s), |s: Str| reversed(&s));
		assert_eq!(tidy(Str::from(" abc ")), "cba");
		let tidy_twice = compose(&tidy, &tidy);
		assert_eq!(tidy_twice(Str::from(" abc ")), "abc");
	}
}
