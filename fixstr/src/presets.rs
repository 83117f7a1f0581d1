// SPDX-License-Identifier: Apache-2.0

//! Preset capacities for common kinds of text, with type aliases and constant
//! factory functions for byte strings.
//!
//! ```
//! use fixstr::presets::{self, PathStr};
//!
//! const CONFIG: PathStr = presets::path_str("/etc/app/config.toml");
//! assert_eq!(CONFIG.capacity(), presets::PATH);
//! assert_eq!(presets::uuid_str("123e4567-e89b-12d3-a456-426614174000-extra"), "123e4567-e89b-12d3-a456-426614174000");
//! ```

use crate::FixedStr;

/// Short names and identifiers.
pub const SMALL: usize = 32;
/// General-purpose text.
pub const STANDARD: usize = 256;
/// Longer text content.
pub const LARGE: usize = 1024;
/// File system paths, matching the Windows `MAX_PATH`.
pub const PATH: usize = 260;
/// Hyphenated UUIDs.
pub const UUID: usize = 36;
/// IP addresses, up to an IPv4-mapped IPv6 address.
pub const IP: usize = 45;
/// URLs.
pub const URL: usize = 2048;

pub type SmallStr = FixedStr<u8, SMALL>;
pub type StandardStr = FixedStr<u8, STANDARD>;
pub type LargeStr = FixedStr<u8, LARGE>;
pub type PathStr = FixedStr<u8, PATH>;
pub type UuidStr = FixedStr<u8, UUID>;
pub type IpStr = FixedStr<u8, IP>;
pub type UrlStr = FixedStr<u8, URL>;

macro_rules! factory {
	($($(#[$attr:meta])* $name:ident -> $ty:ident;)+) => {
		$(
		$(#[$attr])*
		#[inline]
		pub const fn $name(str: &str) -> $ty {
			FixedStr::literal(str)
		}
		)+
	};
}

factory! {
	/// Creates a [`SmallStr`], clamped to [`SMALL`] bytes.
	small_str -> SmallStr;
	/// Creates a [`StandardStr`], clamped to [`STANDARD`] bytes.
	standard_str -> StandardStr;
	/// Creates a [`LargeStr`], clamped to [`LARGE`] bytes.
	large_str -> LargeStr;
	/// Creates a [`PathStr`], clamped to [`PATH`] bytes.
	path_str -> PathStr;
	/// Creates a [`UuidStr`], clamped to [`UUID`] bytes.
	uuid_str -> UuidStr;
	/// Creates an [`IpStr`], clamped to [`IP`] bytes.
	ip_str -> IpStr;
	/// Creates a [`UrlStr`], clamped to [`URL`] bytes.
	url_str -> UrlStr;
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;
	use super::*;

	#[test]
	fn capacities() {
		assert_eq!(small_str("").capacity(), 32);
		assert_eq!(standard_str("").capacity(), 256);
		assert_eq!(large_str("").capacity(), 1024);
		assert_eq!(path_str("").capacity(), 260);
		assert_eq!(uuid_str("").capacity(), 36);
		assert_eq!(ip_str("").capacity(), 45);
		assert_eq!(url_str("").capacity(), 2048);
	}

	#[test]
	fn clamps() {
		let ip = ip_str("0000:0000:0000:0000:0000:ffff:192.168.100.228 overflow");
		assert_eq!(ip, "0000:0000:0000:0000:0000:ffff:192.168.100.228");
		assert!(ip.is_full());
	}

	#[test]
	fn constant() {
		const HOME: SmallStr = small_str("home");
		assert_eq!(HOME, "home");
		assert_eq!(HOME.as_units_with_nul(), b"home\0");
	}
}
