// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::ffi::CStr;
use fixstr::{FixedStr, OutOfRange, concat};
use pretty_assertions::assert_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use common::Text;

#[macro_use]
mod common;

type Str = FixedStr<u8, 32>;

/// Checks the length bound and the terminator after the content.
fn assert_terminated<const C: usize>(str: &FixedStr<u8, C>) {
	assert!(str.len() <= str.capacity());
	let with_nul = str.as_units_with_nul();
	assert_eq!(with_nul.len(), str.len() + 1);
	assert_eq!(with_nul[str.len()], 0);
}

#[test]
fn full_buffer_stays_full() {
	let mut str = FixedStr::<u8, 5>::new();
	assert_eq!(str.assign("12345"), 5);
	assert_eq!(str.append("6"), 0);
	assert_eq!(str, "12345");
	assert!(str.is_full());
	assert_terminated(&str);
}

#[quickcheck]
fn append_clamps_to_available(Text(a): Text, Text(b): Text) -> TestResult {
	let mut str = FixedStr::<u8, 16>::from_units(a.as_bytes());
	let available = str.available();
	let written = str.append(b.as_bytes());
	assert_terminated(&str);
	if b.len() > available {
		assert!(str.is_full());
	}
	qc_assert_eq!(written, b.len().min(available))
}

#[quickcheck]
fn every_mutation_terminates(Text(text): Text, pos: usize, count: usize) {
	let pos = pos % 40;
	let count = count % 40;
	let mut str = Str::from_units(text.as_bytes());
	str.insert(pos, "xyz");
	assert_terminated(&str);
	str.erase(pos, count);
	assert_terminated(&str);
	str.replace(pos, count, "--");
	assert_terminated(&str);
	str.resize(count, b'.');
	assert_terminated(&str);
	str.append_repeat(pos, b'!');
	assert_terminated(&str);
	str.truncate(count / 2);
	assert_terminated(&str);
	str.pop();
	assert_terminated(&str);
	str.reverse();
	assert_terminated(&str);
}

#[quickcheck]
fn substr_round_trip(Text(text): Text, pos: usize, count: usize) -> TestResult {
	let str = Str::from_units(text.as_bytes());
	if str.is_empty() {
		return TestResult::discard()
	}
	let pos = pos % str.len();
	let count = count % (str.len() - pos + 1);
	let sub = str.substr(pos, count);

	let mut copy = str;
	copy.replace(pos, count, sub);
	qc_assert_eq!(copy, str)
}

#[test]
fn checked_access() {
	let mut str = Str::from("abc");
	assert_eq!(str.at(2), Ok(&b'c'));
	assert_eq!(str.at(3), Err(OutOfRange { index: 3, len: 3 }));
	*str.at_mut(0).unwrap() = b'x';
	assert_eq!(str, "xbc");
	assert_eq!(str.get(9), None);
	assert_eq!(
		str.at(5).unwrap_err().to_string(),
		"index 5 should be less than the fixed string length 3"
	);
}

#[test]
fn construction() {
	assert_eq!(Str::repeat(3, b'z'), "zzz");
	assert_eq!(FixedStr::<u8, 4>::repeat(10, b'z'), "zzzz");
	assert_eq!(Str::from_nul_terminated(b"ab\0cd"), "ab");
	assert_eq!(FixedStr::<u8, 2>::from_nul_terminated(b"abc\0"), "ab");

	let c_str = CStr::from_bytes_with_nul(b"raw\0").unwrap();
	let str = unsafe { Str::from_ptr(c_str.as_ptr().cast()) };
	assert_eq!(str, "raw");

	let small: FixedStr<u8, 2> = Str::from("hello").recap();
	assert_eq!(small, "he");
}

#[test]
fn string_interop() {
	let str = Str::from("interop");
	let owned = String::from(&str);
	assert_eq!(owned, "interop");
	assert_eq!(Str::from(&owned), str);
	assert_eq!(str.as_str(), Ok("interop"));
	assert_eq!("interop".parse::<Str>(), Ok(str));

	let mut sink = Vec::new();
	str.write_to(&mut sink).unwrap();
	assert_eq!(sink, b"interop");
}

#[test]
fn wide_units() {
	let mut wide = FixedStr::<u16, 8>::from("añb");
	assert_eq!(wide.len(), 3);
	assert!(wide.push_char('😀'));
	assert_eq!(wide.len(), 5);
	assert_eq!(wide.to_string(), "añb😀");

	let mut utf32 = FixedStr::<u32, 2>::from("ab");
	assert!(!utf32.push_char('c'));
	assert_eq!(utf32, "ab");
	assert_eq!(utf32.as_units_with_nul(), [0x61u32, 0x62, 0]);
}

#[test]
fn concat_and_add_assign() {
	let a = FixedStr::<u8, 4>::from("foo");
	let b = FixedStr::<u8, 8>::from("bar");
	let joined: FixedStr<u8, 5> = concat(&a, &b);
	assert_eq!(joined, "fooba");

	let mut str = Str::from("a");
	str += "b";
	str += b'c';
	str += &b;
	assert_eq!(str, "abcbar");
}

#[test]
fn ordering_and_hash() {
	let a = Str::from("apple");
	let b = FixedStr::<u8, 8>::from("apricot");
	assert!(a < b);
	assert_eq!(a.compare(&b), std::cmp::Ordering::Less);
	assert_eq!(a, FixedStr::<u8, 5>::from("apple"));
	assert_eq!(a.fnv1a(), FixedStr::<u8, 5>::from("apple").fnv1a());
	assert_ne!(a.fnv1a(), b.fnv1a());
}

#[test]
fn display_and_debug() {
	let str = Str::from("say \"hi\"\n");
	assert_eq!(str.to_string(), "say \"hi\"\n");
	assert_eq!(format!("{str:?}"), r#""say \"hi\"\n""#);
	let invalid = Str::from_units(b"a\xFFb");
	assert_eq!(invalid.to_string(), "a\u{FFFD}b");
	assert!(invalid.as_str().is_err());
}
