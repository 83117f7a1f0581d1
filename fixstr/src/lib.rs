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

//! ## How it works
//!
//! A [`FixedStr`] is a string stored inline in a fixed array of *code units*,
//! with a length counter. It never allocates: its capacity `C` is part of the
//! type, and every write that would exceed it is *clamped* to the space that is
//! left rather than failing. Writes report how many units were actually kept, so
//! callers that care about truncation can check.
//!
//! Code units are one of three widths, `u8`, `u16`, or `u32`, see [`CodeUnit`].
//! Operations are element-wise over these units; there is no Unicode-aware
//! behavior beyond lossy decoding for display. Case mapping, whitespace, and
//! digits are ASCII-only.
//!
//! ### Terminator
//!
//! The buffer holds `C + 1` units. The unit directly after the content is always
//! zero, so the content plus terminator can be handed to code expecting a
//! null-terminated string through [`FixedStr::as_units_with_nul`].
//!
//! ### Algorithms
//!
//! Beyond the buffer contract itself, the crate provides:
//! - mutation (append, insert, erase, replace, reverse), clamped to capacity,
//! - search (find, rfind, count, prefix/suffix tests, character sets),
//! - [`transform`]ations (ASCII case, trimming, case-insensitive equality),
//! - [`split`]ting, partitioning, and joining,
//! - numeric [`format`]ting, and [`parsing`] with explicit errors,
//! - ordering, equality, and an FNV-1a hash.
//!
//! Anything that reads a string takes an [`AsUnits`] view, implemented for fixed
//! strings, slices, arrays, vectors, `str`, and single code units.

pub mod error;
mod fixed_str;
pub mod format;
pub mod parsing;
pub mod pipe;
pub mod presets;
pub mod split;
pub mod transform;
mod unit;
mod view;

pub use error::{OutOfRange, ParseFloatError, ParseIntError, RadixError};
pub use fixed_str::*;
pub use format::{FormatOptions, FormatUnits, Formatted, Integer, Numeric, bin, float, hex, hex_upper, oct, pad_left, to_fixed};
pub use parsing::{FromUnits, ParseUnits, Radix};
pub use pipe::{Pipe, compose};
pub use split::{Partition, SplitResult, join, partition, rpartition, rsplit, split, split_lines, split_whitespace};
pub use transform::{eq_ignore_case, reversed, to_lower, to_title, to_upper, toggle_case, trim, trim_left, trim_matches, trim_right};
pub use unit::CodeUnit;
pub use view::AsUnits;
pub use simdutf8::compat::Utf8Error;

/// The "not found" sentinel, the maximum representable size. Search functions
/// return `Option`, this is provided for callers storing positions as plain
/// integers.
pub const NPOS: usize = usize::MAX;

/// The default maximum number of parts produced by a split.
pub const DEFAULT_MAX_PARTS: usize = 16;

/// The default number of fractional digits rendered for floats.
pub const DEFAULT_PRECISION: usize = 6;

/// The capacity of strings returned by [`to_fixed`], large enough to hold any
/// 128-bit integer rendered in binary with its `0b` marker.
pub const NUMBER_CAPACITY: usize = 130;
