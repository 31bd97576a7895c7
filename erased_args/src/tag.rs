// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed set of argument kinds.
//!
//! The declaration order is load-bearing: integer kinds come first, then floating-point kinds,
//! then everything else. [`TypeTag::is_integral`] and [`TypeTag::is_arithmetic`] are range tests
//! against that order.

use core::fmt;

/// Identifies which [`Value`](crate::value::Value) alternative an argument holds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TypeTag {
    /// No argument (an absent or default-constructed record).
    #[default]
    None,
    /// `i32`, and every narrower signed integer.
    Int,
    /// `u32`, and every narrower unsigned integer.
    UInt,
    /// `i64`.
    LongLong,
    /// `u64`.
    ULongLong,
    /// `i128`.
    Int128,
    /// `u128`.
    UInt128,
    /// `bool`.
    Bool,
    /// `char`.
    Char,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// [`LongDouble`](crate::value::LongDouble).
    LongDouble,
    /// NUL-terminated C string.
    CStr,
    /// Known-length string view.
    Str,
    /// Raw pointer.
    Pointer,
    /// User type rendered through a [`CustomHandle`](crate::value::CustomHandle).
    Custom,
}

impl TypeTag {
    /// Last tag of the integer sub-range.
    pub const LAST_INTEGER: Self = Self::Char;
    /// Last tag of the numeric (integer or floating-point) sub-range.
    pub const LAST_NUMERIC: Self = Self::LongDouble;

    /// Every tag, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::None,
        Self::Int,
        Self::UInt,
        Self::LongLong,
        Self::ULongLong,
        Self::Int128,
        Self::UInt128,
        Self::Bool,
        Self::Char,
        Self::Float,
        Self::Double,
        Self::LongDouble,
        Self::CStr,
        Self::Str,
        Self::Pointer,
        Self::Custom,
    ];

    /// Returns `true` for the integer alternatives (including `Bool` and `Char`).
    #[must_use]
    #[inline]
    pub const fn is_integral(self) -> bool {
        self as u8 > Self::None as u8 && self as u8 <= Self::LAST_INTEGER as u8
    }

    /// Returns `true` for the integer and floating-point alternatives.
    #[must_use]
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        self as u8 > Self::None as u8 && self as u8 <= Self::LAST_NUMERIC as u8
    }

    /// Returns `true` for the floating-point alternatives.
    #[must_use]
    #[inline]
    pub const fn is_float(self) -> bool {
        self as u8 > Self::LAST_INTEGER as u8 && self as u8 <= Self::LAST_NUMERIC as u8
    }

    /// Returns `true` for the two string alternatives.
    #[must_use]
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::CStr | Self::Str)
    }

    /// Stable lowercase name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::LongLong => "long_long",
            Self::ULongLong => "ulong_long",
            Self::Int128 => "int128",
            Self::UInt128 => "uint128",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long_double",
            Self::CStr => "cstring",
            Self::Str => "string",
            Self::Pointer => "pointer",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
