// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compile-time normalization of source types onto wire types.
//!
//! Every argument type implements [`MapArg`], naming the [`WireType`] it normalizes to. The wire
//! type fixes the [`TypeTag`] as an associated constant, so the tag of any argument type is known
//! at compile time through [`mapped_tag`].
//!
//! ## Normalization
//!
//! | source | wire | tag |
//! |---|---|---|
//! | `i8`, `i16`, `i32` | `i32` | `Int` |
//! | `u8`, `u16`, `u32` | `u32` | `UInt` |
//! | `isize` / `usize` | [`LongWire`] / [`ULongWire`] | `Int` or `LongLong` per target |
//! | `i64`, `u64`, `i128`, `u128` | same | `LongLong` .. `UInt128` |
//! | `bool`, `char`, `f32`, `f64`, [`LongDouble`] | same | `Bool` .. `LongDouble` |
//! | `CStr`, `CString` | `&CStr` | `CStr` |
//! | `str`, `String`, [`StrView`] | `&str` / [`StrView`] | `Str` |
//! | `*const T`, `*mut T`, `NonNull<T>` | `*const ()` | `Pointer` |
//! | [`Displayed`], `fmt::Arguments`, [`custom_arg!`](crate::custom_arg) types | [`CustomHandle`] | `Custom` |
//! | anything else, through [`args!`](crate::args) | opaque [`CustomHandle`] | `Custom` |
//!
//! References, `Box` and `Cow` map like the type they point to.
//!
//! Character pointers (`*const c_char`, `*mut c_char`) are ordinary pointers here and record
//! only their address, not the string they point to. Reading through them is `unsafe`, so pass
//! C strings as `&CStr` or `CString` to get the `CStr` alternative with its length.

use alloc::borrow::{Cow, ToOwned};
use alloc::boxed::Box;
use alloc::ffi::CString;
use alloc::string::String;
use core::ffi::CStr;
use core::fmt;
use core::ptr::NonNull;

use crate::render::Displayed;
use crate::str_view::StrView;
use crate::tag::TypeTag;
use crate::value::{CustomHandle, LongDouble, Value};

/// `true` when the target's `isize` is no wider than `i32`.
///
/// `isize`/`usize` take the place of C's `long`: they collapse onto the 32-bit alternatives on
/// such targets and onto the 64-bit alternatives everywhere else.
pub const LONG_IS_INT: bool = size_of::<isize>() <= size_of::<i32>();

/// Wire type for `isize`.
#[cfg(any(target_pointer_width = "16", target_pointer_width = "32"))]
pub type LongWire = i32;
/// Wire type for `usize`.
#[cfg(any(target_pointer_width = "16", target_pointer_width = "32"))]
pub type ULongWire = u32;

/// Wire type for `isize`.
#[cfg(not(any(target_pointer_width = "16", target_pointer_width = "32")))]
pub type LongWire = i64;
/// Wire type for `usize`.
#[cfg(not(any(target_pointer_width = "16", target_pointer_width = "32")))]
pub type ULongWire = u64;

const _: () = assert!(
    size_of::<LongWire>() >= size_of::<isize>(),
    "LongWire must hold every isize"
);
const _: () = assert!(
    LONG_IS_INT == (size_of::<LongWire>() == size_of::<i32>()),
    "LongWire disagrees with LONG_IS_INT"
);

/// A normalized representation an argument is stored as.
pub trait WireType<'a>: Copy {
    /// Tag of the [`Value`] alternative this wire type produces.
    const TAG: TypeTag;

    /// Moves the wire value into its [`Value`] alternative.
    fn into_value(self) -> Value<'a>;
}

/// A source type that can be passed as an argument.
pub trait MapArg<'a> {
    /// The wire type `Self` normalizes to.
    type Wire: WireType<'a>;

    /// Normalizes `self`.
    fn map(&'a self) -> Self::Wire;
}

/// Tag an argument of type `T` is recorded with.
#[must_use]
pub const fn mapped_tag<'a, T: MapArg<'a> + ?Sized>() -> TypeTag {
    <T::Wire as WireType<'a>>::TAG
}

macro_rules! wire_types {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl<'a> WireType<'a> for $ty {
            const TAG: TypeTag = TypeTag::$variant;

            #[inline]
            fn into_value(self) -> Value<'a> {
                Value::$variant(self)
            }
        }
    )*};
}

wire_types! {
    i32 => Int,
    u32 => UInt,
    i64 => LongLong,
    u64 => ULongLong,
    i128 => Int128,
    u128 => UInt128,
    bool => Bool,
    char => Char,
    f32 => Float,
    f64 => Double,
    LongDouble => LongDouble,
    *const () => Pointer,
}

impl<'a> WireType<'a> for CustomHandle<'a> {
    const TAG: TypeTag = TypeTag::Custom;

    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::Custom(self)
    }
}

impl<'a> WireType<'a> for StrView<'a> {
    const TAG: TypeTag = TypeTag::Str;

    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::Str(self)
    }
}

impl<'a> WireType<'a> for &'a str {
    const TAG: TypeTag = TypeTag::Str;

    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::Str(StrView::from(self))
    }
}

impl<'a> WireType<'a> for &'a CStr {
    const TAG: TypeTag = TypeTag::CStr;

    #[inline]
    fn into_value(self) -> Value<'a> {
        Value::CStr(StrView::new(self.to_bytes()))
    }
}

macro_rules! map_lossless {
    ($($src:ty => $wire:ty),* $(,)?) => {$(
        impl<'a> MapArg<'a> for $src {
            type Wire = $wire;

            #[inline]
            fn map(&'a self) -> $wire {
                <$wire>::from(*self)
            }
        }
    )*};
}

map_lossless! {
    i8 => i32,
    i16 => i32,
    i32 => i32,
    u8 => u32,
    u16 => u32,
    u32 => u32,
    i64 => i64,
    u64 => u64,
    i128 => i128,
    u128 => u128,
    bool => bool,
    char => char,
    f32 => f32,
    f64 => f64,
    LongDouble => LongDouble,
}

impl<'a> MapArg<'a> for isize {
    type Wire = LongWire;

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "LongWire is at least as wide as isize on every target"
    )]
    fn map(&'a self) -> LongWire {
        *self as LongWire
    }
}

impl<'a> MapArg<'a> for usize {
    type Wire = ULongWire;

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "ULongWire is at least as wide as usize on every target"
    )]
    fn map(&'a self) -> ULongWire {
        *self as ULongWire
    }
}

impl<'a> MapArg<'a> for str {
    type Wire = &'a str;

    #[inline]
    fn map(&'a self) -> &'a str {
        self
    }
}

impl<'a> MapArg<'a> for String {
    type Wire = &'a str;

    #[inline]
    fn map(&'a self) -> &'a str {
        self.as_str()
    }
}

impl<'a, 'b: 'a> MapArg<'a> for StrView<'b> {
    type Wire = StrView<'a>;

    #[inline]
    fn map(&'a self) -> StrView<'a> {
        *self
    }
}

impl<'a> MapArg<'a> for CStr {
    type Wire = &'a CStr;

    #[inline]
    fn map(&'a self) -> &'a CStr {
        self
    }
}

impl<'a> MapArg<'a> for CString {
    type Wire = &'a CStr;

    #[inline]
    fn map(&'a self) -> &'a CStr {
        self.as_c_str()
    }
}

impl<'a, T: ?Sized> MapArg<'a> for *const T {
    type Wire = *const ();

    #[inline]
    fn map(&'a self) -> *const () {
        self.cast::<()>()
    }
}

impl<'a, T: ?Sized> MapArg<'a> for *mut T {
    type Wire = *const ();

    #[inline]
    fn map(&'a self) -> *const () {
        self.cast_const().cast::<()>()
    }
}

impl<'a, T: ?Sized> MapArg<'a> for NonNull<T> {
    type Wire = *const ();

    #[inline]
    fn map(&'a self) -> *const () {
        self.as_ptr().cast_const().cast::<()>()
    }
}

impl<'a, 'b: 'a, T: MapArg<'a> + ?Sized> MapArg<'a> for &'b T {
    type Wire = T::Wire;

    #[inline]
    fn map(&'a self) -> T::Wire {
        (**self).map()
    }
}

impl<'a, 'b: 'a, T: MapArg<'a> + ?Sized> MapArg<'a> for &'b mut T {
    type Wire = T::Wire;

    #[inline]
    fn map(&'a self) -> T::Wire {
        (**self).map()
    }
}

impl<'a, T: MapArg<'a> + ?Sized> MapArg<'a> for Box<T> {
    type Wire = T::Wire;

    #[inline]
    fn map(&'a self) -> T::Wire {
        (**self).map()
    }
}

impl<'a, T> MapArg<'a> for Cow<'_, T>
where
    T: MapArg<'a> + ToOwned + ?Sized,
{
    type Wire = T::Wire;

    #[inline]
    fn map(&'a self) -> T::Wire {
        (**self).map()
    }
}

impl<'a, T: fmt::Display + 'a> MapArg<'a> for Displayed<T> {
    type Wire = CustomHandle<'a>;

    #[inline]
    fn map(&'a self) -> CustomHandle<'a> {
        CustomHandle::new(self)
    }
}

impl<'a, 'b: 'a> MapArg<'a> for fmt::Arguments<'b> {
    type Wire = CustomHandle<'a>;

    #[inline]
    fn map(&'a self) -> CustomHandle<'a> {
        CustomHandle::new(self)
    }
}

/// Makes types that implement [`Render`](crate::render::Render) usable as custom arguments.
///
/// ```
/// use core::fmt;
/// use erased_args::{Render, TypeTag, args, custom_arg};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Render for Point {
///     fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
///         write!(out, "({}, {})", self.x, self.y)
///     }
/// }
///
/// custom_arg!(Point);
///
/// let p = Point { x: 1, y: 2 };
/// let store = args!(p);
/// assert_eq!(store.view().get(0).tag(), TypeTag::Custom);
/// ```
#[macro_export]
macro_rules! custom_arg {
    ($($ty:ty),+ $(,)?) => {$(
        impl<'a> $crate::MapArg<'a> for $ty {
            type Wire = $crate::CustomHandle<'a>;

            #[inline]
            fn map(&'a self) -> $crate::CustomHandle<'a> {
                $crate::CustomHandle::new(self)
            }
        }
    )+};
}
