// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime value model for erased arguments.
//!
//! A [`Value`] is the normalized ("wire") form of one argument. It is `Copy`, never owns
//! string bytes or custom objects, and carries the lifetime `'a` of whatever it borrows.

use core::fmt;
use core::ptr;

use crate::render::Render;
use crate::str_view::StrView;
use crate::tag::TypeTag;

/// Extended-precision float request.
///
/// Rust has no portable type wider than `f64`, so the payload is an `f64`. Wrapping a value in
/// `LongDouble` selects the [`TypeTag::LongDouble`] alternative explicitly.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct LongDouble(pub f64);

impl fmt::Display for LongDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Renderer of values that have no render capability: writes nothing.
struct Opaque;

impl Render for Opaque {
    fn render(&self, _out: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }
}

/// A borrowed, type-erased handle to an argument with no built-in wire representation.
///
/// The handle renders the original value through its [`Render`] impl. The core never looks at
/// the value itself.
#[derive(Copy, Clone)]
pub struct CustomHandle<'a> {
    renderer: &'a dyn Render,
    data: *const (),
    type_name: &'static str,
}

impl<'a> CustomHandle<'a> {
    /// Erases `value`.
    #[must_use]
    #[inline]
    pub fn new<T: Render>(value: &'a T) -> Self {
        Self {
            renderer: value,
            data: ptr::from_ref(value).cast::<()>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Wraps an already-erased renderer.
    #[must_use]
    #[inline]
    pub fn from_dyn(value: &'a dyn Render) -> Self {
        Self {
            renderer: value,
            data: ptr::from_ref(value).cast::<()>(),
            type_name: "dyn Render",
        }
    }

    /// Erases a value that cannot render itself.
    ///
    /// The handle keeps the value's address and type name; rendering it writes nothing.
    #[must_use]
    #[inline]
    pub fn opaque<T: ?Sized>(value: &'a T) -> Self {
        Self {
            renderer: &Opaque,
            data: ptr::from_ref(value).cast::<()>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Renders the original value into `out`.
    #[inline]
    pub fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.renderer.render(out)
    }

    /// Alias of [`CustomHandle::render`].
    #[inline]
    pub fn format(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.render(out)
    }

    /// Address of the original argument.
    #[must_use]
    #[inline]
    pub fn data(&self) -> *const () {
        self.data
    }

    /// Name of the erased type, for diagnostics only.
    #[must_use]
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Two handles are equal when they erase the same object.
impl PartialEq for CustomHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::addr_eq(self.data(), other.data())
    }
}

impl fmt::Debug for CustomHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomHandle")
            .field("type_name", &self.type_name)
            .field("data", &self.data())
            .finish_non_exhaustive()
    }
}

/// A normalized argument value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Value<'a> {
    /// No value.
    #[default]
    None,
    /// Signed 32-bit integer.
    Int(i32),
    /// Unsigned 32-bit integer.
    UInt(u32),
    /// Signed 64-bit integer.
    LongLong(i64),
    /// Unsigned 64-bit integer.
    ULongLong(u64),
    /// Signed 128-bit integer.
    Int128(i128),
    /// Unsigned 128-bit integer.
    UInt128(u128),
    /// Boolean.
    Bool(bool),
    /// Unicode scalar value.
    Char(char),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Extended-precision float request.
    LongDouble(LongDouble),
    /// C string bytes, without the terminator.
    CStr(StrView<'a>),
    /// Known-length string bytes.
    Str(StrView<'a>),
    /// Raw pointer; only the address is kept.
    Pointer(*const ()),
    /// User type.
    Custom(CustomHandle<'a>),
}

/// A numeric value widened to one of three carriers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    /// Any signed integer alternative.
    Signed(i128),
    /// Any unsigned integer alternative, plus `bool` and `char` (as their code).
    Unsigned(u128),
    /// Any floating-point alternative.
    Float(f64),
}

impl<'a> Value<'a> {
    /// Returns the tag of the active alternative.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::None => TypeTag::None,
            Self::Int(_) => TypeTag::Int,
            Self::UInt(_) => TypeTag::UInt,
            Self::LongLong(_) => TypeTag::LongLong,
            Self::ULongLong(_) => TypeTag::ULongLong,
            Self::Int128(_) => TypeTag::Int128,
            Self::UInt128(_) => TypeTag::UInt128,
            Self::Bool(_) => TypeTag::Bool,
            Self::Char(_) => TypeTag::Char,
            Self::Float(_) => TypeTag::Float,
            Self::Double(_) => TypeTag::Double,
            Self::LongDouble(_) => TypeTag::LongDouble,
            Self::CStr(_) => TypeTag::CStr,
            Self::Str(_) => TypeTag::Str,
            Self::Pointer(_) => TypeTag::Pointer,
            Self::Custom(_) => TypeTag::Custom,
        }
    }

    /// Widens an arithmetic value; `None` for every other alternative.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        Some(match *self {
            Self::Int(v) => Number::Signed(v.into()),
            Self::LongLong(v) => Number::Signed(v.into()),
            Self::Int128(v) => Number::Signed(v),
            Self::UInt(v) => Number::Unsigned(v.into()),
            Self::ULongLong(v) => Number::Unsigned(v.into()),
            Self::UInt128(v) => Number::Unsigned(v),
            Self::Bool(v) => Number::Unsigned(v.into()),
            Self::Char(v) => Number::Unsigned(u32::from(v).into()),
            Self::Float(v) => Number::Float(v.into()),
            Self::Double(v) => Number::Float(v),
            Self::LongDouble(v) => Number::Float(v.0),
            Self::None | Self::CStr(_) | Self::Str(_) | Self::Pointer(_) | Self::Custom(_) => {
                return None;
            }
        })
    }

    /// Returns the string view for either string alternative.
    #[must_use]
    pub const fn str_view(&self) -> Option<StrView<'a>> {
        match self {
            Self::CStr(s) | Self::Str(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the custom handle, if this is a custom value.
    #[must_use]
    pub const fn custom(&self) -> Option<CustomHandle<'a>> {
        match self {
            Self::Custom(h) => Some(*h),
            _ => None,
        }
    }
}

/// Plain rendering with no width, precision or locale policy.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::LongLong(v) => write!(f, "{v}"),
            Self::ULongLong(v) => write!(f, "{v}"),
            Self::Int128(v) => write!(f, "{v}"),
            Self::UInt128(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::LongDouble(v) => write!(f, "{v}"),
            Self::CStr(s) | Self::Str(s) => write!(f, "{s}"),
            Self::Pointer(p) => write!(f, "{:p}", *p),
            Self::Custom(h) => h.render(f),
        }
    }
}
