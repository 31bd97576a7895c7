// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-argument records.

use core::fmt;

use crate::mapper::{MapArg, WireType, mapped_tag};
use crate::str_view::StrView;
use crate::tag::TypeTag;
use crate::value::{CustomHandle, Value};

/// One erased argument.
///
/// The tag is derived from the stored [`Value`] variant, so the two can never disagree.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArgumentRecord<'a> {
    value: Value<'a>,
}

impl<'a> ArgumentRecord<'a> {
    /// Records `arg`, normalized through its [`MapArg`] impl.
    #[must_use]
    #[inline]
    pub fn new<T: MapArg<'a> + ?Sized>(arg: &'a T) -> Self {
        let value = arg.map().into_value();
        debug_assert_eq!(
            value.tag(),
            mapped_tag::<T>(),
            "wire value disagrees with its mapped tag"
        );
        Self { value }
    }

    /// Records `arg` as an opaque custom argument.
    ///
    /// This is the fallback [`args!`](crate::args) takes for types without a [`MapArg`] impl:
    /// the record keeps the address and type name, and renders as nothing.
    #[must_use]
    #[inline]
    pub fn opaque<T: ?Sized>(arg: &'a T) -> Self {
        Self {
            value: Value::Custom(CustomHandle::opaque(arg)),
        }
    }

    /// Records an already-normalized value.
    #[must_use]
    #[inline]
    pub const fn from_value(value: Value<'a>) -> Self {
        Self { value }
    }

    /// The empty record.
    #[must_use]
    #[inline]
    pub const fn none() -> Self {
        Self { value: Value::None }
    }

    /// Returns the argument's tag.
    #[must_use]
    #[inline]
    pub const fn tag(&self) -> TypeTag {
        self.value.tag()
    }

    /// Returns the argument's value.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> Value<'a> {
        self.value
    }

    /// Returns `true` unless this is the empty record.
    #[must_use]
    #[inline]
    pub const fn is_some(&self) -> bool {
        !matches!(self.value, Value::None)
    }

    /// Returns `true` for the empty record.
    #[must_use]
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self.value, Value::None)
    }

    /// See [`TypeTag::is_integral`].
    #[must_use]
    #[inline]
    pub const fn is_integral(&self) -> bool {
        self.tag().is_integral()
    }

    /// See [`TypeTag::is_arithmetic`].
    #[must_use]
    #[inline]
    pub const fn is_arithmetic(&self) -> bool {
        self.tag().is_arithmetic()
    }

    /// Returns the custom handle of a custom argument.
    #[must_use]
    #[inline]
    pub const fn custom(&self) -> Option<CustomHandle<'a>> {
        self.value.custom()
    }

    /// Returns the view of a string or C-string argument.
    #[must_use]
    #[inline]
    pub const fn str_view(&self) -> Option<StrView<'a>> {
        self.value.str_view()
    }
}

impl<'a> From<Value<'a>> for ArgumentRecord<'a> {
    #[inline]
    fn from(value: Value<'a>) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for ArgumentRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use core::cell::Cell;
    use core::ffi::CStr;
    use core::fmt;

    use super::ArgumentRecord;
    use crate::render::Render;
    use crate::tag::TypeTag;
    use crate::value::Value;

    struct Probe {
        id: u32,
        seen: Cell<Option<u32>>,
    }

    impl Render for Probe {
        fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
            self.seen.set(Some(self.id));
            write!(out, "probe#{}", self.id)
        }
    }

    crate::custom_arg!(Probe);

    #[test]
    fn short_records_as_int() {
        let x: i16 = -12;
        let r = ArgumentRecord::new(&x);
        assert_eq!(r.tag(), TypeTag::Int);
        assert_eq!(r.value(), Value::Int(-12));
        assert!(r.is_integral());
        assert!(r.is_arithmetic());
    }

    #[test]
    fn c_string_length_is_scanned() {
        let c = c"abc";
        let r = ArgumentRecord::new(c);
        assert_eq!(r.tag(), TypeTag::CStr);
        assert_eq!(r.str_view().map(|s| s.len()), Some(3));
        assert_eq!(r.str_view().unwrap(), "abc");
    }

    #[test]
    fn str_length_is_taken_without_scanning() {
        let s = String::from("with\0nul");
        let r = ArgumentRecord::new(&s);
        assert_eq!(r.tag(), TypeTag::Str);
        assert_eq!(r.str_view().unwrap().len(), 8);
    }

    #[test]
    fn default_record_is_none() {
        let r = ArgumentRecord::default();
        assert!(r.is_none());
        assert!(!r.is_some());
        assert_eq!(r.tag(), TypeTag::None);
        assert!(!r.is_integral());
        assert!(!r.is_arithmetic());
        assert_eq!(r, ArgumentRecord::none());
    }

    #[test]
    fn custom_record_calls_back_into_the_original() {
        let probe = Probe {
            id: 42,
            seen: Cell::new(None),
        };
        let r = ArgumentRecord::new(&probe);
        assert_eq!(r.tag(), TypeTag::Custom);
        assert!(!r.is_arithmetic());

        let mut out = String::new();
        r.custom().unwrap().render(&mut out).unwrap();
        assert_eq!(probe.seen.get(), Some(probe.id));
        assert_eq!(out, "probe#42");
        assert_eq!(r.to_string(), "probe#42");
    }

    #[test]
    fn opaque_record_is_custom_and_points_at_the_argument() {
        let n = 5_u16;
        let r = ArgumentRecord::opaque(&n);
        assert_eq!(r.tag(), TypeTag::Custom);
        assert!(!r.is_arithmetic());
        let handle = r.custom().unwrap();
        assert!(core::ptr::addr_eq(handle.data(), &n));
        assert_eq!(handle.type_name(), "u16");
        assert_eq!(r.to_string(), "");
    }

    #[test]
    fn explicit_c_str_type() {
        let c: &CStr = c"";
        assert_eq!(ArgumentRecord::new(c).str_view().unwrap().len(), 0);
    }
}
