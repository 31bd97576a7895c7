// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-site dispatch for [`args!`](crate::args). Not public API.
//!
//! `(&&ArgWrap(arg)).record()` resolves to [`MappedArg`] when the argument type has a
//! [`MapArg`] impl, because that impl sits one reference deeper and method lookup reaches it
//! first. Every other type falls through to [`OpaqueArg`].

use crate::mapper::MapArg;
use crate::record::ArgumentRecord;

/// A borrowed argument awaiting dispatch.
#[derive(Debug)]
pub struct ArgWrap<'a, T: ?Sized>(pub &'a T);

/// Records an argument through its [`MapArg`] impl.
pub trait MappedArg<'a> {
    /// Builds the record.
    fn record(self) -> ArgumentRecord<'a>;
}

impl<'a, T: MapArg<'a> + ?Sized> MappedArg<'a> for &&ArgWrap<'a, T> {
    #[inline]
    fn record(self) -> ArgumentRecord<'a> {
        ArgumentRecord::new(self.0)
    }
}

/// Records an argument with no [`MapArg`] impl as an opaque custom argument.
pub trait OpaqueArg<'a> {
    /// Builds the record.
    fn record(self) -> ArgumentRecord<'a>;
}

impl<'a, T: ?Sized> OpaqueArg<'a> for &ArgWrap<'a, T> {
    #[inline]
    fn record(self) -> ArgumentRecord<'a> {
        ArgumentRecord::opaque(self.0)
    }
}
