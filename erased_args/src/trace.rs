// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation hooks for argument dispatch.
//!
//! The dispatch loop in [`crate::dispatch`] reports every argument it renders to an optional
//! [`TraceSink`]. Sinks pick the argument kinds they care about with a [`TraceMask`]; profiling
//! and logging adapters live outside this crate.

use core::ops::BitOr;

use crate::record::ArgumentRecord;
use crate::tag::TypeTag;

/// Bitmask of argument kinds a [`TraceSink`] wants to observe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TraceMask(u8);

impl TraceMask {
    /// Observe nothing.
    pub const NONE: Self = Self(0);
    /// Integer, `bool` and `char` arguments.
    pub const INTEGRAL: Self = Self(1 << 0);
    /// Floating-point arguments.
    pub const FLOAT: Self = Self(1 << 1);
    /// String and C-string arguments.
    pub const STRING: Self = Self(1 << 2);
    /// Pointer arguments.
    pub const POINTER: Self = Self(1 << 3);
    /// Custom arguments.
    pub const CUSTOM: Self = Self(1 << 4);
    /// Every kind.
    pub const ALL: Self = Self(
        Self::INTEGRAL.0 | Self::FLOAT.0 | Self::STRING.0 | Self::POINTER.0 | Self::CUSTOM.0,
    );

    /// Returns the single bit covering `tag` (`NONE` for [`TypeTag::None`]).
    #[must_use]
    pub const fn of(tag: TypeTag) -> Self {
        if tag.is_integral() {
            Self::INTEGRAL
        } else if tag.is_float() {
            Self::FLOAT
        } else {
            match tag {
                TypeTag::CStr | TypeTag::Str => Self::STRING,
                TypeTag::Pointer => Self::POINTER,
                TypeTag::Custom => Self::CUSTOM,
                _ => Self::NONE,
            }
        }
    }

    /// Returns `true` if this mask contains every bit in `other`.
    #[must_use]
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns `true` if this mask observes arguments tagged `tag`.
    #[must_use]
    #[inline]
    pub const fn observes(self, tag: TypeTag) -> bool {
        let bit = Self::of(tag);
        bit.0 != 0 && self.contains(bit)
    }
}

impl BitOr for TraceMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Receives enter/exit events around each rendered argument.
///
/// Only arguments whose tag is covered by [`TraceSink::mask`] are reported. Every
/// `arg_enter` is matched by an `arg_exit` for the same index, including when rendering fails.
pub trait TraceSink {
    /// Kinds of arguments to report.
    fn mask(&self) -> TraceMask;

    /// Called before argument `index` is rendered.
    fn arg_enter(&mut self, index: usize, record: ArgumentRecord<'_>);

    /// Called after argument `index` is rendered; `ok` is `false` if rendering failed.
    fn arg_exit(&mut self, index: usize, tag: TypeTag, ok: bool);
}
