// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering capability behind custom arguments.

use core::fmt;

/// A type that knows how to render itself for a custom argument.
///
/// Implement this for any type that has no built-in wire representation, then make it an
/// argument with [`custom_arg!`](crate::custom_arg) (or wrap a `Display` type in [`Displayed`]).
/// Output goes to whatever sink the renderer hands in.
pub trait Render {
    /// Writes the rendered form of `self` to `out`.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}

impl Render for fmt::Arguments<'_> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_fmt(*self)
    }
}

/// Passes any [`Display`](fmt::Display) type as a custom argument.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Render for Displayed<T> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}
