// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the `erased_args` conformance tests.
//!
//! The tests themselves live in `tests/`. This library only provides custom argument types whose
//! rendering is observable from the outside.

use core::cell::Cell;
use core::fmt;

use erased_args::{Render, custom_arg};

/// A custom argument that records, through its render callback, the id it was built with.
///
/// After rendering, [`Sentinel::seen`] must equal [`Sentinel::id`]; anything else means the
/// handle was bound to the wrong object.
#[derive(Debug)]
pub struct Sentinel {
    id: u64,
    seen: Cell<Option<u64>>,
    renders: Cell<usize>,
}

impl Sentinel {
    /// Creates a sentinel that has not been rendered yet.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            seen: Cell::new(None),
            renders: Cell::new(0),
        }
    }

    /// The id this sentinel was built with.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The id written by the last render, if any.
    #[must_use]
    pub fn seen(&self) -> Option<u64> {
        self.seen.get()
    }

    /// Number of times the render callback ran.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

impl Render for Sentinel {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.seen.set(Some(self.id));
        self.renders.set(self.renders.get() + 1);
        write!(out, "sentinel#{}", self.id)
    }
}

/// A 2-D point rendered the way a dedicated formatter would: `(x, y)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Render for Point {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{self}")
    }
}

custom_arg!(Sentinel, Point);
