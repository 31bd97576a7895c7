// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiling adapters for `erased_args` (currently Tracy).
//!
//! This crate is `std`-only and keeps `erased_args` itself free of profiling dependencies.
//! It listens for argument enter/exit callbacks from the dispatch loop and emits matching
//! profiling zones.
//!
//! ## Backend
//! This crate currently supports the Tracy backend via `tracy-client`.
//!
//! ## Example
//! ```ignore
//! use erased_args::{args, dispatch};
//! use erased_args_profiling::ProfilingTraceSink;
//!
//! let mut sink = ProfilingTraceSink::new();
//! let mut out = String::new();
//! dispatch::render_args(args!(1, "two").view(), " ", &mut out, Some(&mut sink))?;
//! # Ok::<(), erased_args::ArgsError>(())
//! ```

mod resolver;
mod sink;

pub use resolver::{DefaultLabelResolver, LabelResolver, TypeNameResolver};
pub use sink::ProfilingTraceSink;
