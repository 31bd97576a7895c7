// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased, allocation-free argument lists for printf-style renderers.
//!
//! `erased_args` turns a heterogeneous, statically typed argument list into a uniform runtime
//! form that a renderer can inspect without knowing the original types:
//!
//! - [`MapArg`] normalizes each source type onto a small closed set of wire types
//!   (`i16` becomes `i32`, `String` becomes a string view, and so on), fixing its [`TypeTag`] at
//!   compile time.
//! - [`ArgumentRecord`] holds one normalized [`Value`].
//! - [`args!`] builds an [`ArgumentStore`]: a fixed array of records, one per argument, in call
//!   order, borrowed from the argument expressions.
//! - [`ArgumentView`] is the cheap, positional view a renderer consumes.
//! - Types with no built-in representation implement [`Render`] and travel as a
//!   [`CustomHandle`]. Types that do neither still pass through [`args!`] as opaque custom
//!   arguments.
//!
//! Nothing here allocates. Strings, pointers and custom values are borrowed, and the borrow is
//! tracked by the `'a` lifetime on every type, so an argument list cannot outlive the call
//! that built it. Values hold raw pointers and trait objects and are therefore neither `Send`
//! nor `Sync`.
//!
//! ```
//! use erased_args::{TypeTag, Value, args};
//!
//! let store = args!(114, 514, "Be One With Yuri!");
//! let view = store.view();
//! assert_eq!(view.size(), 3);
//! assert_eq!(view.get(0).value(), Value::Int(114));
//! assert!(view.get(1).is_integral());
//! assert_eq!(view.get(2).tag(), TypeTag::Str);
//! assert_eq!(view.get(2).str_view().unwrap(), "Be One With Yuri!");
//! ```
//!
//! Format-string parsing and formatting policy (width, precision, locale) are left to the
//! renderer. [`dispatch`] has a plain reference rendering and [`trace`] has the hooks profilers
//! attach to.

#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod mapper;
pub mod record;
pub mod render;
pub mod store;
pub mod str_view;
pub mod tag;
pub mod trace;
pub mod value;
pub mod view;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use mapper::{MapArg, WireType, mapped_tag};
pub use record::ArgumentRecord;
pub use render::{Displayed, Render};
pub use store::ArgumentStore;
pub use str_view::{StrView, c_str_len};
pub use tag::TypeTag;
pub use value::{CustomHandle, LongDouble, Number, Value};
pub use view::{ArgsError, ArgumentView};
