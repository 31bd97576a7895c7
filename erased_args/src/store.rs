// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-capacity argument storage for a single call.
//!
//! An [`ArgumentStore`] is normally built by [`args!`](crate::args) right inside the call that
//! consumes it, the same way `format_args!` is used:
//!
//! ```
//! use erased_args::args;
//!
//! fn count_integral(args: erased_args::ArgumentView<'_, '_>) -> usize {
//!     args.iter().filter(|a| a.is_integral()).count()
//! }
//!
//! assert_eq!(count_integral(args!(114, 514, "Be One With Yuri!").view()), 2);
//! ```
//!
//! The store borrows every argument, so it cannot outlive them, and it cannot be copied:
//!
//! ```compile_fail
//! use erased_args::args;
//!
//! let n = 1;
//! let store = args!(n);
//! let copy = store.clone();
//! ```
//!
//! A store cannot be used after an argument it borrows is gone:
//!
//! ```compile_fail
//! use erased_args::args;
//!
//! let store;
//! {
//!     let name = String::from("yuri");
//!     store = args!(name);
//! }
//! assert_eq!(store.len(), 1);
//! ```
//!
//! and a view cannot outlive its store:
//!
//! ```compile_fail
//! use erased_args::{ArgumentView, args};
//!
//! fn leak() -> ArgumentView<'static, 'static> {
//!     let store = args!(114, 514);
//!     store.view()
//! }
//! ```
//!
//! Even with `'static` arguments, stores and views stay on the thread that built them:
//!
//! ```compile_fail
//! use erased_args::args;
//!
//! static N: i32 = 114;
//! let store = args!(N);
//! std::thread::spawn(move || store.len());
//! ```
//!
//! ```compile_fail
//! fn assert_send<T: Send>() {}
//! assert_send::<erased_args::ArgumentView<'static, 'static>>();
//! ```

use crate::record::ArgumentRecord;
use crate::view::ArgumentView;

/// Owns the records of one argument list, in call order.
///
/// `N` is the argument count, except for the empty list, which is stored as
/// `ArgumentStore<'_, 1>` with one unused slot.
#[derive(Debug)]
pub struct ArgumentStore<'a, const N: usize> {
    records: [ArgumentRecord<'a>; N],
    len: usize,
}

impl<'a, const N: usize> ArgumentStore<'a, N> {
    const HAS_SLOT: () = assert!(N >= 1, "an argument store needs at least one slot");

    /// Stores `records` in order.
    #[must_use]
    #[inline]
    pub const fn new(records: [ArgumentRecord<'a>; N]) -> Self {
        let () = Self::HAS_SLOT;
        Self { records, len: N }
    }

    /// Returns the records of the argument list.
    #[must_use]
    #[inline]
    pub fn records(&self) -> &[ArgumentRecord<'a>] {
        let (used, _) = self.records.split_at(self.len);
        used
    }

    /// Returns the number of arguments.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the argument list is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, which is never zero.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns a view over the arguments.
    #[must_use]
    #[inline]
    pub fn view(&self) -> ArgumentView<'_, 'a> {
        ArgumentView::new(self.records())
    }
}

impl ArgumentStore<'_, 1> {
    /// The store of an empty argument list.
    #[must_use]
    #[inline]
    pub const fn empty() -> Self {
        Self {
            records: [ArgumentRecord::none()],
            len: 0,
        }
    }
}

impl<'s, 'a, const N: usize> From<&'s ArgumentStore<'a, N>> for ArgumentView<'s, 'a> {
    #[inline]
    fn from(store: &'s ArgumentStore<'a, N>) -> Self {
        store.view()
    }
}

/// Builds an [`ArgumentStore`] from a list of arguments.
///
/// Each argument is borrowed (never copied) and recorded in order. Types with a
/// [`MapArg`](crate::MapArg) impl are normalized through it; any other type becomes an opaque
/// custom argument (see [`ArgumentRecord::opaque`]). `args!()` builds the empty store.
///
/// The choice is made from the argument's concrete type at the call site. Inside a generic
/// function, an argument of a type parameter `T` only uses its [`MapArg`](crate::MapArg) impl
/// when `T: MapArg` is in scope as a bound.
#[macro_export]
macro_rules! args {
    () => {
        $crate::ArgumentStore::empty()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__bind_args!([] $($arg,)+)
    };
}

/// Binds every argument in one `match` scrutinee so temporaries live as long as the enclosing
/// statement, then records each binding.
#[doc(hidden)]
#[macro_export]
macro_rules! __bind_args {
    ([$($name:ident => $bound:expr;)*] $head:expr, $($rest:expr,)*) => {
        $crate::__bind_args!([$($name => $bound;)* arg => $head;] $($rest,)*)
    };
    ([$($name:ident => $bound:expr;)+]) => {
        match ($(&$bound,)+) {
            ($($name,)+) => {
                #[allow(unused_imports, reason = "only one of the two is picked per argument")]
                use $crate::__private::{MappedArg as _, OpaqueArg as _};
                $crate::ArgumentStore::new([$((&&$crate::__private::ArgWrap($name)).record()),+])
            }
        }
    };
}
