// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only views over argument records.

use core::fmt;
use core::iter::Copied;
use core::slice;

use crate::record::ArgumentRecord;
use crate::tag::TypeTag;

/// An argument access or rendering error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgsError {
    /// Position was not below the argument count.
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of arguments in the view.
        len: usize,
    },
    /// Writing an argument to the output failed.
    Render {
        /// Position of the argument.
        index: usize,
        /// Tag of the argument.
        tag: TypeTag,
    },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "argument index out of range: index={index} len={len}")
            }
            Self::Render { index, tag } => {
                write!(f, "failed to render argument: index={index} tag={tag}")
            }
        }
    }
}

impl core::error::Error for ArgsError {}

/// A borrowed, positional view over argument records.
///
/// Two words wide; copy it freely. It never outlives the records it borrows.
#[derive(Copy, Clone, Debug, Default)]
pub struct ArgumentView<'s, 'a> {
    records: &'s [ArgumentRecord<'a>],
}

impl<'s, 'a> ArgumentView<'s, 'a> {
    /// Views `records` directly, without an [`ArgumentStore`](crate::ArgumentStore).
    #[must_use]
    #[inline]
    pub const fn new(records: &'s [ArgumentRecord<'a>]) -> Self {
        Self { records }
    }

    /// Returns the number of arguments.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.records.len()
    }

    /// Alias of [`ArgumentView::size`].
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no arguments.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the argument at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`. Use [`ArgumentView::try_get`] when the position comes
    /// from untrusted input.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> ArgumentRecord<'a> {
        self.records[index]
    }

    /// Returns the argument at `index`, or [`ArgsError::IndexOutOfRange`].
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<ArgumentRecord<'a>, ArgsError> {
        self.records
            .get(index)
            .copied()
            .ok_or(ArgsError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Returns the underlying records.
    #[must_use]
    #[inline]
    pub const fn records(&self) -> &'s [ArgumentRecord<'a>] {
        self.records
    }

    /// Iterates over the arguments in order.
    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'s, ArgumentRecord<'a>>> {
        self.records.iter().copied()
    }
}

impl<'s, 'a> IntoIterator for ArgumentView<'s, 'a> {
    type Item = ArgumentRecord<'a>;
    type IntoIter = Copied<slice::Iter<'s, ArgumentRecord<'a>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ArgsError, ArgumentView};
    use crate::record::ArgumentRecord;
    use crate::tag::TypeTag;
    use crate::value::Value;

    #[test]
    fn view_is_two_words() {
        assert_eq!(
            size_of::<ArgumentView<'_, '_>>(),
            2 * size_of::<usize>()
        );
    }

    #[test]
    fn get_follows_argument_order() {
        let (a, b, c) = (1_i64, 'b', 3.0_f64);
        let store = crate::args!(a, b, c);
        let view = store.view();
        assert_eq!(view.size(), 3);
        assert_eq!(view.get(0).value(), Value::LongLong(1));
        assert_eq!(view.get(1).value(), Value::Char('b'));
        assert_eq!(view.get(2).value(), Value::Double(3.0));
    }

    #[test]
    fn try_get_reports_out_of_range() {
        let store = crate::args!(1);
        let view = store.view();
        assert!(view.try_get(0).is_ok());
        let err = view.try_get(1).unwrap_err();
        assert_eq!(err, ArgsError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(
            err.to_string(),
            "argument index out of range: index=1 len=1"
        );
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn get_out_of_range_panics() {
        let store = crate::args!();
        let _ = store.view().get(0);
    }

    #[test]
    fn raw_records_can_be_viewed() {
        let records = [
            ArgumentRecord::from_value(Value::Bool(true)),
            ArgumentRecord::none(),
        ];
        let view = ArgumentView::new(&records);
        assert_eq!(view.len(), 2);
        let tags: alloc::vec::Vec<TypeTag> = view.into_iter().map(|r| r.tag()).collect();
        assert_eq!(tags, [TypeTag::Bool, TypeTag::None]);
    }

    #[test]
    fn default_view_is_empty() {
        let view = ArgumentView::default();
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }
}
