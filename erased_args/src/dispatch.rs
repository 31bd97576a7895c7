// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference dispatch over an [`ArgumentView`].
//!
//! These functions are the plain, policy-free way of turning erased arguments into text: each
//! argument is written with its [`Display`](core::fmt::Display) form, and custom arguments go
//! through their [`CustomHandle`](crate::CustomHandle). Renderers with real formatting policy
//! match on [`ArgumentRecord::value`] themselves and only borrow the tracing contract from here.

use core::fmt;

use crate::record::ArgumentRecord;
use crate::trace::TraceSink;
use crate::value::Value;
use crate::view::{ArgsError, ArgumentView};

/// Writes one argument to `out`.
///
/// `index` is only used for error reporting and tracing.
pub fn render_arg(
    record: ArgumentRecord<'_>,
    index: usize,
    out: &mut dyn fmt::Write,
    trace: Option<&mut (dyn TraceSink + '_)>,
) -> Result<(), ArgsError> {
    let tag = record.tag();
    let result = match trace.filter(|t| t.mask().observes(tag)) {
        Some(sink) => {
            sink.arg_enter(index, record);
            let result = write_value(record.value(), out);
            sink.arg_exit(index, tag, result.is_ok());
            result
        }
        None => write_value(record.value(), out),
    };
    result.map_err(|fmt::Error| ArgsError::Render { index, tag })
}

/// Writes the argument at `index` to `out`.
pub fn render_at(
    view: ArgumentView<'_, '_>,
    index: usize,
    out: &mut dyn fmt::Write,
    trace: Option<&mut (dyn TraceSink + '_)>,
) -> Result<(), ArgsError> {
    render_arg(view.try_get(index)?, index, out, trace)
}

/// Writes every argument to `out` in order, with `separator` between them.
///
/// Stops at the first argument that fails to render. A separator belongs to the argument it
/// precedes: if writing it fails, the error carries that argument's index and tag, and the
/// trace sink is not called for it.
pub fn render_args(
    view: ArgumentView<'_, '_>,
    separator: &str,
    out: &mut dyn fmt::Write,
    mut trace: Option<&mut (dyn TraceSink + '_)>,
) -> Result<(), ArgsError> {
    for (index, record) in view.iter().enumerate() {
        if index > 0 {
            out.write_str(separator).map_err(|fmt::Error| ArgsError::Render {
                index,
                tag: record.tag(),
            })?;
        }
        render_arg(record, index, out, trace.as_deref_mut())?;
    }
    Ok(())
}

fn write_value(value: Value<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
    match value {
        Value::Custom(handle) => handle.render(out),
        other => write!(out, "{other}"),
    }
}
