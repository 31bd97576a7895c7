// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::resolver::{DefaultLabelResolver, LabelResolver, default_arg_label};
use erased_args::trace::{TraceMask, TraceSink};
use erased_args::{ArgumentRecord, TypeTag};
use std::string::String;
use std::vec::Vec;

type BackendGuard = tracy_client::Span;

struct ScopeEntry {
    index: usize,
    tag: TypeTag,
    #[allow(dead_code, reason = "held for the lifetime of the zone")]
    label: String,
    #[allow(dead_code, reason = "closing the zone is the drop")]
    guard: Option<BackendGuard>,
}

/// A `TraceSink` that emits one Tracy zone per rendered argument via `tracy-client`.
pub struct ProfilingTraceSink<R = DefaultLabelResolver> {
    resolver: R,
    mask: TraceMask,
    stack: Vec<ScopeEntry>,
}

impl ProfilingTraceSink<DefaultLabelResolver> {
    /// Create a new sink with index/tag labels, observing every argument kind.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: LabelResolver> ProfilingTraceSink<R> {
    /// Create a new sink with a custom label resolver.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            mask: TraceMask::ALL,
            stack: Vec::new(),
        }
    }

    /// Restrict the argument kinds that get zones.
    #[must_use]
    pub fn with_mask(mut self, mask: TraceMask) -> Self {
        self.mask = mask;
        self
    }

    fn on_arg_enter(&mut self, index: usize, record: ArgumentRecord<'_>) {
        let tag = record.tag();
        let label = self
            .resolver
            .arg_label(index, record)
            .unwrap_or_else(|| default_arg_label(index, tag));
        let guard = self.start_scope(tag, &label, index);
        self.stack.push(ScopeEntry {
            index,
            tag,
            label,
            guard,
        });
    }

    fn on_arg_exit(&mut self, index: usize, tag: TypeTag) {
        if let Some(top) = self.stack.last()
            && top.index == index
            && top.tag == tag
        {
            // Dropping the entry closes its zone.
            drop(self.stack.pop());
            return;
        }
        // Unbalanced exit: close everything that is still open.
        self.drop_active_scopes();
    }

    fn start_scope(&self, tag: TypeTag, label: &str, index: usize) -> Option<BackendGuard> {
        let function_name = if tag == TypeTag::Custom {
            "erased_args.render_custom"
        } else {
            "erased_args.render_arg"
        };
        let client = tracy_client::Client::running()?;
        let line = u32::try_from(index).unwrap_or(u32::MAX);
        Some(client.span_alloc(Some(label), function_name, "erased_args", line, 0))
    }

    // Drop in LIFO order so nested spans close inner-to-outer.
    fn drop_active_scopes(&mut self) {
        while let Some(entry) = self.stack.pop() {
            drop(entry);
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<R: LabelResolver> TraceSink for ProfilingTraceSink<R> {
    fn mask(&self) -> TraceMask {
        self.mask
    }

    fn arg_enter(&mut self, index: usize, record: ArgumentRecord<'_>) {
        self.on_arg_enter(index, record);
    }

    fn arg_exit(&mut self, index: usize, tag: TypeTag, _ok: bool) {
        self.on_arg_exit(index, tag);
    }
}

impl<R> Default for ProfilingTraceSink<R>
where
    R: LabelResolver + Default,
{
    fn default() -> Self {
        Self::with_resolver(R::default())
    }
}

impl<R> std::fmt::Debug for ProfilingTraceSink<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilingTraceSink")
            .field("mask", &self.mask)
            .field("stack_depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::ProfilingTraceSink;
    use crate::resolver::TypeNameResolver;
    use erased_args::trace::{TraceMask, TraceSink};
    use erased_args::{TypeTag, args, dispatch};

    #[test]
    fn start_scope_without_tracy_client_does_not_panic() {
        let sink = ProfilingTraceSink::new();
        let _guard = sink.start_scope(TypeTag::Int, "test", 0);
    }

    #[test]
    fn scopes_balance_across_a_dispatch() {
        let mut sink = ProfilingTraceSink::with_resolver(TypeNameResolver::default());
        let mut out = String::new();
        dispatch::render_args(args!(1, "two", 3.0).view(), " ", &mut out, Some(&mut sink))
            .unwrap();
        assert_eq!(out, "1 two 3");
        assert_eq!(sink.depth(), 0);
    }

    #[test]
    fn mismatched_exit_drops_active_scopes() {
        let mut sink = ProfilingTraceSink::new().with_mask(TraceMask::INTEGRAL);
        assert_eq!(sink.mask(), TraceMask::INTEGRAL);
        let n = 1;
        let store = args!(n, n);
        sink.arg_enter(0, store.view().get(0));
        sink.arg_enter(1, store.view().get(1));
        sink.arg_exit(0, TypeTag::Int, true);
        assert_eq!(sink.depth(), 0);
    }
}
