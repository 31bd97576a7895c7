// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use erased_args::{ArgumentRecord, TypeTag};
use std::collections::HashMap;
use std::string::String;

/// Optional label resolver for profiling zones.
///
/// Return `None` to fall back to the default index/tag labels.
pub trait LabelResolver {
    /// Resolve a label for the zone around argument `index`.
    fn arg_label(&mut self, _index: usize, _record: ArgumentRecord<'_>) -> Option<String> {
        None
    }
}

/// Default resolver that keeps stable index/tag labels.
#[derive(Default, Debug)]
pub struct DefaultLabelResolver;

impl LabelResolver for DefaultLabelResolver {}

/// Resolver that labels custom arguments with the name of their erased type.
#[derive(Default, Debug)]
pub struct TypeNameResolver {
    custom_cache: HashMap<&'static str, String>,
}

impl LabelResolver for TypeNameResolver {
    fn arg_label(&mut self, _index: usize, record: ArgumentRecord<'_>) -> Option<String> {
        let type_name = record.custom()?.type_name();
        if let Some(label) = self.custom_cache.get(type_name) {
            return Some(label.clone());
        }
        let label = format!("custom:{}", short_type_name(type_name));
        self.custom_cache.insert(type_name, label.clone());
        Some(label)
    }
}

/// Drops the module path of the outermost type, keeping generic arguments as written.
fn short_type_name(type_name: &str) -> &str {
    let generics = type_name.find('<').unwrap_or(type_name.len());
    let path_end = type_name[..generics].rfind("::").map_or(0, |i| i + 2);
    &type_name[path_end..]
}

pub(crate) fn default_arg_label(index: usize, tag: TypeTag) -> String {
    format!("arg{index}:{tag}")
}
