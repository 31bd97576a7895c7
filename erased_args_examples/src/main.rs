// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walkthrough of `erased_args`: capture arguments, inspect them through a view, render them.

use std::ffi::CString;
use std::fmt;

use erased_args::{ArgsError, ArgumentView, Render, Value, args, custom_arg, dispatch};

/// A user type with its own formatter.
struct Rgb(u8, u8, u8);

impl Render for Rgb {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

custom_arg!(Rgb);

/// Prints one line per argument with its tag and, where it has one, a numeric reading.
fn inspect(view: ArgumentView<'_, '_>) -> Result<(), ArgsError> {
    for (index, record) in view.iter().enumerate() {
        let mut rendered = String::new();
        dispatch::render_arg(record, index, &mut rendered, None)?;
        match record.value().as_number() {
            Some(number) => println!("  {index}: {:<11} {rendered} ({number:?})", record.tag()),
            None => println!("  {index}: {:<11} {rendered}", record.tag()),
        }
    }
    Ok(())
}

fn main() -> Result<(), ArgsError> {
    let store = args!(114, 514, "Be One With Yuri!");
    let mut line = String::new();
    dispatch::render_args(store.view(), " ", &mut line, None)?;
    println!("{line}");
    if let Some(text) = store.view().get(2).str_view() {
        println!("  string argument has {} bytes", text.len());
    }

    let path = CString::new("/tmp/yuri.txt").unwrap_or_default();
    let color = Rgb(0xff, 0x66, 0xcc);
    let mixed = args!(-3_i8, u64::MAX, 0.5_f32, 'y', path, color, true);
    println!("mixed arguments:");
    inspect(mixed.view())?;

    let integral = mixed
        .view()
        .iter()
        .filter(|record| record.is_integral())
        .count();
    println!("  {integral} integral, {} total", mixed.len());

    let empty = args!();
    println!("empty store: size={} capacity={}", empty.view().size(), empty.capacity());

    if let Some(Value::Custom(handle)) = mixed.view().try_get(5).ok().map(|r| r.value()) {
        let mut out = String::new();
        if handle.render(&mut out).is_ok() {
            println!("custom {} at {:p} renders as {out}", handle.type_name(), handle.data());
        }
    }
    Ok(())
}
