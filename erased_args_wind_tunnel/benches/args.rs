// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use erased_args::trace::{TraceMask, TraceSink};
use erased_args::{ArgumentRecord, ArgumentView, Displayed, Render, TypeTag, Value, args, dispatch};

/// Entry point for `erased_args` wind-tunnel benchmarks.
///
/// Scenarios cover the three places erased arguments cost time: building the store at the call
/// site, walking the view on the consumer side, and rendering through the reference dispatch.
fn bench_args(c: &mut Criterion) {
    bench_store_build(c);
    bench_view_scan(c);
    bench_render_mixed(c);
    bench_render_custom(c);
    bench_render_traced(c);
}

struct Vec2 {
    x: f32,
    y: f32,
}

impl Render for Vec2 {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "<{}, {}>", self.x, self.y)
    }
}

erased_args::custom_arg!(Vec2);

/// Writer that only counts bytes, so timings exclude allocation.
#[derive(Default)]
struct CountingWriter(usize);

impl fmt::Write for CountingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

#[derive(Default)]
struct NopSink {
    entered: usize,
}

impl TraceSink for NopSink {
    fn mask(&self) -> TraceMask {
        TraceMask::ALL
    }

    fn arg_enter(&mut self, _index: usize, _record: ArgumentRecord<'_>) {
        self.entered += 1;
    }

    fn arg_exit(&mut self, _index: usize, _tag: TypeTag, _ok: bool) {}
}

/// Sum of integral and float arguments, standing in for a consumer that inspects values.
fn scan(view: ArgumentView<'_, '_>) -> f64 {
    let mut acc = 0.0;
    for record in view {
        acc += match record.value() {
            Value::Int(v) => f64::from(v),
            Value::UInt(v) => f64::from(v),
            Value::Float(v) => f64::from(v),
            Value::Double(v) => v,
            Value::Str(s) | Value::CStr(s) => s.len() as f64,
            _ => 0.0,
        };
    }
    acc
}

fn bench_store_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_build");
    let text = String::from("Be One With Yuri!");
    group.bench_function("three_scalars", |b| {
        b.iter(|| {
            let (a, b2, c2) = black_box((114, 514, 1.5_f64));
            let store = args!(a, b2, c2);
            black_box(store.len())
        });
    });
    group.bench_function("eight_mixed", |b| {
        b.iter(|| {
            let n = black_box(7_u8);
            let store = args!(n, text, 'x', true, 2.0_f32, 3_i64, n, text);
            black_box(store.view().size())
        });
    });
    group.finish();
}

fn bench_view_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_scan");
    let s = "yuri";
    let store = args!(1, 2_u32, 3.0_f32, 4.0_f64, s, 5, 6_u32, 7.0_f32, 8.0_f64, s, 9, 10_u32);
    for take in [1_usize, 4, 12] {
        let view = ArgumentView::new(&store.records()[..take]);
        group.bench_with_input(BenchmarkId::from_parameter(take), &view, |b, view| {
            b.iter(|| black_box(scan(black_box(*view))));
        });
    }
    group.finish();
}

fn bench_render_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_mixed");
    let store = args!(114, 514, "Be One With Yuri!", 2.5_f64, 'q', true);
    group.bench_function("counting_writer", |b| {
        b.iter(|| {
            let mut out = CountingWriter::default();
            dispatch::render_args(black_box(store.view()), " ", &mut out, None).unwrap();
            black_box(out.0)
        });
    });
    group.bench_function("string_writer", |b| {
        let mut out = String::with_capacity(64);
        b.iter(|| {
            out.clear();
            dispatch::render_args(black_box(store.view()), " ", &mut out, None).unwrap();
            black_box(out.len())
        });
    });
    group.finish();
}

fn bench_render_custom(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_custom");
    let v = Vec2 { x: 1.0, y: -2.0 };
    let d = Displayed(12_345_u64);
    let plain = 12_345_u64;
    let custom = args!(v, d);
    let builtin = args!(plain, plain);
    group.bench_function("custom_handles", |b| {
        b.iter(|| {
            let mut out = CountingWriter::default();
            dispatch::render_args(black_box(custom.view()), ",", &mut out, None).unwrap();
            black_box(out.0)
        });
    });
    group.bench_function("builtin_baseline", |b| {
        b.iter(|| {
            let mut out = CountingWriter::default();
            dispatch::render_args(black_box(builtin.view()), ",", &mut out, None).unwrap();
            black_box(out.0)
        });
    });
    group.finish();
}

fn bench_render_traced(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_traced");
    let store = args!(1, 2, 3, 4, 5, 6, 7, 8);
    group.bench_function("untraced", |b| {
        b.iter(|| {
            let mut out = CountingWriter::default();
            dispatch::render_args(black_box(store.view()), ",", &mut out, None).unwrap();
            black_box(out.0)
        });
    });
    group.bench_function("nop_sink", |b| {
        let mut sink = NopSink::default();
        b.iter(|| {
            let mut out = CountingWriter::default();
            dispatch::render_args(black_box(store.view()), ",", &mut out, Some(&mut sink))
                .unwrap();
            black_box(out.0)
        });
        black_box(sink.entered);
    });
    group.finish();
}

criterion_group!(benches, bench_args);
criterion_main!(benches);
