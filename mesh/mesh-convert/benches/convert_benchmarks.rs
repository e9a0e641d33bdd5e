//! Benchmarks for the conversion pipeline.
//!
//! Run with: cargo bench -p mesh-convert
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-convert -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-convert -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mesh_convert::{parse_obj, triangulate, write_stl};
use std::fmt::Write as _;

/// Generate OBJ source text for a grid of quads.
///
/// A `size` x `size` grid has `(size + 1)^2` vertices and `size^2` quad
/// faces, each of which fans into two triangles.
fn grid_obj(size: usize) -> String {
    let mut source = String::new();
    for row in 0..=size {
        for col in 0..=size {
            let _ = writeln!(source, "v {col} {row} 0");
        }
    }
    let stride = size + 1;
    for row in 0..size {
        for col in 0..size {
            let a = row * stride + col + 1;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            let _ = writeln!(source, "f {a} {b} {c} {d}");
        }
    }
    source
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_obj");
    for size in [8usize, 32, 64] {
        let source = grid_obj(size);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| parse_obj(black_box(source.as_bytes())));
        });
    }
    group.finish();
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for size in [8usize, 32, 64] {
        let mesh = parse_obj(grid_obj(size).as_bytes()).expect("grid source parses");
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &mesh, |b, mesh| {
            b.iter(|| triangulate(black_box(mesh)));
        });
    }
    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_stl");
    for size in [8usize, 32, 64] {
        let mesh = parse_obj(grid_obj(size).as_bytes()).expect("grid source parses");
        let facets = triangulate(&mesh).expect("grid mesh triangulates");
        group.throughput(Throughput::Elements(facets.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &facets, |b, facets| {
            b.iter(|| {
                let mut bytes = Vec::with_capacity(84 + 50 * facets.len());
                write_stl(black_box(facets), &mut bytes).expect("write to Vec cannot fail");
                bytes
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_triangulate, bench_emit);
criterion_main!(benches);
