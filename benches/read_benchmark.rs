// benches/read_benchmark.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jt_rs::*;
use std::io::Cursor;

#[path = "../tests/common/mod.rs"]
mod common;

use common::{guid, JtFileBuilder, SyntheticSegment, TocPlacement};

fn build_file(segments: usize, byte_order: ByteOrder) -> Vec<u8> {
    let mut builder = JtFileBuilder::new()
        .byte_order(byte_order)
        .toc_placement(TocPlacement::AtEnd);
    for i in 0..segments {
        let segment_type = SegmentType::ALL[i % SegmentType::ALL.len()];
        builder = builder.segment(SyntheticSegment::new(guid(i as u32), segment_type, 256));
    }
    builder.build()
}

fn benchmark_read_container(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_container");

    for size in [10, 1000, 10000].iter() {
        let bytes = build_file(*size, ByteOrder::LeastSignificantFirst);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| {
                let jt = JtFile::from_reader(Cursor::new(bytes.as_slice())).unwrap();
                assert_eq!(jt.segment_count(), *size);
            });
        });
    }

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let bytes = build_file(10000, ByteOrder::MostSignificantFirst);
    let jt = JtFile::from_reader(Cursor::new(bytes)).unwrap();

    c.bench_function("get_segment", |b| {
        let mut n = 0u32;
        b.iter(|| {
            n = (n + 7919) % 10000;
            jt.get_segment(&guid(n)).unwrap().payload_length
        });
    });
}

fn benchmark_primitives(c: &mut Criterion) {
    let data: Vec<u8> = (0..8192u32).map(|i| i as u8).collect();
    let mut group = c.benchmark_group("primitives");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for (name, options) in [
        ("read_u64_full_width", ReaderOptions::default()),
        ("read_u64_legacy", ReaderOptions::legacy()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut reader =
                    PrimitiveReader::with_options(Cursor::new(data.as_slice()), options.clone()).unwrap();
                let mut sum = 0u64;
                while reader.remaining().unwrap() >= 8 {
                    sum = sum.wrapping_add(reader.read_u64().unwrap());
                }
                sum
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_read_container, benchmark_lookup, benchmark_primitives);
criterion_main!(benches);
