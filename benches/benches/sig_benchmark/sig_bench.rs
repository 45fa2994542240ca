use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use svcsig_core::{parse_sig_str, text::parse_data_row, to_sig_string};
use svcsig_types::{DataRow, Instrument, SigRecord};

/// Синтетическая запись HR-1024i с `bands` строками данных.
fn synthetic_record(bands: usize) -> SigRecord {
    let mut record = SigRecord::default();
    record.common.name = "bench_000".into();
    record.common.instrument = Instrument::new("HI", "1012113", "HR-1024i");
    record.common.factors.comment = "Detector: Si,Overlap: 0,0".into();
    record.reference.memory_slot = 10;
    record.target.memory_slot = 11;
    record.reference.longitude = "07739.1234W".into();
    record.reference.latitude = "3858.5678N".into();

    record.data = (0..bands)
        .map(|i| {
            let wl = 338.5 + i as f32 * 2.1;
            DataRow::new(wl, 2800.0 + (i % 97) as f32, 2700.0 + (i % 89) as f32, 96.4)
        })
        .collect();
    record
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("sig_parse");

    for bands in [256usize, 1024] {
        let text = to_sig_string(&synthetic_record(bands)).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bands), &text, |b, text| {
            b.iter(|| parse_sig_str(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("sig_write");

    for bands in [256usize, 1024] {
        let record = synthetic_record(bands);
        group.throughput(Throughput::Elements(bands as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bands), &record, |b, record| {
            b.iter(|| to_sig_string(black_box(record)).unwrap());
        });
    }

    group.finish();
}

fn bench_data_row(c: &mut Criterion) {
    c.bench_function("parse_data_row", |b| {
        b.iter(|| parse_data_row(black_box("  1012.3  2812.164  2710.28  96.381 ")).unwrap());
    });
}

fn bench_geodetic(c: &mut Criterion) {
    let record = synthetic_record(1);
    c.bench_function("decimal_longitude", |b| {
        b.iter(|| black_box(&record.reference).decimal_longitude().unwrap());
    });
}

criterion_group!(benches, bench_parse, bench_write, bench_data_row, bench_geodetic);
criterion_main!(benches);
