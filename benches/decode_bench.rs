//! Benchmarks for response decoding and the buffer pool

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simsimi::http::decoder::{decode_object, Slot};
use simsimi::http::{BufferPool, SimSimiParser};

const RELAY_OK: &[u8] = br#"{"status": 200, "respSentence": "I am fine, thank you for asking!", "id": 5512, "meta": {"model": "w", "tags": [1, 2, 3]}}"#;

const RELAY_ERR: &[u8] =
    br#"{"code": "ER_NO_SUCH_TABLE", "errno": 1146, "sqlState": "42S02", "index": 0}"#;

/// Benchmark the slot decoder on its own
fn benchmark_decode_object(c: &mut Criterion) {
    c.bench_function("decode_object", |b| {
        b.iter(|| {
            let mut status = 0;
            let mut sentence = String::new();
            decode_object(
                black_box(RELAY_OK),
                &mut [
                    ("status", Slot::Int(&mut status)),
                    ("respSentence", Slot::Str(&mut sentence)),
                ],
            )
            .unwrap();
            black_box((status, sentence));
        })
    });
}

/// Benchmark full relay parsing for both response shapes
fn benchmark_parse_relay(c: &mut Criterion) {
    let parser = SimSimiParser;

    c.bench_function("parse_relay_ok", |b| {
        b.iter(|| black_box(parser.parse_relay(black_box(RELAY_OK))))
    });

    c.bench_function("parse_relay_error", |b| {
        b.iter(|| black_box(parser.parse_relay(black_box(RELAY_ERR))))
    });
}

/// Benchmark pooled buffer checkout against fresh allocation
fn benchmark_buffer_pool(c: &mut Criterion) {
    let pool = BufferPool::new();

    c.bench_function("pool_acquire_fill", |b| {
        b.iter(|| {
            let mut buf = pool.acquire();
            buf.extend_from_slice(black_box(RELAY_OK));
            black_box(buf.len());
        })
    });

    c.bench_function("vec_alloc_fill", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1024);
            buf.extend_from_slice(black_box(RELAY_OK));
            black_box(buf.len());
        })
    });
}

criterion_group!(
    benches,
    benchmark_decode_object,
    benchmark_parse_relay,
    benchmark_buffer_pool
);
criterion_main!(benches);
