use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt::Write;
use std::io::Cursor;

fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| (b'a' + (rng.random::<u8>() % 26)) as char)
        .collect()
}

/// `{"rows" : [ {"id" : .., "name" : .., "active" : ..}, .. ]}`
fn make_records(rows: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut out = String::from("{\"rows\":[");
    for i in 0..rows {
        if i > 0 {
            out.push(',');
        }
        write!(
            out,
            "{{\"id\":{i},\"name\":\"{}\",\"active\":{},\"score\":{:.4}}}",
            random_word(&mut rng, 8),
            rng.random_bool(0.5),
            rng.random::<f64>() * 100.0,
        )
        .unwrap();
    }
    out.push_str("]}");
    out
}

fn make_deep(depth: usize) -> String {
    let mut out = String::new();
    for _ in 0..depth {
        out.push_str("[1,");
    }
    out.push_str("[]");
    for _ in 0..depth {
        out.push(']');
    }
    out
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let cases = [
        ("records_100", make_records(100)),
        ("records_10k", make_records(10_000)),
        ("deep_256", make_deep(256)),
    ];
    let mut group = c.benchmark_group("decode");
    for (name, doc) in &cases {
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_function(format!("from_str::{name}"), |b| {
            b.iter_batched(
                || doc.clone(),
                |s| black_box(tidyjson::from_str(&s).unwrap()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("from_reader::{name}"), |b| {
            b.iter_batched(
                || doc.clone().into_bytes(),
                |bytes| black_box(tidyjson::from_reader(Cursor::new(bytes)).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, decode_benchmarks);
criterion_main!(benches);
