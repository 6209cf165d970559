use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_ltsv::{from_str, to_string, Reader, Record};

fn access_log(lines: usize) -> Vec<Record> {
    (0..lines)
        .map(|i| {
            [
                ("host", format!("10.0.{}.{}", i / 256 % 256, i % 256)),
                ("ident", "-".to_string()),
                ("user", format!("user{}", i % 17)),
                ("time", "[10/Oct/2000:13:55:36 -0700]".to_string()),
                ("req", format!("GET /item/{} HTTP/1.1", i)),
                ("status", if i % 10 == 0 { "404" } else { "200" }.to_string()),
                ("size", (i * 37 % 9000).to_string()),
                ("ua", "Mozilla/5.0 (X11; Linux x86_64)".to_string()),
            ]
            .into_iter()
            .collect()
        })
        .collect()
}

fn benchmark_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all");

    for size in [10, 100, 1000].iter() {
        let text = to_string(&access_log(*size)).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_read_streaming(c: &mut Criterion) {
    let text = to_string(&access_log(1000)).unwrap();

    c.bench_function("read_record_count_404", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(text.as_bytes()));
            let mut not_found = 0;
            while let Ok(Some(record)) = reader.read_record() {
                if record.get("status") == Some("404") {
                    not_found += 1;
                }
            }
            not_found
        })
    });
}

fn benchmark_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_all");

    for size in [10, 100, 1000].iter() {
        let records = access_log(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| to_string(black_box(records)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_read,
    benchmark_read_streaming,
    benchmark_write
);
criterion_main!(benches);
