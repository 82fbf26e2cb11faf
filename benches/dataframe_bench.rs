//! DataFrame Benchmarks
//!
//! Ingestion from each input shape and the main transform operators.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rowframe::{DataFrame, DataInput, Row, Value};

fn make_csv(n_rows: usize) -> String {
    let mut csv = String::from("id,name,score,group\n");
    for i in 0..n_rows {
        csv.push_str(&format!("{},name_{},{},{}\n", i, i, i as f64 * 0.5, i % 7));
    }
    csv
}

fn make_records(n_rows: usize) -> Vec<Row> {
    (0..n_rows)
        .map(|i| {
            Row::new()
                .with("id", i)
                .with("name", format!("name_{}", i))
                .with("score", i as f64 * 0.5)
                .with("group", i % 7)
        })
        .collect()
}

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingestion");

    for size in [100, 1_000, 10_000] {
        let csv = make_csv(size);
        group.bench_with_input(BenchmarkId::new("csv", size), &csv, |b, csv| {
            b.iter(|| DataFrame::from_csv(std::hint::black_box(csv)).unwrap());
        });

        let json = serde_json::to_string(&make_records(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("json_text", size), &json, |b, json| {
            b.iter(|| {
                DataFrame::new(Some(DataInput::from(json.as_str())), None, None, None).unwrap()
            });
        });

        let records = make_records(size);
        group.bench_with_input(BenchmarkId::new("records", size), &records, |b, records| {
            b.iter(|| DataFrame::from_records(std::hint::black_box(records.clone())).unwrap());
        });
    }

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let df = DataFrame::from_records(make_records(10_000)).unwrap();

    group.bench_function("select", |b| {
        b.iter(|| df.select(["id", "score"]).unwrap());
    });

    group.bench_function("filter", |b| {
        b.iter(|| {
            df.filter(|row| row["score"].as_f64().is_some_and(|s| s > 2_500.0))
                .unwrap()
        });
    });

    group.bench_function("assign", |b| {
        b.iter(|| {
            df.assign("double", |row| row["score"].as_f64().map(|s| s * 2.0))
                .unwrap()
        });
    });

    group.bench_function("group_by", |b| {
        b.iter(|| df.group_by("group").unwrap());
    });

    group.bench_function("transform", |b| {
        b.iter(|| {
            df.transform(|row| Row::new().with("key", row["name"].clone()).with("v", Value::Null))
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ingestion, bench_transforms);
criterion_main!(benches);
