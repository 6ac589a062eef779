use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pglit::{Clock, Date, GenericArray, Scan, StringArray, TimestampTz, ToValue, ValueRef, bytea};

fn timestamptz_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamptz_scan");
    for input in [
        "2001-02-03 04:05:06+07",
        "2001-02-03 04:05:06.123456789-08:09:10",
        "20010-02-03 04:05:06+07:30:09 BC",
    ] {
        group.bench_with_input(input, input.as_bytes(), |b, input| {
            let mut ts = TimestampTz::default();
            b.iter(|| ts.scan(ValueRef::Bytes(black_box(input))).unwrap());
        });
    }
    group.finish();
}

fn timestamptz_value(c: &mut Criterion) {
    let mut ts = TimestampTz::default();
    ts.scan(ValueRef::Bytes(b"2001-02-03 04:05:06.123456789-08:09:10")).unwrap();
    c.bench_function("timestamptz_value", |b| {
        b.iter(|| black_box(&ts).to_value().unwrap());
    });
}

fn date_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_codec");
    group.bench_with_input("scan", &b"2001-02-03"[..], |b, input| {
        let mut date = Date::default();
        b.iter(|| date.scan(ValueRef::Bytes(black_box(input))).unwrap());
    });
    let date = Date { infinity: 0, year: 2001, month: 2, day: 3 };
    group.bench_function("value", |b| {
        b.iter(|| black_box(&date).to_value().unwrap());
    });
    group.finish();
}

fn clock_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_codec");
    group.bench_with_input("scan", &b"04:05:06.123456789"[..], |b, input| {
        let mut clock = Clock::default();
        b.iter(|| clock.scan(ValueRef::Bytes(black_box(input))).unwrap());
    });
    let clock = Clock { hour: 4, minute: 5, second: 6, nanosecond: 123_456_789 };
    group.bench_function("value", |b| {
        b.iter(|| black_box(&clock).to_value().unwrap());
    });
    group.finish();
}

fn string_array_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_array_scan");

    let mut unquoted = String::from("{");
    for i in 0..64 {
        if i > 0 {
            unquoted.push(',');
        }
        unquoted.push_str(&format!("elem{i}"));
    }
    unquoted.push('}');

    let quoted = StringArray((0..64).map(|i| format!("elem,{i}")).collect())
        .to_value()
        .unwrap();
    let quoted = quoted.as_bytes().unwrap().to_vec();

    for (name, input) in [("unquoted", unquoted.into_bytes()), ("quoted", quoted)] {
        group.bench_with_input(name, &input, |b, input| {
            let mut arr = StringArray::default();
            b.iter(|| arr.scan(ValueRef::Bytes(black_box(&input[..]))).unwrap());
        });
    }
    group.finish();
}

fn generic_array_value(c: &mut Criterion) {
    let rows: Vec<Vec<i64>> = (0..16).map(|r| (r * 16..r * 16 + 16).collect()).collect();
    let arr = GenericArray(rows);
    c.bench_function("generic_array_value", |b| {
        b.iter(|| black_box(&arr).to_value().unwrap());
    });
}

fn bytea_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytea_decode");
    let raw: Vec<u8> = (0..=255u8).cycle().take(1024).collect();
    let hex = bytea::encode_hex(&raw);
    let escape = bytea::encode_escape(&raw);

    group.bench_with_input("hex", &hex, |b, input| {
        b.iter(|| bytea::decode(black_box(&input[..])).unwrap());
    });
    group.bench_with_input("escape", &escape, |b, input| {
        b.iter(|| bytea::decode(black_box(&input[..])).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    timestamptz_scan,
    timestamptz_value,
    date_codec,
    clock_codec,
    string_array_scan,
    generic_array_value,
    bytea_decode,
);
criterion_main!(benches);
