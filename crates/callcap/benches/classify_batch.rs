use callcap_core::{Config, Engine};
use callcap_logs::{CallRecord, Turn};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_call(i: usize) -> CallRecord {
    CallRecord::new().with_duration(40.0 + i as f64).with_turns([
        Turn::agent("Good morning, may I have your name?"),
        Turn::user("My name is Ravi Kumar"),
        Turn::agent("Sorry, could you repeat that?"),
        Turn::user("email is ravi@example.com and phone 9876543210"),
        Turn::user("PAN ABCDE1234F"),
        Turn::agent("Please confirm, fan id: XYZ123"),
        Turn::user("Yes that's correct"),
    ])
}

fn bench_classify_single_call(c: &mut Criterion) {
    let engine = Engine::new(Config::default());
    let call = sample_call(0);

    c.bench_function("classify_single_call", |b| {
        b.iter(|| engine.analyze(black_box(&call)));
    });
}

fn bench_evaluate_500_calls(c: &mut Criterion) {
    let engine = Engine::new(Config::default());
    let calls: Vec<CallRecord> = (0..500).map(sample_call).collect();
    let date = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();

    c.bench_function("evaluate_500_calls", |b| {
        b.iter(|| engine.evaluate(black_box(&calls), date));
    });
}

criterion_group!(benches, bench_classify_single_call, bench_evaluate_500_calls);
criterion_main!(benches);
