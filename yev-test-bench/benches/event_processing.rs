extern crate yev_core;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use yev_core::{emit_events, EmitterConfig};
use yev_test_bench::{assert_eq_event, parse_events};

const IN1: &str = r#"
&seq
[[name        , hr, avg  ],
[Mark McGwire, 65, 0.278],
[Sammy Sosa  , 63, 0.288]]
"#;

const IN1_EXPECTED: &str = r#"
+DOC
+SEQ [] &seq
+SEQ []
=VAL :name
=VAL :hr
=VAL :avg
-SEQ
+SEQ []
=VAL :Mark McGwire
=VAL :65
=VAL :0.278
-SEQ
+SEQ []
=VAL :Sammy Sosa
=VAL :63
=VAL :0.288
-SEQ
-SEQ
-DOC"#;

const IN2: &str = r"
&seq
- [name        , hr, avg  ]
- [Mark McGwire, 65, 0.278]
- [Sammy Sosa  , 63, 0.288]
";

const IN2_EXPECTED: &str = r"
+DOC
+SEQ &seq
+SEQ []
=VAL :name
=VAL :hr
=VAL :avg
-SEQ
+SEQ []
=VAL :Mark McGwire
=VAL :65
=VAL :0.278
-SEQ
+SEQ []
=VAL :Sammy Sosa
=VAL :63
=VAL :0.288
-SEQ
-SEQ
-DOC";

const FOLD_INPUT: &str = r"
--- >
 Sammy Sosa completed another
 fine season with great stats.

   63 Home Runs
   0.288 Batting Average

 What a year!
";

const FOLD_EXPECTED: &str = r"
+DOC ---
=VAL >Sammy Sosa completed another fine season with great stats.\n\n  63 Home Runs\n  0.288 Batting Average\n\nWhat a year!\n
-DOC";

const INVOICE: &str = r#"
--- !<tag:clarkevans.com,2002:invoice>
invoice: 34843
date   : 2001-01-23
bill-to: &id001
    given  : Chris
    family : Dumars
    address:
        lines: |
            458 Walkman Dr.
            Suite #292
        city    : Royal Oak
        state   : MI
        postal  : 48046
ship-to: *id001
product:
    - sku         : BL394D
      quantity    : 4
      description : Basketball
      price       : 450.00
    - sku         : BL4438H
      quantity    : 1
      description : Super Hoop
      price       : 2392.00
comments: >
    Late afternoon is best.
    Backup contact is Nancy
    Billsmer @ 338-4338.
"#;

fn bench_folded(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-yaml");
    group.throughput(Throughput::Bytes(FOLD_INPUT.len() as u64));
    group.bench_function("bench_plain", |b| {
        b.iter(|| assert_eq_event(black_box(FOLD_INPUT), black_box(FOLD_EXPECTED)));
    });
    group.finish();
}

fn bench_flow_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-yaml");
    group.throughput(Throughput::Bytes(IN1.len() as u64));
    group.bench_function("bench_flow_simple", |b| {
        b.iter(|| assert_eq_event(black_box(IN1), black_box(IN1_EXPECTED)));
    });
    group.finish();
}

fn bench_block_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench-yaml");
    group.throughput(Throughput::Bytes(IN2.len() as u64));
    group.bench_function("bench_block_simple", |b| {
        b.iter(|| assert_eq_event(black_box(IN2), black_box(IN2_EXPECTED)));
    });
    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let events = parse_events(INVOICE);
    let mut group = c.benchmark_group("bench-emit");
    group.throughput(Throughput::Bytes(INVOICE.len() as u64));
    group.bench_function("bench_emit_invoice", |b| {
        b.iter(|| emit_events(black_box(events.clone()), EmitterConfig::default()));
    });
    group.bench_function("bench_emit_invoice_canonical", |b| {
        b.iter(|| {
            emit_events(
                black_box(events.clone()),
                EmitterConfig::default().canonical(true),
            )
        });
    });
    group.finish();
}

criterion_group!{
    name = benches;
    // This can be any expression that returns a `Criterion` object.
    config = Criterion::default().significance_level(0.01).sample_size(500).warm_up_time(Duration::from_millis(10));
    targets = bench_flow_simple, bench_block_simple, bench_folded, bench_emit
}
criterion_main!(benches);
