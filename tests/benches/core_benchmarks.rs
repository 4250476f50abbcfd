//! # Keyword Server Core Benchmarks
//!
//! | Component | Operation | Shape |
//! |-----------|-----------|-------|
//! | kw-01 Sorter | `sort_descending` on ascending input | O(n²) swaps |
//! | kw-02 Ledger | `log` under contention | one lock per call |
//! | kw-04 Dispatcher | `invoke("keyword 1")` | registry lookup + handler |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kw_01_ordered_list::{sort_descending, ListItem, OrderedListStore, StoreConfig};
use kw_02_call_ledger::{Origin, RecordingLedgerSink, SharedCallLedger};
use kw_04_command_dispatch::{CommandDispatcher, DispatcherConfig, KeywordApi};
use std::sync::Arc;
use std::thread;

// ============================================================================
// KW-01: Sorter
// ============================================================================

fn ascending_store(len: usize) -> OrderedListStore {
    let mut store = OrderedListStore::with_config(&StoreConfig { max_items: len });
    for index in 0..len {
        let value = u8::try_from(index % 256).unwrap_or(u8::MAX);
        store.append(ListItem::new(value)).unwrap();
    }
    store
}

fn bench_sort_descending(c: &mut Criterion) {
    let mut group = c.benchmark_group("kw-01-sort-descending");

    for len in [20usize, 100, 250] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("ascending_input", len), &len, |b, &len| {
            b.iter_batched(
                || ascending_store(len),
                |mut store| black_box(sort_descending(&mut store).unwrap()),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// KW-02: Ledger
// ============================================================================

fn bench_ledger_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("kw-02-ledger");
    const CALLS_PER_THREAD: usize = 500;

    for threads in [1usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * CALLS_PER_THREAD) as u64));
        group.bench_with_input(BenchmarkId::new("log", threads), &threads, |b, &threads| {
            b.iter(|| {
                let ledger = SharedCallLedger::with_sink(Arc::new(RecordingLedgerSink::new()));
                thread::scope(|scope| {
                    for t in 0..threads {
                        let ledger = &ledger;
                        scope.spawn(move || {
                            let origin = if t % 2 == 0 { Origin::Writer } else { Origin::Reader };
                            for _ in 0..CALLS_PER_THREAD {
                                ledger.log(origin, "x").unwrap();
                            }
                        });
                    }
                });
                black_box(ledger.counter())
            })
        });
    }

    group.finish();
}

// ============================================================================
// KW-04: Dispatcher
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let dispatcher = CommandDispatcher::new(DispatcherConfig::default()).unwrap();
    let echo_args = [serde_json::json!("Z")];

    let mut group = c.benchmark_group("kw-04-dispatch");
    group.bench_function("keyword_1", |b| {
        b.iter(|| black_box(runtime.block_on(dispatcher.invoke("keyword 1", &[])).unwrap()))
    });
    group.bench_function("keyword_2", |b| {
        b.iter(|| black_box(runtime.block_on(dispatcher.invoke("keyword 2", &echo_args)).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_sort_descending, bench_ledger_contention, bench_dispatch);
criterion_main!(benches);
