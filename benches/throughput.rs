use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use ruler::{field, Document, RuleSet, RuleSetBuilder};

fn build_shared_ruleset() -> (Arc<RuleSet>, Arc<Document>) {
    let mut builder = RuleSetBuilder::new();
    let mut doc = Document::new();
    let n = 20;

    for i in 0..n {
        let path = format!("user.f{i}");
        builder = if i % 2 == 0 {
            doc = doc.set(&path, 10_i64);
            builder.rule(field(&path).gte(1_i64))
        } else {
            doc = doc.set(&path, "alice@example.com");
            builder.rule(field(&path).contains("@example\\."))
        };
    }

    (Arc::new(builder.compile().unwrap()), Arc::new(doc))
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let (ruleset, doc) = build_shared_ruleset();

        group.bench_function(format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let rs = Arc::clone(&ruleset);
                        let d = Arc::clone(&doc);
                        thread::spawn(move || {
                            let start = Instant::now();
                            for _ in 0..per_thread {
                                let _ = rs.evaluate(&d);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                let mut max_elapsed = Duration::ZERO;
                for h in handles {
                    let elapsed = h.join().unwrap();
                    if elapsed > max_elapsed {
                        max_elapsed = elapsed;
                    }
                }
                max_elapsed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
