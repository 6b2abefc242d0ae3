use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tracker_core::ledger::{Ledger, MAX_TRANSACTIONS};

fn bench_recording(c: &mut Criterion) {
    c.bench_function("record_to_capacity", |b| {
        b.iter(|| {
            let mut ledger = Ledger::new();
            for index in 0..MAX_TRANSACTIONS {
                let amount = 1.0 + (index % 50) as f64;
                if index % 3 == 0 {
                    ledger
                        .record_income(black_box(amount), "salary")
                        .expect("capacity");
                } else {
                    let selection = index % 8 + 1;
                    ledger
                        .record_expense(black_box(amount), selection, "spend")
                        .expect("capacity");
                }
            }
            black_box(ledger.total_expenses());
        })
    });
}

criterion_group!(benches, bench_recording);
criterion_main!(benches);
