use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockroom_events::shared;
use stockroom_inventory::{Inventory, MAX_PRODUCTS};
use stockroom_products::Product;
use stockroom_reporting::{StrategySelector, SummaryBoard};

/// A store at capacity, alternating books and electronics.
fn full_inventory() -> (Inventory, Vec<Product>) {
    let mut inventory = Inventory::new();
    let products: Vec<Product> = (0..MAX_PRODUCTS)
        .map(|i| {
            if i % 2 == 0 {
                Product::book(format!("Book {i}"), "", 9.99, "Author", "Publisher", "2023")
            } else {
                Product::electronic(format!("Device {i}"), "", 199.0, "Brand", "1 year")
            }
        })
        .collect();
    for p in &products {
        inventory.add(p, 1_000_000);
    }
    (inventory, products)
}

fn bench_strategy_update(c: &mut Criterion) {
    let (inventory, _) = full_inventory();
    let mut group = c.benchmark_group("strategy_update");
    group.throughput(Throughput::Elements(MAX_PRODUCTS as u64));

    for (cursor, _) in StrategySelector::cycle().iter().enumerate() {
        let mut selector = StrategySelector::new(inventory.snapshot());
        for _ in 0..cursor {
            selector.advance(inventory.snapshot());
        }
        let name = selector.current().name();

        group.bench_with_input(BenchmarkId::from_parameter(name), &cursor, |b, _| {
            b.iter(|| {
                selector.update(black_box(inventory.snapshot()));
                black_box(selector.current().generate_alert());
            });
        });
    }

    group.finish();
}

fn bench_subtract_with_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtract_with_listeners");

    for listeners in [0usize, 1, 4] {
        let (mut inventory, products) = full_inventory();
        for _ in 0..listeners {
            inventory.attach(shared(SummaryBoard::new(inventory.snapshot())));
        }

        group.bench_with_input(BenchmarkId::from_parameter(listeners), &listeners, |b, _| {
            let mut i = 0usize;
            b.iter(|| {
                let p = &products[i % products.len()];
                inventory.subtract(black_box(p), 1);
                i += 1;
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategy_update, bench_subtract_with_board);
criterion_main!(benches);
