//! Derived-view benchmarks.
//!
//! Run with: `cargo bench -p eventdesk-views`
//!
//! Measures full recomputation of the inventory screen (filter + stats +
//! categories) as the collection grows, since views are rebuilt from scratch
//! on every input change.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use eventdesk_core::{InventoryItemId, Money};
use eventdesk_inventory::{InventoryItem, NewInventoryItem, StockStatus};
use eventdesk_views::{InventoryQuery, InventoryView, Selector};

const CATEGORIES: [&str; 5] = ["Furniture", "Audio/Visual", "Decor", "Kitchen", "Lighting"];

fn inventory(n: usize) -> Vec<InventoryItem> {
    let today = NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date");
    (0..n)
        .map(|i| {
            InventoryItem::from_new(
                InventoryItemId::generate(),
                NewInventoryItem {
                    name: format!("Item {i}"),
                    category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                    quantity: (i % 40) as u32,
                    min_threshold: 5,
                    location: "Warehouse A".to_string(),
                    unit: "piece".to_string(),
                    cost_per_unit: Money::from_cents(100 + (i as u64 % 900)),
                    supplier: (i % 3 == 0).then(|| format!("Supplier {}", i % 17)),
                },
                today,
            )
        })
        .collect()
}

fn bench_inventory_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_view");

    for size in [100usize, 1_000, 10_000] {
        let items = inventory(size);
        let query = InventoryQuery::new(
            "supplier 1",
            Selector::Only("Kitchen".to_string()),
            Selector::Only(StockStatus::Available),
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| InventoryView::compute(black_box(items), black_box(&query)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inventory_view);
criterion_main!(benches);
